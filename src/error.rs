//! # Error reporting
//!
//! A single error type covers every failure of constructing, combining or approximating rational
//! numbers. Each variant belongs to one `ErrorKind`, which is what callers should usually match
//! on.
use std::error;
use std::fmt;

/// Broad classification of an `Error`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// An argument was outside of the domain of the operation.
    InvalidArgument,
    /// A value that should have been an integer wasn't one.
    TypeKind,
    /// Division by a value equal to zero.
    DivisionByZero,
    /// The result can't be represented with the integer type backing the rational.
    Overflow,
}

/// Everything that can go wrong in this crate.
///
/// Values that carry an `f64` hold the offending input, for the message shown to the end user.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Error {
    /// A rational was constructed with a denominator equal to zero.
    ZeroDenominator,
    /// A numerator or denominator given as a float has a fractional part or is not finite.
    NonInteger(f64),
    /// The divisor of a division, or the value of which a reciprocal was taken, is zero.
    DivisionByZero,
    /// An intermediate or final value doesn't fit in the backing integer type.
    Overflow,
    /// The tolerance of an approximation is not a finite, strictly positive number.
    InvalidTolerance(f64),
    /// The value given to the fractional search is not in the half open interval `[0, 1)`.
    FractionOutOfRange(f64),
    /// The value to approximate is infinite or not a number.
    NotFinite(f64),
}

impl Error {
    /// The category this error falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ZeroDenominator
            | Error::InvalidTolerance(_)
            | Error::FractionOutOfRange(_)
            | Error::NotFinite(_) => ErrorKind::InvalidArgument,
            Error::NonInteger(_) => ErrorKind::TypeKind,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
            Error::Overflow => ErrorKind::Overflow,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ZeroDenominator => f.write_str("the denominator of a rational can't be zero"),
            Error::NonInteger(value) => write!(f, "expected an integer, got {}", value),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Overflow => f.write_str("value doesn't fit in the backing integer type"),
            Error::InvalidTolerance(value) => write!(
                f, "the tolerance should be finite and strictly positive, got {}", value,
            ),
            Error::FractionOutOfRange(value) => write!(
                f, "the fractional part should lie in [0, 1), got {}", value,
            ),
            Error::NotFinite(value) => write!(f, "can't approximate non-finite value {}", value),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::error::{Error, ErrorKind};

    #[test]
    fn kind() {
        assert_eq!(Error::ZeroDenominator.kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::InvalidTolerance(0_f64).kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::FractionOutOfRange(1_f64).kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NotFinite(f64::NAN).kind(), ErrorKind::InvalidArgument);
        assert_eq!(Error::NonInteger(0.5).kind(), ErrorKind::TypeKind);
        assert_eq!(Error::DivisionByZero.kind(), ErrorKind::DivisionByZero);
        assert_eq!(Error::Overflow.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn display() {
        assert_eq!(Error::NonInteger(1.5).to_string(), "expected an integer, got 1.5");
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Error::FractionOutOfRange(-0.25).to_string(),
            "the fractional part should lie in [0, 1), got -0.25",
        );
    }
}
