//! # Approximation of floats by fractions
//!
//! A float is split in its integer part and its fractional part. The latter is located in the
//! Stern-Brocot tree, which contains every reduced fraction between zero and one exactly once. The
//! first fraction on the path towards the value that is within tolerance is the result.
//!
//! A plain binary search over the interval would only produce denominators that are powers of
//! two. Walking the tree produces the fractions with the smallest denominators first, so `0.4`
//! becomes `2/5` rather than something like `13421773/33554432`.
use log::debug;

use crate::error::Error;
use crate::rational::Rational;
use crate::traits::SignedInteger;

mod stern_brocot;

/// Tolerance used when none is specified.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Approximate a float by a fraction.
///
/// # Arguments
///
/// * `value`: Finite value to approximate.
/// * `tolerance`: Finite, strictly positive bound on the absolute difference between the value and
/// the decimal value of the returned fraction.
///
/// # Errors
///
/// See `Approximator::new` and `Approximator::approximate`.
pub fn approximate<I: SignedInteger>(value: f64, tolerance: f64) -> Result<Rational<I>, Error> {
    Approximator::new(tolerance)?.approximate(value)
}

/// Configuration of the approximation.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Approximator {
    tolerance: f64,
}

impl Approximator {
    /// Create a new instance.
    ///
    /// # Errors
    ///
    /// `Error::InvalidTolerance` if the tolerance is not finite or not strictly positive.
    pub fn new(tolerance: f64) -> Result<Self, Error> {
        if tolerance.is_finite() && tolerance > 0_f64 {
            Ok(Self { tolerance })
        } else {
            Err(Error::InvalidTolerance(tolerance))
        }
    }

    /// Maximum absolute difference between a value and its approximation.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Approximate a float by a fraction.
    ///
    /// The fractional part is searched for, the integer part is added back afterwards.
    ///
    /// # Errors
    ///
    /// `Error::NotFinite` for infinite values and NaN. `Error::Overflow` if the integer part, the
    /// fraction found or their sum doesn't fit in `I`.
    pub fn approximate<I: SignedInteger>(&self, value: f64) -> Result<Rational<I>, Error> {
        if !value.is_finite() {
            return Err(Error::NotFinite(value));
        }

        let (whole, fraction) = split(value);
        let whole = I::from_f64(whole).ok_or_else(|| {
            debug!("integer part {} of {} out of range", whole, value);
            Error::Overflow
        })?;
        let fraction = self.approximate_fraction(fraction)?;

        Rational::integer(whole).try_add(fraction)
    }

    /// Approximate a value in `[0, 1)` by a fraction in the same interval.
    ///
    /// # Errors
    ///
    /// `Error::FractionOutOfRange` if the value is outside of the interval, `Error::Overflow` if
    /// the search needs a denominator that doesn't fit in `I`.
    pub fn approximate_fraction<I: SignedInteger>(
        &self,
        fraction: f64,
    ) -> Result<Rational<I>, Error> {
        stern_brocot::search(fraction, self.tolerance)
    }
}

impl Default for Approximator {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}

/// Split a finite value into an integer and a value in `[0, 1)`.
///
/// For tiny negative values, the subtraction rounds the fractional part up to one. That is
/// carried into the integer part.
fn split(value: f64) -> (f64, f64) {
    let whole = value.floor();
    let fraction = value - whole;

    if fraction < 1_f64 {
        (whole, fraction)
    } else {
        (whole + 1_f64, 0_f64)
    }
}
