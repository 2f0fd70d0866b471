//! # Rational numbers
//!
//! Exact fractions backed by a pair of fixed size integers. Values are always kept in their
//! canonical form: reduced to lowest terms, with the sign carried by the numerator. As a
//! consequence, structural equality is numerical equality.
use std::fmt;

use num_traits::Zero;

use crate::approximation::Approximator;
use crate::error::Error;
use crate::traits::SignedInteger;

mod compare;
mod ops;
mod macros;

/// Rational backed by an `i32`.
pub type Rational32 = Rational<i32>;
/// Rational backed by an `i64`.
pub type Rational64 = Rational<i64>;
/// Rational backed by an `i128`.
pub type Rational128 = Rational<i128>;

/// An exact fraction in canonical form.
///
/// The denominator is strictly positive and shares no factor with the numerator. The only way to
/// create a value is through `Rational::new` (or something calling it), so no value violating this
/// exists.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational<I> {
    numerator: I,
    denominator: I,
}

impl<I: SignedInteger> Rational<I> {
    /// Create a new rational, reduced to lowest terms.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any nonzero integer. A negative sign is moved to the numerator.
    ///
    /// # Errors
    ///
    /// `Error::ZeroDenominator` if the denominator is zero. `Error::Overflow` if the canonical form
    /// isn't representable, which only happens when flipping the sign of `I::min_value()`.
    pub fn new(numerator: I, denominator: I) -> Result<Self, Error> {
        let (numerator, denominator) = normalize(numerator, denominator)?;
        Ok(Self { numerator, denominator })
    }

    /// Create a new rational from two floats that should hold integer values.
    ///
    /// # Errors
    ///
    /// `Error::NonInteger` if either value has a fractional part or isn't finite,
    /// `Error::Overflow` if it doesn't fit in `I` and otherwise anything `Rational::new` returns.
    pub fn from_f64_parts(numerator: f64, denominator: f64) -> Result<Self, Error> {
        Self::new(integral(numerator)?, integral(denominator)?)
    }

    /// An integer as a rational, with denominator one.
    pub fn integer(value: I) -> Self {
        Self { numerator: value, denominator: I::one() }
    }

    /// Approximate a float by the fraction found first in a Stern-Brocot search.
    ///
    /// See `Approximator::approximate`.
    pub fn approximate(value: f64, tolerance: f64) -> Result<Self, Error> {
        Approximator::new(tolerance)?.approximate(value)
    }

    /// The numerator, carrying the sign of the value.
    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// The denominator, always strictly positive.
    pub fn denominator(&self) -> I {
        self.denominator
    }

    /// Take the value apart into its numerator and denominator.
    pub fn into_parts(self) -> (I, I) {
        (self.numerator, self.denominator)
    }

    /// Whether the value is strictly smaller than zero.
    ///
    /// Defined through the sign of the product of numerator and denominator, computed without
    /// multiplying.
    pub fn is_negative(&self) -> bool {
        !self.numerator.is_zero() && (self.numerator < I::zero()) != (self.denominator < I::zero())
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Floating point quotient of numerator and denominator.
    ///
    /// Informational only, nothing in this crate computes with this value other than the
    /// convergence check of the approximation.
    pub fn decimal(&self) -> f64 {
        // Conversion to a float is total for the primitive integers.
        let numerator = self.numerator.to_f64().unwrap_or(f64::NAN);
        let denominator = self.denominator.to_f64().unwrap_or(f64::NAN);
        numerator / denominator
    }
}

/// Reduce a pair to lowest terms and move the sign to the numerator.
fn normalize<I: SignedInteger>(numerator: I, denominator: I) -> Result<(I, I), Error> {
    if denominator.is_zero() {
        return Err(Error::ZeroDenominator);
    }
    if numerator.is_zero() {
        return Ok((I::zero(), I::one()));
    }
    if numerator == denominator {
        return Ok((I::one(), I::one()));
    }

    // The values differ and are nonzero, so at most one of them is `I::min_value()` and the gcd
    // is positive.
    let gcd = numerator.gcd(&denominator);
    let (numerator, denominator) = (numerator / gcd, denominator / gcd);

    if denominator < I::zero() {
        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(numerator), Some(denominator)) => Ok((numerator, denominator)),
            _ => Err(Error::Overflow),
        }
    } else {
        Ok((numerator, denominator))
    }
}

fn integral<I: SignedInteger>(value: f64) -> Result<I, Error> {
    if !value.is_finite() || value.fract() != 0_f64 {
        return Err(Error::NonInteger(value));
    }

    I::from_f64(value).ok_or(Error::Overflow)
}

impl<I: SignedInteger> Default for Rational<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: SignedInteger> From<I> for Rational<I> {
    fn from(value: I) -> Self {
        Self::integer(value)
    }
}

impl<I: fmt::Display> fmt::Display for Rational<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
