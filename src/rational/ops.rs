//! # Arithmetic
//!
//! The fallible operations are the primary interface. Each of them forms a numerator and
//! denominator with checked integer arithmetic and hands them to `Rational::new`, which does all
//! validation and normalization. Common factors of the operands are divided out before
//! multiplying, so that only results that don't fit in `I` after reduction are reported as an
//! overflow.
//!
//! The operator traits are implemented on top of these and panic when the fallible version
//! fails, like the operators of the primitive integers do.
use num_traits::One;

use crate::error::Error;
use crate::rational::Rational;
use crate::traits::SignedInteger;

/// Turn a missing result of checked integer arithmetic into an error.
fn checked<I>(value: Option<I>) -> Result<I, Error> {
    value.ok_or(Error::Overflow)
}

/// Positive common factor of two integers that is safe to divide both of them by.
///
/// Zero shares every factor with the other value, but dividing it out gains nothing, so one is
/// used instead. The gcd of two times `I::min_value()` isn't representable.
fn common_factor<I: SignedInteger>(left: I, right: I) -> I {
    if left.is_zero() || right.is_zero() || (left == I::min_value() && right == I::min_value()) {
        I::one()
    } else {
        left.gcd(&right)
    }
}

impl<I: SignedInteger> Rational<I> {
    /// Sum of two rationals.
    ///
    /// # Errors
    ///
    /// `Error::Overflow` when an intermediate product or the sum doesn't fit in `I`.
    pub fn try_add(self, rhs: Self) -> Result<Self, Error> {
        let (left, right, denominator) = self.over_common_denominator(rhs)?;
        let numerator = checked(left.checked_add(&right))?;

        Self::new(numerator, denominator)
    }

    /// Difference of two rationals.
    ///
    /// # Errors
    ///
    /// `Error::Overflow` when an intermediate product or the difference doesn't fit in `I`.
    pub fn try_sub(self, rhs: Self) -> Result<Self, Error> {
        let (left, right, denominator) = self.over_common_denominator(rhs)?;
        let numerator = checked(left.checked_sub(&right))?;

        Self::new(numerator, denominator)
    }

    /// Numerators of both values over the least common multiple of the denominators, and that
    /// multiple.
    fn over_common_denominator(self, rhs: Self) -> Result<(I, I, I), Error> {
        // Denominators are positive
        let gcd = self.denominator.gcd(&rhs.denominator);
        let (left_factor, right_factor) = (rhs.denominator / gcd, self.denominator / gcd);

        let left = checked(self.numerator.checked_mul(&left_factor))?;
        let right = checked(rhs.numerator.checked_mul(&right_factor))?;
        let denominator = checked(right_factor.checked_mul(&rhs.denominator))?;

        Ok((left, right, denominator))
    }

    /// Product of two rationals.
    ///
    /// # Errors
    ///
    /// `Error::Overflow` when the reduced product doesn't fit in `I`.
    pub fn try_mul(self, rhs: Self) -> Result<Self, Error> {
        let (numerator, denominator) = cross_reduced_product(
            (self.numerator, self.denominator),
            (rhs.numerator, rhs.denominator),
        )?;

        Self::new(numerator, denominator)
    }

    /// Quotient of two rationals.
    ///
    /// There is no separate check on the divisor: a zero divisor produces a zero denominator,
    /// which `Rational::new` rejects.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if `rhs` is zero, `Error::Overflow` when the reduced quotient
    /// doesn't fit in `I`.
    pub fn try_div(self, rhs: Self) -> Result<Self, Error> {
        let (numerator, denominator) = cross_reduced_product(
            (self.numerator, self.denominator),
            (rhs.denominator, rhs.numerator),
        )?;

        Self::new(numerator, denominator).map_err(|error| match error {
            Error::ZeroDenominator => Error::DivisionByZero,
            other => other,
        })
    }

    /// Additive inverse.
    ///
    /// # Errors
    ///
    /// `Error::Overflow` if the numerator is `I::min_value()`.
    pub fn try_neg(self) -> Result<Self, Error> {
        Self::new(checked(self.numerator.checked_neg())?, self.denominator)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if the value is zero.
    pub fn try_recip(self) -> Result<Self, Error> {
        Self::one().try_div(self)
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// If the numerator is `I::min_value()`, see `Rational::try_neg`.
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }
}

/// Multiply `a / b` by `c / d` after dividing out the factors shared by `a` and `d` and by `c`
/// and `b`.
///
/// The input pairs are reduced, so the resulting pair is reduced as well, up to its sign.
fn cross_reduced_product<I: SignedInteger>(
    (a, b): (I, I),
    (c, d): (I, I),
) -> Result<(I, I), Error> {
    let ad = common_factor(a, d);
    let cb = common_factor(c, b);

    let numerator = checked((a / ad).checked_mul(&(c / cb)))?;
    let denominator = checked((b / cb).checked_mul(&(d / ad)))?;

    Ok((numerator, denominator))
}

/// Implement an operator trait for all combinations of owned values and references, through the
/// fallible method with the same meaning.
macro_rules! forward_binary {
    ($trait_name:ident, $method:ident, $assign_trait_name:ident, $assign_method:ident, $fallible:ident) => {
        impl<I: SignedInteger> std::ops::$trait_name for Rational<I> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.$fallible(rhs).unwrap_or_else(|error| panic!("{}", error))
            }
        }

        impl<I: SignedInteger> std::ops::$trait_name<&Rational<I>> for Rational<I> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                std::ops::$trait_name::$method(self, *rhs)
            }
        }

        impl<I: SignedInteger> std::ops::$trait_name<Rational<I>> for &Rational<I> {
            type Output = Rational<I>;

            fn $method(self, rhs: Rational<I>) -> Self::Output {
                std::ops::$trait_name::$method(*self, rhs)
            }
        }

        impl<I: SignedInteger> std::ops::$trait_name for &Rational<I> {
            type Output = Rational<I>;

            fn $method(self, rhs: Self) -> Self::Output {
                std::ops::$trait_name::$method(*self, *rhs)
            }
        }

        impl<I: SignedInteger> std::ops::$assign_trait_name for Rational<I> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = std::ops::$trait_name::$method(*self, rhs);
            }
        }

        impl<I: SignedInteger> std::ops::$assign_trait_name<&Rational<I>> for Rational<I> {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = std::ops::$trait_name::$method(*self, *rhs);
            }
        }
    }
}

forward_binary!(Add, add, AddAssign, add_assign, try_add);
forward_binary!(Sub, sub, SubAssign, sub_assign, try_sub);
forward_binary!(Mul, mul, MulAssign, mul_assign, try_mul);
forward_binary!(Div, div, DivAssign, div_assign, try_div);

mod neg {
    use std::ops::Neg;

    use crate::rational::Rational;
    use crate::traits::SignedInteger;

    impl<I: SignedInteger> Neg for Rational<I> {
        type Output = Self;

        fn neg(self) -> Self::Output {
            self.try_neg().unwrap_or_else(|error| panic!("{}", error))
        }
    }

    impl<I: SignedInteger> Neg for &Rational<I> {
        type Output = Rational<I>;

        fn neg(self) -> Self::Output {
            Neg::neg(*self)
        }
    }
}

mod identities {
    use std::iter::{Product, Sum};

    use num_traits::{One, Zero};

    use crate::rational::Rational;
    use crate::traits::SignedInteger;

    impl<I: SignedInteger> Zero for Rational<I> {
        fn zero() -> Self {
            Self::integer(I::zero())
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero()
        }
    }

    impl<I: SignedInteger> One for Rational<I> {
        fn one() -> Self {
            Self::integer(I::one())
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }
    }

    impl<I: SignedInteger> Sum for Rational<I> {
        fn sum<It: Iterator<Item=Self>>(iter: It) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<'a, I: SignedInteger + 'a> Sum<&'a Rational<I>> for Rational<I> {
        fn sum<It: Iterator<Item=&'a Self>>(iter: It) -> Self {
            iter.fold(Self::zero(), |total, item| total + item)
        }
    }

    impl<I: SignedInteger> Product for Rational<I> {
        fn product<It: Iterator<Item=Self>>(iter: It) -> Self {
            iter.fold(Self::one(), |total, item| total * item)
        }
    }
}

mod conversion {
    use num_traits::{FromPrimitive, ToPrimitive};

    use crate::approximation::Approximator;
    use crate::rational::Rational;
    use crate::traits::SignedInteger;

    /// Integer conversions truncate toward zero.
    impl<I: SignedInteger> ToPrimitive for Rational<I> {
        fn to_i64(&self) -> Option<i64> {
            (self.numerator / self.denominator).to_i64()
        }

        fn to_i128(&self) -> Option<i128> {
            (self.numerator / self.denominator).to_i128()
        }

        fn to_u64(&self) -> Option<u64> {
            (self.numerator / self.denominator).to_u64()
        }

        fn to_u128(&self) -> Option<u128> {
            (self.numerator / self.denominator).to_u128()
        }

        fn to_f64(&self) -> Option<f64> {
            Some(self.decimal())
        }
    }

    /// Floats are approximated with the default tolerance.
    impl<I: SignedInteger> FromPrimitive for Rational<I> {
        fn from_i64(n: i64) -> Option<Self> {
            I::from_i64(n).map(Self::integer)
        }

        fn from_i128(n: i128) -> Option<Self> {
            I::from_i128(n).map(Self::integer)
        }

        fn from_u64(n: u64) -> Option<Self> {
            I::from_u64(n).map(Self::integer)
        }

        fn from_u128(n: u128) -> Option<Self> {
            I::from_u128(n).map(Self::integer)
        }

        fn from_f64(n: f64) -> Option<Self> {
            Approximator::default().approximate(n).ok()
        }
    }
}
