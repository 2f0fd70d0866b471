//! # Ordering
//!
//! Comparison is done exactly, by cross multiplication. Equality needs no arithmetic at all
//! because values are canonical.
use std::cmp::Ordering;

use crate::rational::Rational;
use crate::traits::SignedInteger;

impl<I: SignedInteger> Rational<I> {
    /// Whether `self` is strictly smaller than `other`.
    ///
    /// Compares `self.numerator * other.denominator` with `other.numerator * self.denominator`,
    /// which relies on both denominators being positive. When one of these products doesn't fit
    /// in `I`, the comparison is done on the continued fraction expansions instead.
    pub fn less_than(&self, other: &Self) -> bool {
        let left = self.numerator.checked_mul(&other.denominator);
        let right = other.numerator.checked_mul(&self.denominator);

        match (left, right) {
            (Some(left), Some(right)) => left < right,
            _ => compare_expansions(self.into_parts(), other.into_parts()) == Ordering::Less,
        }
    }

    /// Whether `self` is strictly larger than `other`.
    ///
    /// Neither equal nor smaller, such that exactly one of the three relations holds for any pair.
    pub fn greater_than(&self, other: &Self) -> bool {
        self != other && !self.less_than(other)
    }
}

/// Compare two fractions with positive denominators without multiplying.
///
/// Integer parts are compared first. If they are equal, the remainders are compared through
/// their reciprocals, which reverses the order.
fn compare_expansions<I: SignedInteger>(mut left: (I, I), mut right: (I, I)) -> Ordering {
    debug_assert!(left.1 > I::zero() && right.1 > I::zero());

    // Parity of the number of reciprocals taken
    let mut reversed = false;
    loop {
        let (left_whole, left_remainder) = left.0.div_mod_floor(&left.1);
        let (right_whole, right_remainder) = right.0.div_mod_floor(&right.1);

        let ordering = match left_whole.cmp(&right_whole) {
            Ordering::Equal => match (left_remainder.is_zero(), right_remainder.is_zero()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    left = (left.1, left_remainder);
                    right = (right.1, right_remainder);
                    reversed = !reversed;
                    continue;
                },
            },
            ordering => ordering,
        };

        break if reversed { ordering.reverse() } else { ordering };
    }
}

impl<I: SignedInteger> Ord for Rational<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.less_than(other) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl<I: SignedInteger> PartialOrd for Rational<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::rational::{Rational32, Rational64};
    use crate::rational::compare::compare_expansions;
    use crate::R64;

    #[test]
    fn expansions() {
        assert_eq!(compare_expansions((1, 2), (1, 3)), Ordering::Greater);
        assert_eq!(compare_expansions((1, 3), (1, 2)), Ordering::Less);
        assert_eq!(compare_expansions((2, 4), (1, 2)), Ordering::Equal);
        assert_eq!(compare_expansions((-7, 3), (-2, 1)), Ordering::Less);
        assert_eq!(compare_expansions((13, 8), (21, 13)), Ordering::Greater);
        assert_eq!(compare_expansions((0, 1), (-1, 5)), Ordering::Greater);
        assert_eq!(compare_expansions((5, 1), (5, 1)), Ordering::Equal);
    }

    #[test]
    fn cross_multiplication() {
        assert!(R64!(1, 3).less_than(&R64!(1, 2)));
        assert!(R64!(-1, 2).less_than(&R64!(-1, 3)));
        assert!(!R64!(2, 4).less_than(&R64!(1, 2)));
        assert!(R64!(3, 2).greater_than(&R64!(4, 3)));
        assert!(!R64!(3, 2).greater_than(&R64!(6, 4)));
        assert!(R64!(0, 7).greater_than(&R64!(-1, 7)));
    }

    #[test]
    fn overflowing_cross_products() {
        let max = i32::MAX;
        let x = Rational32::new(max, max - 1).unwrap();
        let y = Rational32::new(max - 1, max - 2).unwrap();
        assert!(max.checked_mul(max - 2).is_none());
        assert!(x.less_than(&y));
        assert!(!y.less_than(&x));
        assert!(y.greater_than(&x));
        assert!(x < y);

        let x = Rational32::new(-max, max - 1).unwrap();
        let y = Rational32::new(-(max - 1), max - 2).unwrap();
        assert!(y.less_than(&x));
        assert!(x.greater_than(&y));
        assert_eq!(x.cmp(&y), Ordering::Greater);

        let x = Rational32::new(i32::MIN, 3).unwrap();
        let y = Rational32::new(i32::MAX, 2).unwrap();
        assert!(x < y);
    }

    #[test]
    fn sort() {
        let mut values = vec![R64!(1, 2), R64!(-3, 4), R64!(0, 1), R64!(2, 3), R64!(-1, 1)];
        values.sort();
        assert_eq!(values, vec![R64!(-1, 1), R64!(-3, 4), R64!(0, 1), R64!(1, 2), R64!(2, 3)]);

        assert_eq!(values.iter().max(), Some(&Rational64::new(2, 3).unwrap()));
    }
}
