//! # Stern-Brocot search
//!
//! Bisection of `[0, 1]` by mediants. The mediant of two neighbours in the tree always lies strictly
//! between them and is already in lowest terms.
//!
//! Values close to a fraction with a small denominator take long runs of steps in the same
//! direction, such as `1/2, 1/3, 1/4, ...` towards zero. Such a run is taken in one go: its
//! fractions are found by galloping and bisecting over the run length, which gives the same result
//! as taking the steps one by one.
use log::{debug, trace};
use num_traits::{One, Zero};

use crate::error::Error;
use crate::rational::Rational;
use crate::traits::SignedInteger;

/// What the search does after testing a fraction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Step {
    /// Within tolerance, stop.
    Found,
    /// The target is larger, the fraction becomes the lower bound.
    Up,
    /// The target is smaller, the fraction becomes the upper bound.
    Down,
}

/// Find the first fraction on the path to `fraction` that is within `tolerance` of it.
///
/// There is no bound on the number of iterations: the distance of the bounds to the target
/// shrinks until the tolerance is met. Only running out of the range of `I` stops the search
/// early.
///
/// # Arguments
///
/// * `fraction`: Value in `[0, 1)`.
/// * `tolerance`: Finite, strictly positive.
pub(super) fn search<I: SignedInteger>(fraction: f64, tolerance: f64) -> Result<Rational<I>, Error> {
    debug_assert!(tolerance.is_finite() && tolerance > 0_f64);

    if !(0_f64..1_f64).contains(&fraction) {
        return Err(Error::FractionOutOfRange(fraction));
    }
    // The bisection below assumes a target strictly inside the interval
    if fraction == 0_f64 {
        return Ok(Rational::zero());
    }

    let classify = |test: Rational<I>| {
        let decimal = test.decimal();
        if (fraction - decimal).abs() <= tolerance {
            Step::Found
        } else if fraction > decimal {
            Step::Up
        } else {
            Step::Down
        }
    };

    let mut left = Rational::zero();
    let mut right = Rational::one();
    let mut runs = 0_u64;
    loop {
        runs += 1;
        let test = mediant(left, right)?;
        trace!("run {}: {} in ({}, {})", runs, test, left, right);

        match classify(test) {
            Step::Found => {
                debug!("approximated {} by {} after {} runs", fraction, test, runs);
                break Ok(test);
            },
            Step::Up => left = last_in_run(left, right, test, |x| classify(x) == Step::Up),
            Step::Down => right = last_in_run(right, left, test, |x| classify(x) == Step::Down),
        }
    }
}

/// Last fraction of a run of steps that all move the same bound.
///
/// While the search keeps replacing `moving` by the mediant, the fractions it visits are
/// `moving + count * fixed` (adding numerators and denominators) for `count = 1, 2, ...`. They
/// approach `fixed` monotonically, so `continues` holds for a prefix of them only.
///
/// # Arguments
///
/// * `moving`: The bound that gets replaced.
/// * `fixed`: The bound that stays.
/// * `first`: The mediant of the bounds, for which `continues` holds.
/// * `continues`: Whether the search replaces `moving` by a given fraction.
fn last_in_run<I: SignedInteger>(
    moving: Rational<I>,
    fixed: Rational<I>,
    first: Rational<I>,
    continues: impl Fn(Rational<I>) -> bool,
) -> Rational<I> {
    let in_run = |count: I| walk(moving, fixed, count).filter(|&x| continues(x));

    let mut last = (I::one(), first);
    // Gallop to a count that isn't in the run
    let mut beyond = I::one();
    loop {
        beyond = match beyond.checked_add(&beyond) {
            Some(doubled) => doubled,
            // No fraction exists this far out, the denominator would overflow
            None => I::max_value(),
        };
        match in_run(beyond) {
            Some(fraction) if beyond < I::max_value() => last = (beyond, fraction),
            _ => break,
        }
    }

    // Bisect between the last count in the run and the first one known to be beyond it
    let two = I::one() + I::one();
    while beyond - last.0 > I::one() {
        let middle = last.0 + (beyond - last.0) / two;
        match in_run(middle) {
            Some(fraction) => last = (middle, fraction),
            None => beyond = middle,
        }
    }

    trace!("{} steps from {} towards {}", last.0, moving, fixed);
    last.1
}

/// The fraction `count` mediant steps from `from` towards `towards`, if it is representable.
fn walk<I: SignedInteger>(from: Rational<I>, towards: Rational<I>, count: I) -> Option<Rational<I>> {
    let numerator = count.checked_mul(&towards.numerator())?.checked_add(&from.numerator())?;
    let denominator = count.checked_mul(&towards.denominator())?.checked_add(&from.denominator())?;

    Rational::new(numerator, denominator).ok()
}

/// Fraction formed by the sums of the numerators and of the denominators.
fn mediant<I: SignedInteger>(left: Rational<I>, right: Rational<I>) -> Result<Rational<I>, Error> {
    let numerator = left.numerator().checked_add(&right.numerator());
    let denominator = left.denominator().checked_add(&right.denominator());

    match (numerator, denominator) {
        (Some(numerator), Some(denominator)) => Rational::new(numerator, denominator),
        _ => {
            debug!("mediant of {} and {} out of range", left, right);
            Err(Error::Overflow)
        },
    }
}
