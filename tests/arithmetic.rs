//! # Algebraic properties
//!
//! Randomized checks of the field laws and the canonical form, using only the public interface.
use itertools::Itertools;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use farey::{Error, ErrorKind, R32, R64, Rational32, Rational64};

const SAMPLES: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

fn random_rational(rng: &mut StdRng) -> Rational64 {
    let numerator = rng.random_range(-1_000..=1_000);
    let denominator = loop {
        let denominator = rng.random_range(-1_000..=1_000);
        if denominator != 0 {
            break denominator;
        }
    };

    Rational64::new(numerator, denominator).unwrap()
}

#[test]
fn normalized() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let numerator: i64 = rng.random_range(-10_000..=10_000);
        let denominator: i64 = rng.random_range(1..=10_000) * if rng.random_bool(0.5) { -1 } else { 1 };

        let x = Rational64::new(numerator, denominator).unwrap();
        assert_eq!(x.numerator().gcd(&x.denominator()), 1);
        assert!(x.denominator() > 0);
        // Same value as the input
        assert_eq!(x.numerator() * denominator, numerator * x.denominator());
        // Constructing from the canonical form changes nothing
        assert_eq!(Rational64::new(x.numerator(), x.denominator()), Ok(x));
    }
}

#[test]
fn additive() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (a, b, c) = (random_rational(&mut rng), random_rational(&mut rng), random_rational(&mut rng));

        assert_eq!(a + b, b + a);
        assert_eq!(a + Rational64::zero(), a);
        assert_eq!(a + R64!(0, 1), a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a - a, Rational64::zero());
        assert_eq!(a - b, -(b - a));
    }
}

#[test]
fn multiplicative() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let (a, b, c) = (random_rational(&mut rng), random_rational(&mut rng), random_rational(&mut rng));

        assert_eq!(a * b, b * a);
        assert_eq!(a * Rational64::one(), a);
        assert_eq!(a * (b + c), a * b + a * c);

        if b.is_zero() {
            assert_eq!(a.try_div(b), Err(Error::DivisionByZero));
        } else {
            assert_eq!((a / b) * b, a);
            assert_eq!(b * b.try_recip().unwrap(), Rational64::one());
        }
    }
}

#[test]
fn division_by_zero_valued_operand() {
    for (numerator, denominator) in [(0, 1), (0, -7), (0, 1_000)] {
        let zero = Rational64::new(numerator, denominator).unwrap();
        let result = R64!(3, 4).try_div(zero);
        assert_eq!(result, Err(Error::DivisionByZero));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::DivisionByZero);
    }

    assert_eq!(Rational64::new(1, 0).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn reduced_results_in_range() {
    let x = Rational32::new(1, 1 << 16).unwrap();
    assert_eq!(x + x, R32!(1, 1 << 15));
    assert_eq!(x * R32!(1 << 16, 3), R32!(1, 3));

    let x = R64!(1 << 62, 3);
    assert_eq!(x.try_mul(R64!(3, 1 << 62)), Ok(Rational64::one()));
    assert_eq!(x.try_div(x), Ok(Rational64::one()));

    let x = R64!(5, 1 << 40);
    assert_eq!(x.try_add(x), Ok(R64!(5, 1 << 39)));
    assert_eq!(x.try_sub(R64!(3, 1 << 40)), Ok(R64!(1, 1 << 39)));
}

#[test]
fn division_round_trip() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let scale = 1_i64 << rng.random_range(20..40_u32);
        let a = Rational64::new(rng.random_range(-1_000..=1_000), scale).unwrap();
        let b = Rational64::new(rng.random_range(1..=1_000), scale).unwrap();

        assert_eq!((a / b) * b, a);
        assert_eq!((a + b) - b, a);
    }
}

#[test]
fn total_order() {
    let mut rng = rng();
    let values = (0..50).map(|_| random_rational(&mut rng)).collect::<Vec<_>>();

    for (a, b) in values.iter().cartesian_product(values.iter()) {
        let relations = [a.less_than(b), a == b, a.greater_than(b)];
        assert_eq!(relations.iter().filter(|&&holds| holds).count(), 1);

        // Agrees with the float values, which are far enough apart at this size
        if a != b {
            assert_eq!(a.less_than(b), a.decimal() < b.decimal());
        }
        assert_eq!(a < b, b > a);
    }

    let sorted = values.iter().copied().sorted().collect::<Vec<_>>();
    assert!(sorted.iter().tuple_windows().all(|(a, b)| !b.less_than(a)));
}

#[test]
fn sign() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let x = random_rational(&mut rng);
        assert_eq!(x.is_negative(), x.decimal() < 0_f64);
        assert_eq!(x.is_negative(), x < Rational64::zero());
        assert!(!x.abs().is_negative());
    }
}
