/// Shorthand for creating a rational number in tests.
///
/// With two arguments, the numerator and denominator. With one argument, a value that is
/// approximated with the default tolerance.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::Rational32::approximate($value as f64, $crate::DEFAULT_TOLERANCE).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
///
/// With two arguments, the numerator and denominator. With one argument, a value that is
/// approximated with the default tolerance.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::Rational64::approximate($value as f64, $crate::DEFAULT_TOLERANCE).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational64::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
///
/// With two arguments, the numerator and denominator. With one argument, a value that is
/// approximated with the default tolerance.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::Rational128::approximate($value as f64, $crate::DEFAULT_TOLERANCE).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational128::new($numer, $denom).unwrap()
    };
}
