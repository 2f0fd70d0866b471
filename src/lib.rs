//! # Exact rational numbers
//!
//! Fractions of fixed size integers that are kept in lowest terms, with arithmetic and
//! comparison that never go through floating point. Overflow of the backing integer type is
//! reported as an error instead of wrapping.
//!
//! Floats can be turned into fractions by walking the Stern-Brocot tree, which finds the
//! "natural" fraction with the smallest denominator within a tolerance:
//!
//! ```
//! use farey::{approximate, Rational64};
//!
//! let x: Rational64 = approximate(2.75, 1e-6)?;
//! assert_eq!(x, Rational64::new(11, 4)?);
//! assert_eq!(x.to_string(), "11/4");
//! # Ok::<(), farey::Error>(())
//! ```
#![warn(missing_docs)]

pub mod approximation;
pub mod error;
pub mod rational;
pub mod traits;

pub use approximation::{approximate, Approximator, DEFAULT_TOLERANCE};
pub use error::{Error, ErrorKind};
pub use rational::{Rational, Rational32, Rational64, Rational128};
