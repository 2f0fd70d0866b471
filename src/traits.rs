//! # Traits
//!
//! The integer types that can back a rational number.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_integer::Integer;
use num_traits::{CheckedNeg, FromPrimitive, PrimInt, Signed};

/// A fixed size, signed, primitive integer.
///
/// All arithmetic on rationals is done with the checked operations of this type, such that
/// leaving its range is reported rather than wrapped.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait SignedInteger:
    PrimInt +
    Signed +
    Integer +
    CheckedNeg +
    FromPrimitive +
    Hash +
    Debug +
    Display +
{
}
impl<T> SignedInteger for T
where
    T: PrimInt + Signed + Integer + CheckedNeg + FromPrimitive + Hash + Debug + Display,
{
}
