//! Constructors for the [`rug`] values underlying every [`Number`](crate::Number).
//!
//! Approximate values are always created at [`PRECISION`] bits so that arithmetic between them
//! never silently loses bits to a narrower operand.

use rug::{float::Special, Assign, Complex, Float, Integer};

/// Bits of precision of every approximate value.
pub const PRECISION: u32 = 512;

/// Converts any integer-like value into an [`Integer`].
pub fn int(n: impl Into<Integer>) -> Integer {
    n.into()
}

/// Creates a [`Float`] at [`PRECISION`] bits.
pub fn float<T>(value: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, value)
}

/// Creates a [`Complex`] number at [`PRECISION`] bits for both parts.
pub fn complex<T>(value: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, value)
}

/// NaN or one of the infinities.
pub fn special(kind: Special) -> Float {
    float(kind)
}
