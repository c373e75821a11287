//! The numeric tower: exact integers and rationals, approximate reals, and complex numbers.
//!
//! A [`Number`] is always stored at the lowest level of the tower that can represent it exactly.
//! Every constructor and every arithmetic operation passes its result through
//! [`Number::normalize`], so `6 / 3` is the integer `2`, a float holding exactly `4.0` is the
//! integer `4`, and a complex number with a zero imaginary part is a real number.
//!
//! The real NaN value doubles as the *undefined* sentinel. Unlike IEEE comparison, the sentinel is
//! equal to itself, so a tree containing it still has a well-defined fixed point.

mod arith;
mod fmt;
mod power;

use crate::error::DivisionByZero;
use crate::primitive::{complex, float, int, special};
use rug::{float::Special, Complex, Float, Integer, Rational};
use std::hash::{Hash, Hasher};
use sym_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number at some level of the numeric tower.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An arbitrary-precision integer.
    Integer(Integer),

    /// A reduced fraction with a positive denominator greater than one.
    Rational(Rational),

    /// An approximate real number, including the infinities and the undefined sentinel (NaN).
    Real(Float),

    /// A complex number with a nonzero imaginary part. Both parts are non-complex numbers.
    Complex(Box<Number>, Box<Number>),
}

impl Number {
    /// Creates an integer.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Integer(int(n))
    }

    /// Creates the reduced fraction `numer / denom`.
    ///
    /// Fails with [`DivisionByZero`] if the denominator is zero.
    pub fn rational(numer: impl Into<Integer>, denom: impl Into<Integer>) -> Result<Self, Error> {
        let (numer, denom) = (numer.into(), denom.into());
        if denom == 0 {
            return Err(DivisionByZero.into());
        }
        Ok(Self::Rational(Rational::from((numer, denom))).normalize())
    }

    /// Creates an approximate real number.
    pub fn real(f: f64) -> Self {
        Self::Real(float(f)).normalize()
    }

    /// Creates the complex number `re + im*i`.
    ///
    /// Complex parts of the arguments are ignored; only their real parts are used.
    pub fn complex(re: Number, im: Number) -> Self {
        Self::Complex(Box::new(re.real_part()), Box::new(im.real_part())).normalize()
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::complex(Self::int(0), Self::int(1))
    }

    /// The undefined sentinel.
    pub fn undefined() -> Self {
        Self::Real(special(Special::Nan))
    }

    /// Positive infinity.
    pub fn infinity() -> Self {
        Self::Real(special(Special::Infinity))
    }

    /// Negative infinity.
    pub fn neg_infinity() -> Self {
        Self::Real(special(Special::NegInfinity))
    }

    /// Converts an approximate complex value into a number.
    pub fn from_complex(c: Complex) -> Self {
        let (re, im) = c.into_real_imag();
        Self::Complex(Box::new(Self::Real(re)), Box::new(Self::Real(im))).normalize()
    }

    /// Moves the number down to the lowest level of the tower that represents it exactly.
    pub fn normalize(self) -> Self {
        match self {
            Self::Integer(_) => self,
            Self::Rational(r) => {
                if *r.denom() == 1 {
                    Self::Integer(r.into_numer_denom().0)
                } else {
                    Self::Rational(r)
                }
            },
            Self::Real(f) => {
                if f.is_nan() {
                    Self::undefined()
                } else if f.is_integer() {
                    match f.to_integer() {
                        Some(n) => Self::Integer(n),
                        None => Self::Real(f),
                    }
                } else {
                    Self::Real(f)
                }
            },
            Self::Complex(re, im) => {
                let (re, im) = (re.normalize().real_part(), im.normalize().real_part());
                if re.is_undefined() || im.is_undefined() {
                    Self::undefined()
                } else if im.is_zero() {
                    re
                } else {
                    Self::Complex(Box::new(re), Box::new(im))
                }
            },
        }
    }

    /// Returns the real part of the number.
    pub fn real_part(self) -> Self {
        match self {
            Self::Complex(re, _) => *re,
            other => other,
        }
    }

    /// Returns the real and imaginary parts of the number.
    pub fn parts(&self) -> (Number, Number) {
        match self {
            Self::Complex(re, im) => ((**re).clone(), (**im).clone()),
            other => (other.clone(), Self::int(0)),
        }
    }

    /// Returns true if the number is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n.is_zero(),
            Self::Rational(r) => *r == 0,
            Self::Real(f) => f.is_zero(),
            Self::Complex(re, im) => re.is_zero() && im.is_zero(),
        }
    }

    /// Returns true if the number is exactly one.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Integer(n) if *n == 1)
    }

    /// Returns true if the number is the undefined sentinel.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Real(f) if f.is_nan())
    }

    /// Returns true if the number is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Real(f) if f.is_infinite())
    }

    /// Returns true if the number is an integer.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if the number has no imaginary part.
    pub fn is_real(&self) -> bool {
        !matches!(self, Self::Complex(..))
    }

    /// Returns true if the number is represented exactly (an integer, a rational, or a complex
    /// number with exact parts).
    pub fn is_exact(&self) -> bool {
        match self {
            Self::Integer(_) | Self::Rational(_) => true,
            Self::Real(_) => false,
            Self::Complex(re, im) => re.is_exact() && im.is_exact(),
        }
    }

    /// Returns true if the number is real and strictly below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => *n < 0,
            Self::Rational(r) => *r < 0,
            Self::Real(f) => *f < 0,
            Self::Complex(..) => false,
        }
    }

    /// Returns the integer value, if the number is an integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the exact rational value of a real, exact number.
    pub fn to_rational(&self) -> Option<Rational> {
        match self {
            Self::Integer(n) => Some(Rational::from(n)),
            Self::Rational(r) => Some(r.clone()),
            _ => None,
        }
    }

    /// Returns the value of a non-complex number as a [`Float`]. The imaginary part of a complex
    /// number is dropped.
    pub fn to_float(&self) -> Float {
        match self {
            Self::Integer(n) => float(n),
            Self::Rational(r) => float(r),
            Self::Real(f) => f.clone(),
            Self::Complex(re, _) => re.to_float(),
        }
    }

    /// Returns the value of the number as a [`Complex`].
    pub fn to_complex(&self) -> Complex {
        let (re, im) = self.parts();
        complex((re.to_float(), im.to_float()))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Complex(a, b), Self::Complex(c, d)) => a == c && b == d,
            (Self::Complex(..), _) | (_, Self::Complex(..)) => false,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Rational(a), Self::Rational(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Self::Real(a), Self::Integer(b)) | (Self::Integer(b), Self::Real(a)) => a == b,
            (Self::Real(a), Self::Rational(b)) | (Self::Rational(b), Self::Real(a)) => a == b,
            // normalized integers and rationals never coincide
            (Self::Integer(_), Self::Rational(_)) | (Self::Rational(_), Self::Integer(_)) => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // equal values at different levels convert to the same `f64`, so hashing the approximation
        // stays consistent with `eq`
        let (re, im) = self.parts();
        for part in [re, im] {
            let value = part.to_float().to_f64();
            if value.is_nan() {
                state.write_u64(u64::MAX);
            } else {
                // `0.0` and `-0.0` must hash the same
                state.write_u64((value + 0.0).to_bits());
            }
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::int(n)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::real(f)
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        Self::Integer(n)
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::Rational(r).normalize()
    }
}

impl From<Float> for Number {
    fn from(f: Float) -> Self {
        Self::Real(f).normalize()
    }
}

impl From<Complex> for Number {
    fn from(c: Complex) -> Self {
        Self::from_complex(c)
    }
}
