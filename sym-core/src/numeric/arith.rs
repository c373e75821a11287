//! Arithmetic between numbers at any level of the tower.
//!
//! Two real operands are combined at the higher of their two levels: integers with integers,
//! exact values as rationals, and anything involving an approximate value as floats. Complex
//! operands are combined part by part using the real operations, so Gaussian rationals stay exact.

use crate::error::{DivisionByZero, InvalidOperation};
use crate::primitive::float;
use rug::Rational;
use std::{cmp::Ordering, ops::{Add, Mul, Neg, Sub}};
use sym_error::Error;
use super::Number;

/// The level at which two real operands are combined.
enum Pair<'a> {
    Integers(&'a rug::Integer, &'a rug::Integer),
    Exact(Rational, Rational),
    Approximate(rug::Float, rug::Float),
}

fn real_pair<'a>(a: &'a Number, b: &'a Number) -> Pair<'a> {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => Pair::Integers(x, y),
        _ => match (a.to_rational(), b.to_rational()) {
            (Some(x), Some(y)) => Pair::Exact(x, y),
            _ => Pair::Approximate(a.to_float(), b.to_float()),
        },
    }
}

fn real_add(a: &Number, b: &Number) -> Number {
    match real_pair(a, b) {
        Pair::Integers(x, y) => Number::Integer((x + y).into()),
        Pair::Exact(x, y) => Number::from(x + y),
        Pair::Approximate(x, y) => Number::from(x + y),
    }
}

fn real_sub(a: &Number, b: &Number) -> Number {
    match real_pair(a, b) {
        Pair::Integers(x, y) => Number::Integer((x - y).into()),
        Pair::Exact(x, y) => Number::from(x - y),
        Pair::Approximate(x, y) => Number::from(x - y),
    }
}

fn real_mul(a: &Number, b: &Number) -> Number {
    match real_pair(a, b) {
        Pair::Integers(x, y) => Number::Integer((x * y).into()),
        Pair::Exact(x, y) => Number::from(x * y),
        Pair::Approximate(x, y) => Number::from(x * y),
    }
}

/// Divides two real numbers. The divisor must not be zero.
fn real_div(a: &Number, b: &Number) -> Number {
    match real_pair(a, b) {
        Pair::Integers(x, y) => Number::from(Rational::from((x.clone(), y.clone()))),
        Pair::Exact(x, y) => Number::from(x / y),
        Pair::Approximate(x, y) => Number::from(x / y),
    }
}

fn real_neg(a: &Number) -> Number {
    match a {
        Number::Integer(n) => Number::Integer((-n).into()),
        Number::Rational(r) => Number::Rational((-r).into()),
        Number::Real(f) => Number::from(float(-f)),
        Number::Complex(re, _) => real_neg(re),
    }
}

impl Number {
    /// Adds two numbers.
    pub fn add_ref(&self, other: &Number) -> Number {
        if self.is_real() && other.is_real() {
            return real_add(self, other);
        }
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        Number::complex(real_add(&a, &c), real_add(&b, &d))
    }

    /// Subtracts `other` from `self`.
    pub fn sub_ref(&self, other: &Number) -> Number {
        if self.is_real() && other.is_real() {
            return real_sub(self, other);
        }
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        Number::complex(real_sub(&a, &c), real_sub(&b, &d))
    }

    /// Multiplies two numbers.
    pub fn mul_ref(&self, other: &Number) -> Number {
        if self.is_real() && other.is_real() {
            return real_mul(self, other);
        }

        // (a+bi)(c+di) = (ac-bd) + (ad+bc)i
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        Number::complex(
            real_sub(&real_mul(&a, &c), &real_mul(&b, &d)),
            real_add(&real_mul(&a, &d), &real_mul(&b, &c)),
        )
    }

    /// Negates the number.
    pub fn neg_ref(&self) -> Number {
        match self {
            Number::Complex(re, im) => Number::complex(real_neg(re), real_neg(im)),
            real => real_neg(real),
        }
    }

    /// Divides `self` by `other`.
    ///
    /// Dividing an undefined value gives the undefined sentinel. Otherwise, dividing by an exact
    /// zero fails with [`DivisionByZero`].
    pub fn try_div(&self, other: &Number) -> Result<Number, Error> {
        if self.is_undefined() || other.is_undefined() {
            return Ok(Number::undefined());
        }
        if other.is_zero() {
            return Err(DivisionByZero.into());
        }
        if self.is_real() && other.is_real() {
            return Ok(real_div(self, other));
        }

        // (a+bi)/(c+di) = ((ac+bd) + (bc-ad)i) / (c^2+d^2)
        let ((a, b), (c, d)) = (self.parts(), other.parts());
        let denom = real_add(&real_mul(&c, &c), &real_mul(&d, &d));
        let re = real_add(&real_mul(&a, &c), &real_mul(&b, &d));
        let im = real_sub(&real_mul(&b, &c), &real_mul(&a, &d));
        Ok(Number::complex(real_div(&re, &denom), real_div(&im, &denom)))
    }

    /// Compares two real numbers.
    ///
    /// Fails with [`InvalidOperation`] if either number is complex or undefined, since neither
    /// has a place in the ordering of the reals.
    pub fn try_cmp(&self, other: &Number) -> Result<Ordering, Error> {
        if !self.is_real() || !other.is_real() {
            return Err(InvalidOperation {
                operation: "order complex numbers",
                reason: "complex numbers with a nonzero imaginary part are not ordered",
            }.into());
        }
        if self.is_undefined() || other.is_undefined() {
            return Err(InvalidOperation {
                operation: "order an undefined value",
                reason: "undefined values have no place in the ordering of the reals",
            }.into());
        }

        let ordering = match real_pair(self, other) {
            Pair::Integers(x, y) => Some(x.cmp(y)),
            Pair::Exact(x, y) => Some(x.cmp(&y)),
            Pair::Approximate(_, _) => match (self, other) {
                // compare against exact values directly, so that no rounding takes place
                (Number::Real(x), Number::Integer(y)) => x.partial_cmp(y),
                (Number::Real(x), Number::Rational(y)) => x.partial_cmp(y),
                (Number::Integer(x), Number::Real(y)) => y.partial_cmp(x).map(Ordering::reverse),
                (Number::Rational(x), Number::Real(y)) => y.partial_cmp(x).map(Ordering::reverse),
                (x, y) => x.to_float().partial_cmp(&y.to_float()),
            },
        };

        // NaN was ruled out above, so every pair is comparable
        Ok(ordering.unwrap_or(Ordering::Equal))
    }

    /// Returns the absolute value of a real number, or the modulus of a complex number.
    ///
    /// The modulus is exact when the squared modulus is a perfect square, such as `|3+4i| = 5`.
    pub fn abs(&self) -> Number {
        match self {
            Number::Complex(re, im) => {
                let squared = real_add(&real_mul(re, re), &real_mul(im, im));
                let half = Number::Rational(Rational::from((1, 2)));
                match squared.try_pow(&half) {
                    Ok(Some(root)) => root,
                    _ => Number::from(squared.to_float().sqrt()),
                }
            },
            real if real.is_negative() => real_neg(real),
            real => real.clone(),
        }
    }

    /// Returns the larger of two real numbers, or `None` if they cannot be compared.
    pub fn max_ref<'a>(&'a self, other: &'a Number) -> Option<&'a Number> {
        match self.try_cmp(other).ok()? {
            Ordering::Less => Some(other),
            _ => Some(self),
        }
    }

    /// Returns the smaller of two real numbers, or `None` if they cannot be compared.
    pub fn min_ref<'a>(&'a self, other: &'a Number) -> Option<&'a Number> {
        match self.try_cmp(other).ok()? {
            Ordering::Greater => Some(other),
            _ => Some(self),
        }
    }
}

/// Implements a binary operator for every combination of owned and borrowed operands.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $impl:ident) => {
        impl $trait<&Number> for &Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                self.$impl(rhs)
            }
        }

        impl $trait<Number> for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                self.$impl(&rhs)
            }
        }

        impl $trait<&Number> for Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                self.$impl(rhs)
            }
        }
    };
}

binary_op!(Add, add, add_ref);
binary_op!(Sub, sub, sub_ref);
binary_op!(Mul, mul, mul_ref);

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.neg_ref()
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        self.neg_ref()
    }
}
