//! Exponentiation, including exact roots.

use crate::error::{DivisionByZero, IndeterminateForm};
use crate::primitive::float;
use rug::{ops::Pow, Integer, Rational};
use sym_error::Error;
use super::Number;

/// Exact powers whose result would need more bits than this are left unevaluated.
const MAX_EXACT_BITS: u64 = 1 << 20;

/// Returns the exact `k`-th root of a non-negative integer, if there is one.
fn exact_root(n: &Integer, k: u32) -> Option<Integer> {
    let root = Integer::from(n.root_ref(k));
    if Integer::from((&root).pow(k)) == *n {
        Some(root)
    } else {
        None
    }
}

/// Returns the exact `k`-th root of a non-negative rational, if there is one.
fn exact_rational_root(r: &Rational, k: u32) -> Option<Number> {
    let numer = exact_root(r.numer(), k)?;
    let denom = exact_root(r.denom(), k)?;
    Some(Number::from(Rational::from((numer, denom))))
}

/// Estimates the number of bits needed to store `base^exp` exactly.
fn exact_bits(base: &Number, exp: u32) -> u64 {
    let bits = match base {
        Number::Integer(n) => n.significant_bits() as u64,
        Number::Rational(r) => r.numer().significant_bits().max(r.denom().significant_bits()) as u64,
        Number::Complex(re, im) => exact_bits(re, 1).max(exact_bits(im, 1)) + 1,
        Number::Real(_) => 0,
    };
    bits.saturating_mul(exp as u64)
}

impl Number {
    /// Raises `self` to the power of `exp`.
    ///
    /// Returns `Ok(None)` if the result has no exact closed form and neither operand is already
    /// approximate, such as `2^(1/2)`; the caller should leave the power unevaluated. The
    /// principal branch is used for roots of negative and complex bases, so `(-4)^(1/2) = 2i`.
    ///
    /// Fails with [`IndeterminateForm`] for `0^0` and [`DivisionByZero`] for zero raised to a
    /// negative power.
    pub fn try_pow(&self, exp: &Number) -> Result<Option<Number>, Error> {
        if self.is_undefined() || exp.is_undefined() {
            return Ok(Some(Number::undefined()));
        }

        if exp.is_zero() {
            if self.is_zero() {
                return Err(IndeterminateForm { form: "0^0" }.into());
            }
            return Ok(Some(Number::int(1)));
        }

        if self.is_zero() {
            let (re, _) = exp.parts();
            return if re.is_negative() {
                Err(DivisionByZero.into())
            } else if re.is_zero() {
                // 0^(bi) has no value
                Ok(Some(Number::undefined()))
            } else {
                Ok(Some(Number::int(0)))
            };
        }

        if self.is_one() {
            return Ok(Some(Number::int(1)));
        }

        match exp {
            Number::Integer(n) => Ok(self.pow_integer(n)),
            Number::Rational(r) if self.is_exact() => Ok(self.pow_rational(r)),
            _ if self.is_exact() && exp.is_exact() => Ok(None),
            _ => Ok(Some(self.pow_approx(exp))),
        }
    }

    /// Raises `self` to an integer power. The base must not be zero.
    fn pow_integer(&self, n: &Integer) -> Option<Number> {
        let magnitude = n.clone().abs().to_u32();
        let exact = self.is_exact();
        let too_large = match magnitude {
            Some(e) => exact && exact_bits(self, e) > MAX_EXACT_BITS,
            None => true,
        };
        if too_large {
            return if exact {
                None
            } else {
                Some(self.pow_approx(&Number::Integer(n.clone())))
            };
        }

        let e = magnitude?;
        let result = match self {
            Number::Integer(b) => Number::Integer(Integer::from(b.pow(e))),
            Number::Rational(r) => Number::from(Rational::from(r.pow(e))),
            Number::Real(f) => return Some(Number::from(float(f.pow(n)))),
            Number::Complex(..) => {
                // square-and-multiply keeps Gaussian rationals exact
                let mut result = Number::int(1);
                let mut base = self.clone();
                let mut e = e;
                while e > 0 {
                    if e & 1 == 1 {
                        result = &result * &base;
                    }
                    base = &base * &base;
                    e >>= 1;
                }
                result
            },
        };

        if *n < 0 {
            Number::int(1).try_div(&result).ok()
        } else {
            Some(result)
        }
    }

    /// Raises an exact base to a non-integer rational power, if the result is exact.
    fn pow_rational(&self, r: &Rational) -> Option<Number> {
        let root_index = r.denom().to_u32()?;
        let numer = Number::Integer(r.numer().clone());

        let root = match self {
            Number::Complex(..) => return None,
            base if base.is_negative() => {
                // only the square root of a negative number has a simple principal value
                if root_index != 2 {
                    return None;
                }
                let magnitude = base.abs().to_rational()?;
                Number::complex(Number::int(0), exact_rational_root(&magnitude, 2)?)
            },
            base => exact_rational_root(&base.to_rational()?, root_index)?,
        };

        match numer {
            Number::Integer(ref p) if *p == 1 => Some(root),
            Number::Integer(ref p) => root.pow_integer(p),
            _ => None,
        }
    }

    /// Raises `self` to the power of `exp` using approximate arithmetic.
    pub fn pow_approx(&self, exp: &Number) -> Number {
        if self.is_real() && exp.is_real() && (!self.is_negative() || exp.is_integer()) {
            Number::from(self.to_float().pow(exp.to_float()))
        } else {
            Number::from(self.to_complex().pow(exp.to_complex()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn q(n: i64, d: i64) -> Number {
        Number::rational(n, d).unwrap()
    }

    fn pow(base: Number, exp: Number) -> Option<Number> {
        base.try_pow(&exp).unwrap()
    }

    #[test]
    fn integer_powers() {
        assert_eq!(pow(Number::int(2), Number::int(10)), Some(Number::int(1024)));
        assert_eq!(pow(Number::int(2), Number::int(-2)), Some(q(1, 4)));
        assert_eq!(pow(q(2, 3), Number::int(2)), Some(q(4, 9)));
        assert_eq!(pow(Number::int(-3), Number::int(3)), Some(Number::int(-27)));
    }

    #[test]
    fn exact_roots() {
        assert_eq!(pow(Number::int(9), q(1, 2)), Some(Number::int(3)));
        assert_eq!(pow(Number::int(8), q(2, 3)), Some(Number::int(4)));
        assert_eq!(pow(q(1, 4), q(1, 2)), Some(q(1, 2)));
        assert_eq!(pow(Number::int(4), q(-1, 2)), Some(q(1, 2)));
    }

    #[test]
    fn no_closed_form() {
        assert_eq!(pow(Number::int(2), q(1, 2)), None);
        assert_eq!(pow(Number::int(-8), q(1, 3)), None);
        assert_eq!(pow(Number::int(2), Number::i()), None);
    }

    #[test]
    fn principal_square_root_of_negative() {
        let two_i = Number::complex(Number::int(0), Number::int(2));
        assert_eq!(pow(Number::int(-4), q(1, 2)), Some(two_i));
    }

    #[test]
    fn powers_of_i() {
        assert_eq!(pow(Number::i(), Number::int(2)), Some(Number::int(-1)));
        assert_eq!(pow(Number::i(), Number::int(4)), Some(Number::int(1)));
        assert_eq!(pow(Number::i(), Number::int(-1)), Some(-Number::i()));
    }

    #[test]
    fn approximate_operands() {
        assert_eq!(pow(Number::real(6.25), Number::real(0.5)), Some(Number::real(2.5)));
        assert_eq!(pow(Number::real(0.5), Number::int(2)), Some(Number::real(0.25)));
    }

    #[test]
    fn zero_edge_cases() {
        let err = Number::int(0).try_pow(&Number::int(0)).unwrap_err();
        assert!(err.is::<IndeterminateForm>());

        let err = Number::int(0).try_pow(&Number::int(-1)).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        assert_eq!(pow(Number::int(0), q(1, 2)), Some(Number::int(0)));
    }

    #[test]
    fn huge_exact_power_is_left_alone() {
        assert_eq!(pow(Number::int(3), Number::int(1 << 30)), None);
    }
}
