use std::fmt::{Display, Formatter, Result};
use super::Number;

/// Formats a non-complex number.
fn fmt_real(n: &Number, f: &mut Formatter<'_>) -> Result {
    match n {
        Number::Integer(n) => write!(f, "{}", n),
        Number::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        Number::Real(x) if x.is_nan() => write!(f, "undefined"),
        Number::Real(x) if x.is_infinite() => {
            if x.is_sign_negative() {
                write!(f, "-∞")
            } else {
                write!(f, "∞")
            }
        },
        Number::Real(x) => write!(f, "{}", x.to_f64()),
        Number::Complex(re, _) => fmt_real(re, f),
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Number::Complex(re, im) => {
                if !re.is_zero() {
                    fmt_real(re, f)?;
                    write!(f, "{}", if im.is_negative() { " - " } else { " + " })?;
                } else if im.is_negative() {
                    write!(f, "-")?;
                }

                let magnitude = im.abs();
                if !magnitude.is_one() {
                    fmt_real(&magnitude, f)?;
                }
                write!(f, "i")
            },
            real => fmt_real(real, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reals() {
        assert_eq!(Number::int(-12).to_string(), "-12");
        assert_eq!(Number::rational(3, -6).unwrap().to_string(), "-1/2");
        assert_eq!(Number::real(0.25).to_string(), "0.25");
        assert_eq!(Number::neg_infinity().to_string(), "-∞");
        assert_eq!(Number::undefined().to_string(), "undefined");
    }

    #[test]
    fn complex() {
        assert_eq!(Number::i().to_string(), "i");
        assert_eq!(Number::complex(Number::int(0), Number::int(-2)).to_string(), "-2i");
        assert_eq!(Number::complex(Number::int(3), Number::int(-1)).to_string(), "3 - i");
        assert_eq!(Number::complex(Number::int(1), Number::int(4)).to_string(), "1 + 4i");
    }
}
