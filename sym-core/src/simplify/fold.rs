//! Folding operator nodes whose operands are literals into a single literal.
//!
//! Folding never looks deeper than the direct operands of a node; the simplifier folds trees
//! bottom-up, so by the time a node is folded, its operands have already been folded as far as
//! they can be.

use crate::entity::{Entity, Node, Op, OpKind};
use crate::error::{DivisionByZero, IndeterminateForm, NotSupported, TypeMismatch};
use crate::numeric::Number;
use crate::set;
use rug::Integer;
use std::cmp::Ordering;
use sym_error::Error;

/// The largest integer whose factorial is computed exactly.
const FACTORIAL_LIMIT: u32 = 10_000;

/// How folding treats values without an exact closed form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only fold values that can be represented exactly. `2^(1/2)` and `sin(1)` are left
    /// unevaluated, but operations on operands that are already approximate are still folded.
    Exact,

    /// Approximate everything with [`PRECISION`](crate::primitive::PRECISION)-bit floats,
    /// including the named constants.
    Approximate,
}

/// A short description of the kind of a literal operand, for error messages.
fn describe(entity: &Entity) -> Option<&'static str> {
    match entity.node() {
        Node::Number(_) => Some("number"),
        Node::Boolean(_) => Some("boolean"),
        Node::FiniteSet(_) | Node::Pieces(_) => Some("set"),
        Node::Variable(_) | Node::Op(..) => None,
    }
}

/// Fails with [`TypeMismatch`] if any operand is a literal of a kind other than `expected`.
fn check_operands(op: Op, operands: &[Entity], expected: &'static str) -> Result<(), Error> {
    for operand in operands {
        if let Some(found) = describe(operand) {
            if found != expected {
                return Err(TypeMismatch { op: op.name(), expected, found }.into());
            }
        }
    }
    Ok(())
}

/// Replaces undefined arithmetic with the undefined sentinel.
fn or_undefined<T: From<Number>>(result: Result<T, Error>) -> Result<T, Error> {
    match result {
        Err(err) if err.is::<DivisionByZero>() || err.is::<IndeterminateForm>() => {
            Ok(T::from(Number::undefined()))
        },
        other => other,
    }
}

/// Returns the operands as numbers, if they are all numeric literals.
fn numbers(operands: &[Entity]) -> Option<Vec<&Number>> {
    operands.iter().map(Entity::as_number).collect()
}

/// Folds a node whose operands have already been folded.
///
/// Returns the node itself if it cannot be folded. Undefined arithmetic, such as `0/0`, folds to
/// the undefined sentinel, and so does any operator node with an undefined operand.
///
/// Fails with [`TypeMismatch`] if an operand is a literal of the wrong kind, such as `true + 1`,
/// and with an [`InvalidOperation`](crate::error::InvalidOperation) or [`NotSupported`] error for
/// comparisons that have no answer.
pub fn fold(expr: &Entity, mode: Mode) -> Result<Entity, Error> {
    match expr.node() {
        Node::Variable(variable) if mode == Mode::Approximate => {
            Ok(variable.value().map(Entity::number).unwrap_or_else(|| expr.clone()))
        },
        Node::Op(op, operands) => {
            if operands.iter().any(Entity::is_undefined) {
                return Ok(Entity::undefined());
            }

            let folded = match op.kind() {
                OpKind::Arithmetic => fold_arithmetic(*op, operands, mode)?,
                OpKind::Function => fold_function(*op, operands, mode)?,
                OpKind::Boolean => fold_boolean(*op, operands)?,
                OpKind::Comparison => fold_comparison(*op, operands)?,
                OpKind::Set => fold_set(*op, operands)?,
            };
            Ok(folded.unwrap_or_else(|| expr.clone()))
        },
        _ => Ok(expr.clone()),
    }
}

fn fold_arithmetic(op: Op, operands: &[Entity], mode: Mode) -> Result<Option<Entity>, Error> {
    check_operands(op, operands, "number")?;
    let Some(numbers) = numbers(operands) else {
        return Ok(None);
    };

    let result = match (op, numbers.as_slice()) {
        (Op::Neg, [a]) => a.neg_ref(),
        (Op::Sum, [a, b]) => a.add_ref(b),
        (Op::Minus, [a, b]) => a.sub_ref(b),
        (Op::Mul, [a, b]) => a.mul_ref(b),
        (Op::Div, [a, b]) => or_undefined(a.try_div(b))?,
        (Op::Pow, [a, b]) => match or_undefined(a.try_pow(b))? {
            Some(n) => n,
            None if mode == Mode::Approximate => a.pow_approx(b),
            None => return Ok(None),
        },
        _ => return Ok(None),
    };
    Ok(Some(Entity::number(result)))
}

/// Well-known exact values of the functions.
fn exact_function(op: Op, args: &[&Number]) -> Option<Number> {
    match (op, args) {
        (Op::Sin | Op::Tan, [x]) if x.is_zero() => Some(Number::int(0)),
        (Op::Cos, [x]) if x.is_zero() => Some(Number::int(1)),
        (Op::Cot, [x]) if x.is_zero() => Some(Number::undefined()),
        (Op::Arcsin | Op::Arctan, [x]) if x.is_zero() => Some(Number::int(0)),
        (Op::Arccos, [x]) if x.is_one() => Some(Number::int(0)),
        (Op::Signum, [x]) if x.is_real() => Some(Number::int(real_sign(x))),
        (Op::Signum, [x]) if x.is_exact() => match x.abs() {
            modulus if modulus.is_exact() => x.try_div(&modulus).ok(),
            _ => None,
        },
        (Op::Ln, [x]) if x.is_one() => Some(Number::int(0)),
        (Op::Ln, [x]) if x.is_zero() => Some(Number::undefined()),
        (Op::Log, [base, x]) if x.is_zero() || base.is_zero() || base.is_one() => {
            Some(Number::undefined())
        },
        (Op::Log, [_, x]) if x.is_one() => Some(Number::int(0)),
        (Op::Abs, [x]) => Some(x.abs()),
        _ => None,
    }
}

/// `-1`, `0` or `1`, the sign of a real number.
fn real_sign(x: &Number) -> i32 {
    if x.is_zero() {
        0
    } else if x.is_negative() {
        -1
    } else {
        1
    }
}

/// Returns true if the number is real and lies in `[-1, 1]`, where `arcsin` and `arccos` are
/// real.
fn in_unit_range(x: &Number) -> bool {
    x.is_real() && x.to_float().abs() <= 1
}

/// The cotangent, undefined at the poles.
fn cot(x: &Number) -> Number {
    if x.is_real() {
        let tan = x.to_float().tan();
        if tan.is_zero() {
            return Number::undefined();
        }
        return Number::from(tan.recip());
    }

    let z = x.to_complex();
    let sin = z.clone().sin();
    if sin.real().is_zero() && sin.imag().is_zero() {
        return Number::undefined();
    }
    Number::from(z.cos() / sin)
}

/// The natural logarithm on the principal branch.
fn ln(x: &Number) -> Number {
    if x.is_zero() {
        Number::undefined()
    } else if x.is_real() && !x.is_negative() {
        Number::from(x.to_float().ln())
    } else {
        Number::from(x.to_complex().ln())
    }
}

/// Approximates the value of a function.
fn approx_function(op: Op, args: &[&Number]) -> Result<Option<Number>, Error> {
    let value = match (op, args) {
        (Op::Sin, [x]) if x.is_real() => Number::from(x.to_float().sin()),
        (Op::Sin, [x]) => Number::from(x.to_complex().sin()),
        (Op::Cos, [x]) if x.is_real() => Number::from(x.to_float().cos()),
        (Op::Cos, [x]) => Number::from(x.to_complex().cos()),
        (Op::Tan, [x]) if x.is_real() => Number::from(x.to_float().tan()),
        (Op::Tan, [x]) => Number::from(x.to_complex().tan()),
        (Op::Cot, [x]) => cot(x),
        (Op::Arcsin, [x]) if in_unit_range(x) => Number::from(x.to_float().asin()),
        (Op::Arcsin, [x]) => Number::from(x.to_complex().asin()),
        (Op::Arccos, [x]) if in_unit_range(x) => Number::from(x.to_float().acos()),
        (Op::Arccos, [x]) => Number::from(x.to_complex().acos()),
        (Op::Arctan, [x]) if x.is_real() => Number::from(x.to_float().atan()),
        (Op::Arctan, [x]) => Number::from(x.to_complex().atan()),
        (Op::Arccot, [x]) if x.is_real() => Number::from(x.to_float().recip().atan()),
        (Op::Arccot, [x]) => Number::from(x.to_complex().recip().atan()),
        (Op::Signum, [x]) => or_undefined(x.try_div(&x.abs()))?,
        (Op::Ln, [x]) => ln(x),
        (Op::Log, [base, x]) => or_undefined(ln(x).try_div(&ln(base)))?,
        (Op::Abs, [x]) => x.abs(),
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn factorial(n: &Number, mode: Mode) -> Result<Option<Number>, Error> {
    match n {
        Number::Complex(..) => Err(NotSupported { feature: "the factorial of a complex number" }.into()),
        Number::Integer(k) if *k < 0 => Ok(Some(Number::undefined())),
        Number::Integer(k) => match k.to_u32().filter(|k| *k <= FACTORIAL_LIMIT) {
            Some(k) => Ok(Some(Number::Integer(Integer::from(Integer::factorial(k))))),
            None if mode == Mode::Approximate => Ok(Some(gamma_succ(n))),
            None => Ok(None),
        },
        Number::Rational(_) if mode == Mode::Exact => Ok(None),
        _ => Ok(Some(gamma_succ(n))),
    }
}

/// `gamma(x + 1)`, the factorial extended to real numbers.
fn gamma_succ(x: &Number) -> Number {
    Number::from((x.to_float() + 1u32).gamma())
}

fn fold_function(op: Op, operands: &[Entity], mode: Mode) -> Result<Option<Entity>, Error> {
    check_operands(op, operands, "number")?;
    let Some(args) = numbers(operands) else {
        return Ok(None);
    };

    if op == Op::Factorial {
        return Ok(factorial(args[0], mode)?.map(Entity::number));
    }

    let exact = args.iter().all(|n| n.is_exact());
    if let Some(value) = exact_function(op, &args) {
        return Ok(Some(Entity::number(value)));
    }
    if exact && mode == Mode::Exact {
        return Ok(None);
    }
    Ok(approx_function(op, &args)?.map(Entity::number))
}

fn fold_boolean(op: Op, operands: &[Entity]) -> Result<Option<Entity>, Error> {
    check_operands(op, operands, "boolean")?;
    let Some(values) = operands.iter().map(Entity::as_boolean).collect::<Option<Vec<_>>>() else {
        return Ok(None);
    };

    let result = match (op, values.as_slice()) {
        (Op::Not, [a]) => !a,
        (Op::And, [a, b]) => *a && *b,
        (Op::Or, [a, b]) => *a || *b,
        (Op::Xor, [a, b]) => a != b,
        (Op::Implies, [a, b]) => !a || *b,
        _ => return Ok(None),
    };
    Ok(Some(Entity::boolean(result)))
}

/// Returns true if the entity is a literal whose value does not depend on any variable.
fn is_closed_literal(entity: &Entity) -> bool {
    describe(entity).is_some() && entity.free_symbols().is_empty()
}

fn fold_comparison(op: Op, operands: &[Entity]) -> Result<Option<Entity>, Error> {
    let [lhs, rhs] = operands else {
        return Ok(None);
    };

    if op == Op::Equals {
        if is_closed_literal(lhs) && is_closed_literal(rhs) {
            return Ok(Some(Entity::boolean(lhs == rhs)));
        }
        return Ok(None);
    }

    for operand in operands {
        match describe(operand) {
            Some("boolean") => {
                return Err(TypeMismatch { op: op.name(), expected: "real", found: "boolean" }.into());
            },
            Some("set") => {
                return Err(NotSupported { feature: "ordering comparison between sets" }.into());
            },
            _ => {},
        }
    }

    let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) else {
        return Ok(None);
    };
    let ordering = a.try_cmp(b)?;
    let result = match op {
        Op::Less => ordering == Ordering::Less,
        Op::LessEq => ordering != Ordering::Greater,
        Op::Greater => ordering == Ordering::Greater,
        Op::GreaterEq => ordering != Ordering::Less,
        _ => return Ok(None),
    };
    Ok(Some(Entity::boolean(result)))
}

fn fold_set(op: Op, operands: &[Entity]) -> Result<Option<Entity>, Error> {
    let [lhs, rhs] = operands else {
        return Ok(None);
    };

    if op == Op::In {
        check_operands(op, std::slice::from_ref(rhs), "set")?;
        return Ok(set::contains(lhs, rhs).map(Entity::boolean));
    }

    check_operands(op, operands, "set")?;
    if !lhs.is_set() || !rhs.is_set() {
        return Ok(None);
    }
    let result = match op {
        Op::Union => set::union(lhs, rhs),
        Op::Intersection => set::intersection(lhs, rhs),
        Op::SetMinus => set::set_minus(lhs, rhs),
        _ => return Ok(None),
    };
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidOperation;
    use crate::set::{Edge, Piece};
    use pretty_assertions::assert_eq;

    fn exact(expr: &Entity) -> Entity {
        fold(expr, Mode::Exact).unwrap()
    }

    fn n(value: i64) -> Entity {
        Entity::from(value)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(exact(&(n(2) * n(3))), n(6));
        assert_eq!(exact(&(n(6) / n(3))), n(2));
        assert_eq!(exact(&(n(1) / n(3))), Entity::number(Number::rational(1, 3).unwrap()));
        assert_eq!(exact(&-n(4)), n(-4));
        assert_eq!(exact(&n(2).pow(10)), n(1024));
    }

    #[test]
    fn undefined_arithmetic() {
        assert!(exact(&(n(0) / n(0))).is_undefined());
        assert!(exact(&(n(1) / n(0))).is_undefined());
        assert!(exact(&n(0).pow(0)).is_undefined());
        assert!(exact(&(Entity::undefined() + Entity::var("x"))).is_undefined());
    }

    #[test]
    fn no_closed_form_stays_unevaluated() {
        let root = n(2).pow(Entity::number(Number::rational(1, 2).unwrap()));
        assert_eq!(exact(&root), root);

        let approx = fold(&root, Mode::Approximate).unwrap();
        let value = approx.as_number().unwrap().to_float();
        assert!((value.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn symbolic_operands_are_left_alone() {
        let expr = Entity::var("x") + n(1);
        assert!(exact(&expr).ptr_eq(&expr));
    }

    #[test]
    fn functions() {
        assert_eq!(exact(&Entity::unary(Op::Sin, n(0))), n(0));
        assert_eq!(exact(&Entity::unary(Op::Cos, n(0))), n(1));
        assert_eq!(exact(&Entity::unary(Op::Ln, n(1))), n(0));
        assert!(exact(&Entity::unary(Op::Ln, n(0))).is_undefined());
        assert!(exact(&Entity::binary(Op::Log, n(10), n(0))).is_undefined());
        assert_eq!(exact(&Entity::unary(Op::Abs, n(-3))), n(3));
        assert_eq!(exact(&Entity::unary(Op::Arcsin, n(0))), n(0));
        assert_eq!(exact(&Entity::unary(Op::Arccos, n(1))), n(0));
        assert!(exact(&Entity::unary(Op::Cot, n(0))).is_undefined());

        let sin_one = Entity::unary(Op::Sin, n(1));
        assert_eq!(exact(&sin_one), sin_one);
        let value = fold(&sin_one, Mode::Approximate).unwrap();
        assert!((value.as_number().unwrap().to_float().to_f64() - 1f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn inverse_functions() {
        let approx = |op: Op, x: Entity| {
            fold(&Entity::unary(op, x), Mode::Approximate)
                .unwrap()
                .as_number()
                .unwrap()
                .clone()
        };
        let close = |a: &Number, b: f64| (a.to_float().to_f64() - b).abs() < 1e-12;

        assert!(close(&approx(Op::Arcsin, n(1)), std::f64::consts::FRAC_PI_2));
        assert!(close(&approx(Op::Arccos, n(-1)), std::f64::consts::PI));
        assert!(close(&approx(Op::Arctan, n(1)), std::f64::consts::FRAC_PI_4));
        assert!(close(&approx(Op::Arccot, n(0)), std::f64::consts::FRAC_PI_2));
        assert!(close(&approx(Op::Cot, n(1)), 1.0 / 1f64.tan()));

        // outside [-1, 1] the principal branch is complex
        assert!(!approx(Op::Arcsin, n(2)).is_real());
    }

    #[test]
    fn signs() {
        assert_eq!(exact(&Entity::unary(Op::Signum, n(-3))), n(-1));
        assert_eq!(exact(&Entity::unary(Op::Signum, n(0))), n(0));
        assert_eq!(exact(&Entity::unary(Op::Signum, Entity::from(0.25))), n(1));

        let three_four_i = Entity::number(Number::complex(Number::int(3), Number::int(4)));
        let unit = Number::complex(
            Number::rational(3, 5).unwrap(),
            Number::rational(4, 5).unwrap(),
        );
        assert_eq!(exact(&Entity::unary(Op::Signum, three_four_i)), Entity::number(unit));

        let one_one_i = Entity::unary(Op::Signum, Entity::number(Number::complex(Number::int(1), Number::int(1))));
        assert_eq!(exact(&one_one_i), one_one_i);
    }

    #[test]
    fn factorials() {
        assert_eq!(exact(&Entity::unary(Op::Factorial, n(5))), n(120));
        assert_eq!(exact(&Entity::unary(Op::Factorial, n(0))), n(1));
        assert!(exact(&Entity::unary(Op::Factorial, n(-1))).is_undefined());

        let half = Entity::unary(Op::Factorial, Entity::number(Number::rational(1, 2).unwrap()));
        assert_eq!(exact(&half), half);

        let complex = Entity::unary(Op::Factorial, Entity::number(Number::i()));
        let err = fold(&complex, Mode::Exact).unwrap_err();
        assert_eq!(err.category(), sym_error::Category::Unsupported);
    }

    #[test]
    fn constants_are_only_approximated_on_request() {
        let pi = Entity::pi();
        assert_eq!(exact(&pi), pi);
        let value = fold(&pi, Mode::Approximate).unwrap();
        assert!((value.as_number().unwrap().to_float().to_f64() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn booleans() {
        let (t, f) = (Entity::boolean(true), Entity::boolean(false));
        assert_eq!(exact(&Entity::binary(Op::And, t.clone(), f.clone())), f);
        assert_eq!(exact(&Entity::binary(Op::Or, t.clone(), f.clone())), t);
        assert_eq!(exact(&Entity::binary(Op::Xor, t.clone(), t.clone())), f);
        assert_eq!(exact(&Entity::binary(Op::Implies, f.clone(), f.clone())), t);
        assert_eq!(exact(&Entity::unary(Op::Not, t)), f);
    }

    #[test]
    fn type_mismatches() {
        let err = fold(&Entity::binary(Op::And, Entity::boolean(true), n(1)), Mode::Exact).unwrap_err();
        assert!(err.is::<TypeMismatch>());

        let err = fold(&(Entity::boolean(true) + n(1)), Mode::Exact).unwrap_err();
        assert!(err.is::<TypeMismatch>());
    }

    #[test]
    fn comparisons() {
        assert_eq!(exact(&Entity::binary(Op::Less, n(1), n(2))), Entity::boolean(true));
        assert_eq!(exact(&Entity::binary(Op::GreaterEq, n(1), n(2))), Entity::boolean(false));
        assert_eq!(exact(&Entity::binary(Op::Equals, n(3), n(3))), Entity::boolean(true));

        let x = Entity::var("x");
        let symbolic = Entity::binary(Op::Equals, x.clone(), n(3));
        assert_eq!(exact(&symbolic), symbolic);

        let err = fold(&Entity::binary(Op::Less, Entity::number(Number::i()), n(1)), Mode::Exact)
            .unwrap_err();
        assert!(err.is::<InvalidOperation>());
    }

    #[test]
    fn sets() {
        let interval = |a: i64, b: i64| Entity::pieces(vec![Piece::interval(Edge::closed(a), Edge::closed(b))]);

        let union = Entity::binary(Op::Union, interval(0, 2), interval(1, 3));
        assert_eq!(exact(&union), interval(0, 3));

        let membership = Entity::binary(Op::In, n(1), interval(0, 2));
        assert_eq!(exact(&membership), Entity::boolean(true));

        let err = fold(&Entity::binary(Op::Union, n(1), interval(0, 2)), Mode::Exact).unwrap_err();
        assert!(err.is::<TypeMismatch>());
    }
}
