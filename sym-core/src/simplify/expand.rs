//! Expansion of products and powers of sums.

use crate::entity::{Entity, Op};

/// The largest exponent to which a sum is expanded.
const MAX_EXPONENT: u32 = 8;

/// Expands the given expression in a single bottom-up pass.
///
/// Multiplication is distributed over addition and subtraction, negation is distributed over sums
/// and differences, and sums raised to a small positive integer power (up to `8`) are multiplied
/// out. The result is not simplified, so `expand((x + 1)^2)` is
/// `x*x + x*1 + (1*x + 1*1)`; pass it to [`simplify`](super::simplify()) to collect terms.
///
/// Expanding an already expanded expression may not return the same expression.
pub fn expand(expr: &Entity) -> Entity {
    let expr = expr.map_children(expand);
    match expr.as_op() {
        Some((Op::Mul, [a, b])) => distribute(a, b),
        Some((Op::Neg, [a])) => negate(a),
        Some((Op::Minus, [a, b])) => subtract(a, b),
        Some((Op::Pow, [base, exponent])) if is_sum(base) => {
            match small_exponent(exponent) {
                Some(n) => (1..n).fold(base.clone(), |acc, _| distribute(&acc, base)),
                None => expr.clone(),
            }
        },
        _ => expr.clone(),
    }
}

/// Returns true if the expression is a sum or difference.
fn is_sum(expr: &Entity) -> bool {
    matches!(expr.op_kind(), Some(Op::Sum | Op::Minus))
}

/// Returns the exponent if it is an integer from 2 to [`MAX_EXPONENT`].
fn small_exponent(exponent: &Entity) -> Option<u32> {
    exponent.as_number()?
        .as_integer()?
        .to_u32()
        .filter(|n| (2..=MAX_EXPONENT).contains(n))
}

/// `(p+q)*b = p*b + q*b`
/// `a*(p+q) = a*p + a*q`
///
/// and likewise for differences.
fn distribute(a: &Entity, b: &Entity) -> Entity {
    match (a.as_op(), b.as_op()) {
        (Some((Op::Sum, [p, q])), _) => distribute(p, b) + distribute(q, b),
        (Some((Op::Minus, [p, q])), _) => subtract(&distribute(p, b), &distribute(q, b)),
        (_, Some((Op::Sum, [p, q]))) => distribute(a, p) + distribute(a, q),
        (_, Some((Op::Minus, [p, q]))) => subtract(&distribute(a, p), &distribute(a, q)),
        _ => a * b,
    }
}

/// `-(p+q) = -p + -q`
/// `-(p-q) = -p + q`
fn negate(a: &Entity) -> Entity {
    match a.as_op() {
        Some((Op::Sum, [p, q])) => negate(p) + negate(q),
        Some((Op::Minus, [p, q])) => negate(p) + q,
        _ => -a,
    }
}

/// `a-(p+q) = a-p-q`
/// `a-(p-q) = a-p+q`
fn subtract(a: &Entity, b: &Entity) -> Entity {
    match b.as_op() {
        Some((Op::Sum, [p, q])) => subtract(&subtract(a, p), q),
        Some((Op::Minus, [p, q])) => subtract(a, p) + q,
        _ => a - b,
    }
}
