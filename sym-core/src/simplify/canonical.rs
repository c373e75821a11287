//! Sorting commutative operand chains into canonical order.

use crate::entity::{order::canonical_cmp, Entity, Op};
use crate::numeric::Number;

/// Collects the operands of a chain of the associative operator `op`, from left to right.
fn flatten<'a>(op: Op, expr: &'a Entity, out: &mut Vec<&'a Entity>) {
    match expr.as_op() {
        Some((inner, operands)) if inner == op => {
            for operand in operands {
                flatten(op, operand, out);
            }
        },
        _ => out.push(expr),
    }
}

/// Combines the numeric operands of a sum or product chain into a single number.
fn combine_numbers(op: Op, operands: Vec<&Entity>) -> Vec<Entity> {
    let mut constant: Option<Number> = None;
    let mut rest = Vec::with_capacity(operands.len());
    for operand in operands {
        match operand.as_number() {
            Some(n) => {
                constant = Some(match (constant, op) {
                    (None, _) => n.clone(),
                    (Some(c), Op::Sum) => c.add_ref(n),
                    (Some(c), _) => c.mul_ref(n),
                });
            },
            None => rest.push(operand.clone()),
        }
    }
    rest.extend(constant.map(Entity::number));
    rest
}

/// Returns the canonical form of a node whose operands are already in canonical form.
///
/// Chains of an associative operator (`a + (b + c)`, `(a * b) * c`, ...) are flattened, sorted in
/// [canonical order](crate::entity::order), and rebuilt left-associatively, so that every
/// arrangement of the same operands produces the same tree. Numeric operands of sum and product
/// chains are combined into one number, which sorts first. The operands of `=` are sorted.
///
/// Returns the node itself if it is already canonical.
pub fn canonicalize(expr: &Entity) -> Entity {
    let Some((op, operands)) = expr.as_op() else {
        return expr.clone();
    };

    let rebuilt = if op.is_associative() {
        let mut chain = Vec::new();
        flatten(op, expr, &mut chain);
        let mut chain = if matches!(op, Op::Sum | Op::Mul) {
            combine_numbers(op, chain)
        } else {
            chain.into_iter().cloned().collect()
        };
        chain.sort_by(canonical_cmp);

        let mut chain = chain.into_iter();
        let Some(first) = chain.next() else {
            return expr.clone();
        };
        chain.fold(first, |acc, operand| Entity::binary(op, acc, operand))
    } else if op.is_commutative() {
        let mut sorted = operands.to_vec();
        sorted.sort_by(canonical_cmp);
        Entity::binary(op, sorted[0].clone(), sorted[1].clone())
    } else {
        return expr.clone();
    };

    if rebuilt == *expr {
        expr.clone()
    } else {
        rebuilt
    }
}
