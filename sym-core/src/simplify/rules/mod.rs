//! Implementation of many simplification rules.
//!
//! Each submodule provides the rules for one family of operators as a list of [`Rule`]s, in
//! priority order. [`all`] collects them into the default [`RuleTable`] used by
//! [`simplify`](crate::simplify()).
//!
//! [`Rule`]: crate::pattern::Rule

pub mod add;
pub mod boolean;
pub mod function;
pub mod multiply;
pub mod power;
pub mod set;

use crate::entity::{Entity, Op};
use crate::pattern::RuleTable;
use once_cell::sync::Lazy;

static ALL: Lazy<RuleTable> = Lazy::new(|| {
    let mut table = RuleTable::new();
    table.extend(add::all());
    table.extend(multiply::all());
    table.extend(power::all());
    table.extend(function::all());
    table.extend(boolean::all());
    table.extend(set::all());
    table
});

/// Returns the default rule table.
pub fn all() -> &'static RuleTable {
    &ALL
}

/// Collects the operands of a chain of the associative operator `op`, from left to right.
pub(crate) fn chain(op: Op, expr: &Entity) -> Vec<Entity> {
    let mut out = Vec::new();
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        match expr.as_op() {
            Some((inner, operands)) if inner == op => stack.extend(operands.iter().rev()),
            _ => out.push(expr.clone()),
        }
    }
    out
}

/// Rebuilds a left-associative chain of the operator `op` from its operands, or returns `None`
/// if there are none.
pub(crate) fn rebuild(op: Op, operands: impl IntoIterator<Item = Entity>) -> Option<Entity> {
    operands.into_iter().reduce(|acc, operand| Entity::binary(op, acc, operand))
}
