//! Simplification rules for power expressions.

use crate::entity::{Entity, Op};
use crate::pattern::{any, lit, num, op, Rule};
use crate::simplify::step::Step;

/// `a^0 = 1`
///
/// `0^0` is folded to the undefined value before any rule is tried.
pub fn power_zero() -> Rule {
    Rule::new(Step::PowerZero, op(Op::Pow, [any(0), lit(0)]), |_| Some(Entity::from(1)))
}

/// `a^1 = a`
pub fn power_one() -> Rule {
    Rule::new(Step::PowerOne, op(Op::Pow, [any(0), lit(1)]), |b| b.get(0).cloned())
}

/// `1^a = 1`
pub fn power_one_left() -> Rule {
    Rule::new(Step::PowerOneLeft, op(Op::Pow, [lit(1), any(0)]), |_| Some(Entity::from(1)))
}

/// `(a^b)^c = a^(b*c)`
///
/// Only applies when `c` is an integer, since `(a^b)^c` and `a^(b*c)` can be on different
/// branches otherwise, as in `((-1)^2)^(1/2)`.
pub fn power_power() -> Rule {
    Rule::new(
        Step::PowerPower,
        op(Op::Pow, [op(Op::Pow, [any(0), any(1)]), num(2)]),
        |b| {
            let outer = b.get(2)?;
            if !outer.as_number()?.is_integer() {
                return None;
            }
            Some(b.get(0)?.pow(b.get(1)? * outer))
        },
    )
}

/// Applies all power rules.
pub fn all() -> Vec<Rule> {
    vec![
        power_zero(),
        power_one(),
        power_one_left(),
        power_power(),
    ]
}
