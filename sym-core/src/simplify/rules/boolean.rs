//! Simplification rules for boolean connectives and comparisons.

use crate::entity::{Entity, Op};
use crate::pattern::{any, lit, op, rule::Builder, Bindings, Rule};
use crate::simplify::step::Step;

fn always_true(_: &Bindings) -> Option<Entity> {
    Some(Entity::boolean(true))
}

fn always_false(_: &Bindings) -> Option<Entity> {
    Some(Entity::boolean(false))
}

fn first(bindings: &Bindings) -> Option<Entity> {
    bindings.get(0).cloned()
}

/// Creates a rule that rewrites `op(a, a)`.
fn self_rule(step: Step, operator: Op, build: Builder) -> Rule {
    Rule::new(step, op(operator, [any(0), any(0)]), build)
}

/// `not not a = a`
pub fn double_not() -> Rule {
    Rule::new(Step::DoubleNot, op(Op::Not, [op(Op::Not, [any(0)])]), first)
}

/// `a and true = a`
pub fn and_true() -> Rule {
    Rule::new(Step::AndTrue, op(Op::And, [any(0), lit(true)]), first)
}

/// `a and false = false`
pub fn and_false() -> Rule {
    Rule::new(Step::AndFalse, op(Op::And, [any(0), lit(false)]), always_false)
}

/// `a or true = true`
pub fn or_true() -> Rule {
    Rule::new(Step::OrTrue, op(Op::Or, [any(0), lit(true)]), always_true)
}

/// `a or false = a`
pub fn or_false() -> Rule {
    Rule::new(Step::OrFalse, op(Op::Or, [any(0), lit(false)]), first)
}

/// `a xor true = not a`
pub fn xor_true() -> Rule {
    Rule::new(Step::XorTrue, op(Op::Xor, [any(0), lit(true)]), |b| {
        Some(Entity::unary(Op::Not, b.get(0)?.clone()))
    })
}

/// `a xor false = a`
pub fn xor_false() -> Rule {
    Rule::new(Step::XorFalse, op(Op::Xor, [any(0), lit(false)]), first)
}

/// `true -> a = a`
pub fn implies_from_true() -> Rule {
    Rule::new(Step::ImpliesFromTrue, op(Op::Implies, [lit(true), any(0)]), first)
}

/// `false -> a = true`
pub fn implies_from_false() -> Rule {
    Rule::new(Step::ImpliesFromFalse, op(Op::Implies, [lit(false), any(0)]), always_true)
}

/// `a -> true = true`
pub fn implies_true() -> Rule {
    Rule::new(Step::ImpliesTrue, op(Op::Implies, [any(0), lit(true)]), always_true)
}

/// Applies all boolean rules.
pub fn all() -> Vec<Rule> {
    vec![
        double_not(),
        and_true(),
        and_false(),
        self_rule(Step::AndSelf, Op::And, first),
        or_true(),
        or_false(),
        self_rule(Step::OrSelf, Op::Or, first),
        xor_true(),
        xor_false(),
        self_rule(Step::XorSelf, Op::Xor, always_false),
        implies_from_true(),
        implies_from_false(),
        implies_true(),
        self_rule(Step::ImpliesSelf, Op::Implies, always_true),
        self_rule(Step::CompareSelf, Op::Equals, always_true),
        self_rule(Step::CompareSelf, Op::LessEq, always_true),
        self_rule(Step::CompareSelf, Op::GreaterEq, always_true),
        self_rule(Step::CompareSelf, Op::Less, always_false),
        self_rule(Step::CompareSelf, Op::Greater, always_false),
    ]
}
