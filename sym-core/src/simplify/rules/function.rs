//! Simplification rules for the named functions.

use crate::entity::{Entity, Op};
use crate::pattern::{any, lit, op, Rule};
use crate::simplify::step::Step;

/// `ln(e) = 1`
pub fn ln_e() -> Rule {
    Rule::new(Step::LnE, op(Op::Ln, [lit(Entity::e())]), |_| Some(Entity::from(1)))
}

/// `log(a, a) = 1`
pub fn log_self() -> Rule {
    Rule::new(Step::LogSelf, op(Op::Log, [any(0), any(0)]), |_| Some(Entity::from(1)))
}

/// `e^ln(a) = a`
pub fn exp_ln() -> Rule {
    Rule::new(Step::ExpLn, op(Op::Pow, [lit(Entity::e()), op(Op::Ln, [any(0)])]), |b| {
        b.get(0).cloned()
    })
}

/// `sin(pi) = 0`
pub fn sin_pi() -> Rule {
    Rule::new(Step::Sin, op(Op::Sin, [lit(Entity::pi())]), |_| Some(Entity::from(0)))
}

/// `sin(-a) = -sin(a)`
pub fn sin_odd() -> Rule {
    Rule::new(Step::Sin, op(Op::Sin, [op(Op::Neg, [any(0)])]), |b| {
        Some(-Entity::unary(Op::Sin, b.get(0)?.clone()))
    })
}

/// `cos(pi) = -1`
pub fn cos_pi() -> Rule {
    Rule::new(Step::Cos, op(Op::Cos, [lit(Entity::pi())]), |_| Some(Entity::from(-1)))
}

/// `cos(-a) = cos(a)`
pub fn cos_even() -> Rule {
    Rule::new(Step::Cos, op(Op::Cos, [op(Op::Neg, [any(0)])]), |b| {
        Some(Entity::unary(Op::Cos, b.get(0)?.clone()))
    })
}

/// `tan(pi) = 0`
pub fn tan_pi() -> Rule {
    Rule::new(Step::Tan, op(Op::Tan, [lit(Entity::pi())]), |_| Some(Entity::from(0)))
}

/// `tan(-a) = -tan(a)`
pub fn tan_odd() -> Rule {
    Rule::new(Step::Tan, op(Op::Tan, [op(Op::Neg, [any(0)])]), |b| {
        Some(-Entity::unary(Op::Tan, b.get(0)?.clone()))
    })
}

/// `cot(-a) = -cot(a)`
pub fn cot_odd() -> Rule {
    Rule::new(Step::Cot, op(Op::Cot, [op(Op::Neg, [any(0)])]), |b| {
        Some(-Entity::unary(Op::Cot, b.get(0)?.clone()))
    })
}

/// `pi / n`
fn pi_over(n: i64) -> Entity {
    Entity::pi() / Entity::from(n)
}

/// `arcsin(1) = pi/2`
pub fn arcsin_one() -> Rule {
    Rule::new(Step::Arcsin, op(Op::Arcsin, [lit(Entity::from(1))]), |_| Some(pi_over(2)))
}

/// `arcsin(-a) = -arcsin(a)`
pub fn arcsin_odd() -> Rule {
    Rule::new(Step::Arcsin, op(Op::Arcsin, [op(Op::Neg, [any(0)])]), |b| {
        Some(-Entity::unary(Op::Arcsin, b.get(0)?.clone()))
    })
}

/// `arccos(0) = pi/2`
pub fn arccos_zero() -> Rule {
    Rule::new(Step::Arccos, op(Op::Arccos, [lit(Entity::from(0))]), |_| Some(pi_over(2)))
}

/// `arccos(-1) = pi`
pub fn arccos_negative_one() -> Rule {
    Rule::new(Step::Arccos, op(Op::Arccos, [lit(Entity::from(-1))]), |_| Some(Entity::pi()))
}

/// `arctan(1) = pi/4`
pub fn arctan_one() -> Rule {
    Rule::new(Step::Arctan, op(Op::Arctan, [lit(Entity::from(1))]), |_| Some(pi_over(4)))
}

/// `arctan(-a) = -arctan(a)`
pub fn arctan_odd() -> Rule {
    Rule::new(Step::Arctan, op(Op::Arctan, [op(Op::Neg, [any(0)])]), |b| {
        Some(-Entity::unary(Op::Arctan, b.get(0)?.clone()))
    })
}

/// `arccot(0) = pi/2`
pub fn arccot_zero() -> Rule {
    Rule::new(Step::Arccot, op(Op::Arccot, [lit(Entity::from(0))]), |_| Some(pi_over(2)))
}

/// `arccot(1) = pi/4`
pub fn arccot_one() -> Rule {
    Rule::new(Step::Arccot, op(Op::Arccot, [lit(Entity::from(1))]), |_| Some(pi_over(4)))
}

/// `abs(abs(a)) = abs(a)`
pub fn abs_abs() -> Rule {
    Rule::new(Step::Abs, op(Op::Abs, [op(Op::Abs, [any(0)])]), |b| {
        Some(Entity::unary(Op::Abs, b.get(0)?.clone()))
    })
}

/// `abs(-a) = abs(a)`
pub fn abs_neg() -> Rule {
    Rule::new(Step::Abs, op(Op::Abs, [op(Op::Neg, [any(0)])]), |b| {
        Some(Entity::unary(Op::Abs, b.get(0)?.clone()))
    })
}

/// `signum(signum(a)) = signum(a)`
pub fn signum_signum() -> Rule {
    Rule::new(Step::Signum, op(Op::Signum, [op(Op::Signum, [any(0)])]), |b| {
        Some(Entity::unary(Op::Signum, b.get(0)?.clone()))
    })
}

/// `signum(-a) = -signum(a)`
pub fn signum_odd() -> Rule {
    Rule::new(Step::Signum, op(Op::Signum, [op(Op::Neg, [any(0)])]), |b| {
        Some(-Entity::unary(Op::Signum, b.get(0)?.clone()))
    })
}

/// Applies all function rules.
pub fn all() -> Vec<Rule> {
    vec![
        ln_e(),
        log_self(),
        exp_ln(),
        sin_pi(),
        sin_odd(),
        cos_pi(),
        cos_even(),
        tan_pi(),
        tan_odd(),
        cot_odd(),
        arcsin_one(),
        arcsin_odd(),
        arccos_zero(),
        arccos_negative_one(),
        arctan_one(),
        arctan_odd(),
        arccot_zero(),
        arccot_one(),
        abs_abs(),
        abs_neg(),
        signum_signum(),
        signum_odd(),
    ]
}
