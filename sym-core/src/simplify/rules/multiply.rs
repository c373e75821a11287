//! Simplification rules for expressions involving multiplication and division, including
//! combining like factors.

use crate::entity::{Entity, Op};
use crate::pattern::{any, lit, op, Rule};
use crate::simplify::step::Step;
use super::{chain, rebuild};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero() -> Rule {
    Rule::new(Step::MultiplyZero, op(Op::Mul, [any(0), lit(0)]), |_| Some(Entity::from(0)))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one() -> Rule {
    Rule::new(Step::MultiplyOne, op(Op::Mul, [any(0), lit(1)]), |b| b.get(0).cloned())
}

/// `-1*a = -a`
pub fn multiply_negative_one() -> Rule {
    Rule::new(Step::MultiplyNegativeOne, op(Op::Mul, [any(0), lit(-1)]), |b| Some(-b.get(0)?.clone()))
}

/// `a/1 = a`
pub fn divide_by_one() -> Rule {
    Rule::new(Step::DivideByOne, op(Op::Div, [any(0), lit(1)]), |b| b.get(0).cloned())
}

/// `0/a = 0`
///
/// `0/0` is folded to the undefined value before any rule is tried.
pub fn divide_zero() -> Rule {
    Rule::new(Step::DivideZero, op(Op::Div, [lit(0), any(0)]), |_| Some(Entity::from(0)))
}

/// `a/a = 1`
pub fn divide_self() -> Rule {
    Rule::new(Step::DivideSelf, op(Op::Div, [any(0), any(0)]), |_| Some(Entity::from(1)))
}

/// Utility function to extract the base and exponent of a factor. If the factor is not a power,
/// the exponent is 1.
///
/// - `a^2` -> `(a, 2)`
/// - `a` -> `(a, 1)`
fn split_power(factor: &Entity) -> (Entity, Entity) {
    match factor.as_op() {
        Some((Op::Pow, [base, exponent])) => (base.clone(), exponent.clone()),
        _ => (factor.clone(), Entity::from(1)),
    }
}

/// Combines like factors.
///
/// `a*a = a^2`
/// `a^2*a^3 = a^5`
/// `a*b*a = a^2*b`
/// etc.
///
/// Numeric factors are left to the canonical ordering, which multiplies them together.
fn combine_like_factors(expr: &Entity) -> Option<Entity> {
    let factors = chain(Op::Mul, expr);
    let mut numbers = Vec::new();
    let mut groups: Vec<(Entity, Vec<Entity>)> = Vec::new();

    for factor in &factors {
        if factor.as_number().is_some() {
            numbers.push(factor.clone());
            continue;
        }

        let (base, exponent) = split_power(factor);
        match groups.iter_mut().find(|(existing, _)| *existing == base) {
            Some((_, exponents)) => exponents.push(exponent),
            None => groups.push((base, vec![exponent])),
        }
    }

    if groups.len() + numbers.len() == factors.len() {
        return None;
    }

    let powers = groups.into_iter().map(|(base, exponents)| {
        if exponents.len() == 1 {
            let exponent = &exponents[0];
            if exponent.is_one() {
                return base;
            }
            return base.pow(exponent);
        }

        // the exponents are added as an unevaluated sum; the next pass folds it
        let exponent = rebuild(Op::Sum, exponents).unwrap_or_else(|| Entity::from(1));
        base.pow(exponent)
    });
    rebuild(Op::Mul, numbers.into_iter().chain(powers))
}

/// Applies all multiply rules.
pub fn all() -> Vec<Rule> {
    vec![
        multiply_zero(),
        multiply_one(),
        multiply_negative_one(),
        Rule::native(Step::CombineLikeFactors, Op::Mul, combine_like_factors),
        divide_by_one(),
        divide_zero(),
        divide_self(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identities() {
        let x = Entity::var("x");
        let table = all().into_iter().collect::<crate::pattern::RuleTable>();
        let apply = |expr: Entity| table.apply(&expr).map(|(_, result)| result);

        assert_eq!(apply(&x * &Entity::from(0)), Some(Entity::from(0)));
        assert_eq!(apply(&Entity::from(1) * &x), Some(x.clone()));
        assert_eq!(apply(&Entity::from(-1) * &x), Some(-&x));
        assert_eq!(apply(&x / &Entity::from(1)), Some(x.clone()));
        assert_eq!(apply(&Entity::from(0) / &x), Some(Entity::from(0)));
        assert_eq!(apply(&x / &x), Some(Entity::from(1)));
    }

    #[test]
    fn like_factors() {
        let (x, y) = (Entity::var("x"), Entity::var("y"));

        let result = combine_like_factors(&(&x * &x)).unwrap();
        assert_eq!(result, x.pow(&Entity::from(1) + &Entity::from(1)));

        let result = combine_like_factors(&(&x.pow(2) * &x.pow(3))).unwrap();
        assert_eq!(result, x.pow(&Entity::from(2) + &Entity::from(3)));

        let result = combine_like_factors(&(&(&Entity::from(3) * &x) * &(&y * &x))).unwrap();
        assert_eq!(result, &(&Entity::from(3) * &x.pow(&Entity::from(1) + &Entity::from(1))) * &y);
    }

    #[test]
    fn unlike_factors_are_left_alone() {
        let (x, y) = (Entity::var("x"), Entity::var("y"));
        assert_eq!(combine_like_factors(&(&x * &y)), None);
        assert_eq!(combine_like_factors(&(&Entity::from(2) * &x)), None);
    }
}
