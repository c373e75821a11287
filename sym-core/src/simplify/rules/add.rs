//! Simplification rules for expressions involving addition, subtraction, and negation, including
//! combining like terms.

use crate::entity::{Entity, Op};
use crate::numeric::Number;
use crate::pattern::{any, lit, op, Rule};
use crate::simplify::step::Step;
use super::{chain, rebuild};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero() -> Rule {
    Rule::new(Step::AddZero, op(Op::Sum, [any(0), lit(0)]), |b| b.get(0).cloned())
}

/// `a-0 = a`
pub fn subtract_zero() -> Rule {
    Rule::new(Step::SubtractZero, op(Op::Minus, [any(0), lit(0)]), |b| b.get(0).cloned())
}

/// `0-a = -a`
pub fn subtract_from_zero() -> Rule {
    Rule::new(Step::SubtractFromZero, op(Op::Minus, [lit(0), any(0)]), |b| {
        Some(-b.get(0)?.clone())
    })
}

/// `a-a = 0`
pub fn subtract_self() -> Rule {
    Rule::new(Step::SubtractSelf, op(Op::Minus, [any(0), any(0)]), |_| Some(Entity::from(0)))
}

/// `a+(-b) = a-b`
pub fn add_negation() -> Rule {
    Rule::new(Step::AddNegation, op(Op::Sum, [any(0), op(Op::Neg, [any(1)])]), |b| {
        Some(b.get(0)? - b.get(1)?)
    })
}

/// `a-(-b) = a+b`
pub fn subtract_negation() -> Rule {
    Rule::new(Step::SubtractNegation, op(Op::Minus, [any(0), op(Op::Neg, [any(1)])]), |b| {
        Some(b.get(0)? + b.get(1)?)
    })
}

/// `-(-a) = a`
pub fn double_negation() -> Rule {
    Rule::new(Step::DoubleNegation, op(Op::Neg, [op(Op::Neg, [any(0)])]), |b| b.get(0).cloned())
}

/// Utility function to extract the numeric coefficient and the remaining factors of a term. If
/// the term is not a product with a numeric factor, the coefficient is 1.
///
/// - `3*a` -> `(3, a)`
/// - `3*a*b` -> `(3, a*b)`
/// - `a` -> `(1, a)`
fn split_coefficient(term: &Entity) -> (Number, Entity) {
    if term.op_kind() != Some(Op::Mul) {
        return (Number::int(1), term.clone());
    }

    let mut coefficient = Number::int(1);
    let mut factors = Vec::new();
    for factor in chain(Op::Mul, term) {
        match factor.as_number() {
            Some(n) => coefficient = coefficient.mul_ref(n),
            None => factors.push(factor),
        }
    }
    match rebuild(Op::Mul, factors) {
        Some(base) => (coefficient, base),
        None => (Number::int(1), term.clone()),
    }
}

/// The terms of a sum, with subtractions and negations folded into the coefficients.
#[derive(Default)]
struct Terms {
    /// The sum of the numeric terms, if there are any.
    constant: Option<Number>,

    /// The number of numeric terms.
    constants: usize,

    /// Each distinct non-numeric term and its total coefficient, in order of first appearance.
    terms: Vec<(Entity, Number)>,

    /// The number of non-numeric terms, before combining.
    count: usize,
}

impl Terms {
    fn collect(&mut self, expr: &Entity, negate: bool) {
        match expr.as_op() {
            Some((Op::Sum, [a, b])) => {
                self.collect(a, negate);
                self.collect(b, negate);
            },
            Some((Op::Minus, [a, b])) => {
                self.collect(a, negate);
                self.collect(b, !negate);
            },
            Some((Op::Neg, [a])) => self.collect(a, !negate),
            _ => {
                if let Some(n) = expr.as_number() {
                    let n = if negate { n.neg_ref() } else { n.clone() };
                    self.constants += 1;
                    self.constant = Some(match self.constant.take() {
                        Some(c) => c.add_ref(&n),
                        None => n,
                    });
                    return;
                }

                let (coefficient, base) = split_coefficient(expr);
                let coefficient = if negate { coefficient.neg_ref() } else { coefficient };
                self.count += 1;
                match self.terms.iter_mut().find(|(existing, _)| *existing == base) {
                    Some((_, total)) => *total = total.add_ref(&coefficient),
                    None => self.terms.push((base, coefficient)),
                }
            },
        }
    }

    /// Returns true if collecting the terms combined at least two of them.
    fn combined(&self) -> bool {
        self.constants > 1 || self.terms.len() < self.count
    }

    fn into_entity(self) -> Entity {
        let terms = self.terms
            .into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(base, coefficient)| {
                if coefficient.is_one() {
                    base
                } else if coefficient.neg_ref().is_one() {
                    -base
                } else {
                    Entity::number(coefficient) * base
                }
            });
        let constant = self.constant
            .filter(|c| !c.is_zero())
            .map(Entity::number);

        rebuild(Op::Sum, terms.chain(constant)).unwrap_or_else(|| Entity::from(0))
    }
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `2a-a = a`
/// etc.
fn combine_like_terms(expr: &Entity) -> Option<Entity> {
    let mut terms = Terms::default();
    terms.collect(expr, false);
    terms.combined().then(|| terms.into_entity())
}

/// Applies all add rules.
pub fn all() -> Vec<Rule> {
    vec![
        add_zero(),
        subtract_zero(),
        subtract_from_zero(),
        subtract_self(),
        double_negation(),
        Rule::native(Step::CombineLikeTerms, Op::Sum, combine_like_terms),
        Rule::native(Step::CombineLikeTerms, Op::Minus, combine_like_terms),
        add_negation(),
        subtract_negation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::RuleTable;
    use pretty_assertions::assert_eq;

    fn apply(expr: &Entity) -> Option<Entity> {
        all().into_iter().collect::<RuleTable>().apply(expr).map(|(_, result)| result)
    }

    #[test]
    fn zero_terms() {
        let x = Entity::var("x");
        assert_eq!(apply(&(&Entity::from(0) + &x)), Some(x.clone()));
        assert_eq!(apply(&(&x - &Entity::from(0))), Some(x.clone()));
        assert_eq!(apply(&(&Entity::from(0) - &x)), Some(-&x));
        assert_eq!(apply(&(&x - &x)), Some(Entity::from(0)));
    }

    #[test]
    fn like_terms() {
        let x = Entity::var("x");
        let two_x = &Entity::from(2) * &x;
        let three_x = &Entity::from(3) * &x;

        assert_eq!(combine_like_terms(&(&x + &x)), Some(&Entity::from(2) * &x));
        assert_eq!(combine_like_terms(&(&two_x + &three_x)), Some(&Entity::from(5) * &x));
        assert_eq!(combine_like_terms(&(&three_x - &x)), Some(&Entity::from(2) * &x));
        assert_eq!(combine_like_terms(&(&two_x - &x)), Some(x.clone()));
        assert_eq!(combine_like_terms(&(&x + &-&x)), Some(Entity::from(0)));
    }

    #[test]
    fn like_terms_keep_other_terms() {
        let (x, y) = (Entity::var("x"), Entity::var("y"));
        let expr = &(&(&x + &y) + &x) + &Entity::from(1);
        let result = combine_like_terms(&expr).unwrap();
        assert_eq!(result, &(&(&Entity::from(2) * &x) + &y) + &Entity::from(1));
    }

    #[test]
    fn unlike_terms_are_left_alone() {
        let (x, y) = (Entity::var("x"), Entity::var("y"));
        assert_eq!(combine_like_terms(&(&x + &y)), None);
        assert_eq!(combine_like_terms(&(&x - &y)), None);
        assert_eq!(combine_like_terms(&(&Entity::from(1) + &x)), None);
    }

    #[test]
    fn negations() {
        let (x, y) = (Entity::var("x"), Entity::var("y"));
        assert_eq!(apply(&(&x + &-&y)), Some(&x - &y));
        assert_eq!(apply(&(&x - &-&y)), Some(&x + &y));
        assert_eq!(apply(&-&-&x), Some(x.clone()));
    }
}
