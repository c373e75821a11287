//! Simplification rules for set operators whose operands are not all set literals.
//!
//! Operators on set literals are folded by the [`set`](crate::set) functions before any rule is
//! tried; these rules cover symbolic operands, such as a variable standing for a set.

use crate::entity::{Entity, Op};
use crate::pattern::{any, lit, op, Rule};
use crate::simplify::step::Step;

/// `A ∪ ∅ = A`
pub fn union_empty() -> Rule {
    Rule::new(Step::UnionEmpty, op(Op::Union, [any(0), lit(Entity::empty_set())]), |b| {
        b.get(0).cloned()
    })
}

/// `A ∩ ∅ = ∅`
pub fn intersection_empty() -> Rule {
    Rule::new(Step::IntersectionEmpty, op(Op::Intersection, [any(0), lit(Entity::empty_set())]), |_| {
        Some(Entity::empty_set())
    })
}

/// `A ∪ A = A`
pub fn union_self() -> Rule {
    Rule::new(Step::UnionSelf, op(Op::Union, [any(0), any(0)]), |b| b.get(0).cloned())
}

/// `A ∩ A = A`
pub fn intersection_self() -> Rule {
    Rule::new(Step::IntersectionSelf, op(Op::Intersection, [any(0), any(0)]), |b| b.get(0).cloned())
}

/// `A \ ∅ = A`
pub fn set_minus_empty() -> Rule {
    Rule::new(Step::SetMinusEmpty, op(Op::SetMinus, [any(0), lit(Entity::empty_set())]), |b| {
        b.get(0).cloned()
    })
}

/// `∅ \ A = ∅`
pub fn empty_set_minus() -> Rule {
    Rule::new(Step::EmptySetMinus, op(Op::SetMinus, [lit(Entity::empty_set()), any(0)]), |_| {
        Some(Entity::empty_set())
    })
}

/// `A \ A = ∅`
pub fn set_minus_self() -> Rule {
    Rule::new(Step::SetMinusSelf, op(Op::SetMinus, [any(0), any(0)]), |_| Some(Entity::empty_set()))
}

/// `a ∈ ∅` is false
pub fn in_empty() -> Rule {
    Rule::new(Step::InEmpty, op(Op::In, [any(0), lit(Entity::empty_set())]), |_| {
        Some(Entity::boolean(false))
    })
}

/// Applies all set rules.
pub fn all() -> Vec<Rule> {
    vec![
        union_empty(),
        intersection_empty(),
        union_self(),
        intersection_self(),
        set_minus_empty(),
        empty_set_minus(),
        set_minus_self(),
        in_empty(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::RuleTable;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbolic_sets() {
        let table = all().into_iter().collect::<RuleTable>();
        let apply = |expr: Entity| table.apply(&expr).map(|(_, result)| result);
        let (a, empty) = (Entity::var("A"), Entity::empty_set());

        assert_eq!(apply(Entity::binary(Op::Union, empty.clone(), a.clone())), Some(a.clone()));
        assert_eq!(apply(Entity::binary(Op::Intersection, a.clone(), empty.clone())), Some(empty.clone()));
        assert_eq!(apply(Entity::binary(Op::Union, a.clone(), a.clone())), Some(a.clone()));
        assert_eq!(apply(Entity::binary(Op::SetMinus, a.clone(), a.clone())), Some(empty.clone()));
        assert_eq!(apply(Entity::binary(Op::SetMinus, empty.clone(), a.clone())), Some(empty.clone()));
        assert_eq!(apply(Entity::binary(Op::In, Entity::var("x"), empty)), Some(Entity::boolean(false)));
    }
}
