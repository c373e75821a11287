//! Rewrite rules, and ordered tables of them.

use crate::entity::{Entity, Op};
use crate::simplify::Step;
use std::collections::HashMap;
use super::{Bindings, Pattern};

/// Builds the replacement for a matched pattern from its bindings. Returning `None` declines the
/// match, which lets a builder act as a guard.
pub type Builder = fn(&Bindings) -> Option<Entity>;

/// Rewrites a whole operator node, or declines by returning `None`.
pub type Rewrite = fn(&Entity) -> Option<Entity>;

#[derive(Debug, Clone)]
enum Action {
    Template { pattern: Pattern, build: Builder },
    Native { root: Op, rewrite: Rewrite },
}

/// A single rewrite rule, tagged with the [`Step`] it represents.
///
/// Most rules are a [`Pattern`] paired with a [`Builder`]. Rules that need to look at a node as a
/// whole, such as combining like terms, are written as *native* rules: a function that is called
/// on every node with the given root operator.
#[derive(Debug, Clone)]
pub struct Rule {
    step: Step,
    action: Action,
}

impl Rule {
    /// Creates a rule that rewrites the nodes matching the pattern.
    pub fn new(step: Step, pattern: Pattern, build: Builder) -> Self {
        Self { step, action: Action::Template { pattern, build } }
    }

    /// Creates a rule that calls `rewrite` on every node with the given root operator.
    pub fn native(step: Step, root: Op, rewrite: Rewrite) -> Self {
        Self { step, action: Action::Native { root, rewrite } }
    }

    /// The step this rule represents.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The operator a node must have for this rule to apply, or `None` if the rule can apply to
    /// any node.
    pub fn root(&self) -> Option<Op> {
        match &self.action {
            Action::Template { pattern, .. } => pattern.root(),
            Action::Native { root, .. } => Some(*root),
        }
    }

    /// Applies the rule to the node, returning the rewritten node if the rule applies.
    ///
    /// Every way the pattern matches is offered to the builder in turn, until it accepts one.
    pub fn apply(&self, expr: &Entity) -> Option<Entity> {
        match &self.action {
            Action::Template { pattern, build } => pattern
                .match_all(expr)
                .iter()
                .find_map(build),
            Action::Native { root, rewrite } => {
                if expr.op_kind() == Some(*root) {
                    rewrite(expr)
                } else {
                    None
                }
            },
        }
    }
}

/// An ordered list of rules.
///
/// The rules are tried in the order they were added, and the first rule that applies wins. The
/// table indexes its rules by root operator, so applying it to a node only tries the rules that
/// can match that node.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
    by_root: HashMap<Op, Vec<usize>>,
    wildcard: Vec<usize>,
}

impl RuleTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule with lower priority than every rule already in the table.
    pub fn push(&mut self, rule: Rule) {
        let index = self.rules.len();
        match rule.root() {
            Some(op) => self.by_root.entry(op).or_default().push(index),
            None => self.wildcard.push(index),
        }
        self.rules.push(rule);
    }

    /// Returns the rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies the first applicable rule to the node, returning its step and the rewritten node.
    ///
    /// Returns `None` if no rule applies.
    pub fn apply(&self, expr: &Entity) -> Option<(Step, Entity)> {
        let rooted = expr.op_kind()
            .and_then(|op| self.by_root.get(&op))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        // both index lists are sorted; merge them to keep the declared order
        let mut candidates = rooted.iter()
            .chain(&self.wildcard)
            .copied()
            .collect::<Vec<_>>();
        candidates.sort_unstable();

        candidates.into_iter().find_map(|index| {
            let rule = &self.rules[index];
            rule.apply(expr).map(|rewritten| (rule.step, rewritten))
        })
    }
}

impl Extend<Rule> for RuleTable {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, rules: I) {
        for rule in rules {
            self.push(rule);
        }
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(rules: I) -> Self {
        let mut table = Self::new();
        table.extend(rules);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{any, lit, op};
    use pretty_assertions::assert_eq;

    fn add_zero() -> Rule {
        Rule::new(Step::AddZero, op(Op::Sum, [any(0), lit(0)]), |b| b.get(0).cloned())
    }

    #[test]
    fn first_applicable_rule_wins() {
        let table = [
            add_zero(),
            Rule::new(Step::CombineLikeTerms, op(Op::Sum, [any(0), any(1)]), |_| {
                Some(Entity::var("never"))
            }),
        ].into_iter().collect::<RuleTable>();

        let x = Entity::var("x");
        let (step, result) = table.apply(&(&x + &Entity::from(0))).unwrap();
        assert_eq!(step, Step::AddZero);
        assert_eq!(result, x);
    }

    #[test]
    fn wildcard_rules_keep_their_priority() {
        let table = [
            Rule::new(Step::Abs, any(0), |_| None),
            Rule::new(Step::DoubleNegation, any(0), |b| {
                let (_, operands) = b.get(0)?.as_op()?;
                operands.first().cloned()
            }),
            add_zero(),
        ].into_iter().collect::<RuleTable>();

        let x = Entity::var("x");
        let (step, _) = table.apply(&(&x + &Entity::from(0))).unwrap();
        assert_eq!(step, Step::DoubleNegation);
    }

    #[test]
    fn declining_builder_acts_as_guard() {
        // only rewrite `a + b` when `a` is a number
        let table = [
            Rule::new(Step::AddZero, op(Op::Sum, [any(0), any(1)]), |b| {
                b.get(0)?.as_number()?;
                b.get(1).cloned()
            }),
        ].into_iter().collect::<RuleTable>();

        let (x, y) = (Entity::var("x"), Entity::var("y"));
        assert!(table.apply(&(&x + &y)).is_none());

        // the swapped match binds the number to slot 0
        let (_, result) = table.apply(&(&x + &Entity::from(2))).unwrap();
        assert_eq!(result, x);
    }

    #[test]
    fn native_rules_filter_by_root() {
        let table = [
            Rule::native(Step::DoubleNegation, Op::Neg, |expr| expr.children().next().cloned()),
        ].into_iter().collect::<RuleTable>();

        let x = Entity::var("x");
        assert_eq!(table.apply(&-&x), Some((Step::DoubleNegation, x.clone())));
        assert_eq!(table.apply(&x), None);
    }

    #[test]
    fn empty_table() {
        let table = RuleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.apply(&Entity::var("x")), None);
    }
}
