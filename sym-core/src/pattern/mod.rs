//! Declarative tree patterns with typed wildcard slots.
//!
//! A [`Pattern`] is an expression tree whose leaves may be *slots*: wildcards that match a
//! subtree and remember it in the [`Bindings`]. A slot can be restricted to numbers, variables,
//! or booleans. If the same slot appears more than once in a pattern, every occurrence must match
//! structurally equal subtrees, so `a + a` only matches sums of two equal terms.
//!
//! ```
//! use sym_core::{Entity, Op, pattern::{any, lit, op}};
//!
//! // a + 0
//! let pattern = op(Op::Sum, [any(0), lit(0)]);
//!
//! let x = Entity::var("x");
//! let bindings = pattern.matches(&(&Entity::from(0) + &x)).unwrap();
//! assert_eq!(bindings.get(0), Some(&x));
//! ```

pub mod rule;

use crate::entity::{Entity, Op};

pub use rule::{Rule, RuleTable};

/// The number of distinct slots a pattern can use.
pub const SLOTS: usize = 8;

/// A pattern over expression trees.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches any subtree.
    Any(usize),

    /// Matches a numeric literal.
    Number(usize),

    /// Matches a variable or constant.
    Variable(usize),

    /// Matches a boolean literal.
    Boolean(usize),

    /// Matches a subtree structurally equal to the given entity.
    Literal(Entity),

    /// Matches an operator node with the given operator, whose operands match the given patterns
    /// in order. Operands of commutative binary operators are also tried in swapped order.
    Op(Op, Vec<Pattern>),
}

/// Shorthand for [`Pattern::Any`].
pub fn any(slot: usize) -> Pattern {
    Pattern::Any(slot)
}

/// Shorthand for [`Pattern::Number`].
pub fn num(slot: usize) -> Pattern {
    Pattern::Number(slot)
}

/// Shorthand for [`Pattern::Variable`].
pub fn var(slot: usize) -> Pattern {
    Pattern::Variable(slot)
}

/// Shorthand for [`Pattern::Boolean`].
pub fn boolean(slot: usize) -> Pattern {
    Pattern::Boolean(slot)
}

/// Shorthand for [`Pattern::Literal`].
pub fn lit(value: impl Into<Entity>) -> Pattern {
    Pattern::Literal(value.into())
}

/// Shorthand for [`Pattern::Op`].
pub fn op(op: Op, operands: impl IntoIterator<Item = Pattern>) -> Pattern {
    Pattern::Op(op, operands.into_iter().collect())
}

/// The subtrees bound to the slots of a pattern by a successful match.
#[derive(Debug, Clone, Default)]
pub struct Bindings([Option<Entity>; SLOTS]);

impl Bindings {
    /// Returns the subtree bound to the given slot.
    pub fn get(&self, slot: usize) -> Option<&Entity> {
        self.0.get(slot)?.as_ref()
    }

    /// Binds the slot, or checks that it is already bound to an equal subtree.
    fn bind(mut self, slot: usize, expr: &Entity) -> Option<Self> {
        let entry = self.0.get_mut(slot)?;
        match entry {
            Some(bound) if *bound != *expr => return None,
            Some(_) => {},
            None => *entry = Some(expr.clone()),
        }
        Some(self)
    }
}

impl Pattern {
    /// Returns the operator at the root of the pattern, or `None` if the root is a slot or a
    /// literal.
    pub fn root(&self) -> Option<Op> {
        match self {
            Pattern::Op(op, _) => Some(*op),
            Pattern::Literal(entity) => entity.op_kind(),
            _ => None,
        }
    }

    /// Matches the pattern against the expression, returning the first set of bindings found.
    pub fn matches(&self, expr: &Entity) -> Option<Bindings> {
        self.match_all(expr).into_iter().next()
    }

    /// Matches the pattern against the expression, returning every distinct way it matches.
    ///
    /// A pattern can match in several ways when it contains commutative operators.
    pub fn match_all(&self, expr: &Entity) -> Vec<Bindings> {
        self.extend(expr, Bindings::default())
    }

    /// Returns every extension of `bindings` under which the pattern matches the expression.
    fn extend(&self, expr: &Entity, bindings: Bindings) -> Vec<Bindings> {
        let bound = match self {
            Pattern::Any(slot) => bindings.bind(*slot, expr),
            Pattern::Number(slot) => expr.as_number().and_then(|_| bindings.bind(*slot, expr)),
            Pattern::Variable(slot) => expr.as_variable().and_then(|_| bindings.bind(*slot, expr)),
            Pattern::Boolean(slot) => expr.as_boolean().and_then(|_| bindings.bind(*slot, expr)),
            Pattern::Literal(value) => (value == expr).then_some(bindings),
            Pattern::Op(op, patterns) => return extend_op(*op, patterns, expr, bindings),
        };
        bound.into_iter().collect()
    }
}

fn extend_op(op: Op, patterns: &[Pattern], expr: &Entity, bindings: Bindings) -> Vec<Bindings> {
    let Some((expr_op, operands)) = expr.as_op() else {
        return Vec::new();
    };
    if expr_op != op || operands.len() != patterns.len() {
        return Vec::new();
    }

    let mut results = extend_in_order(patterns, operands.iter(), bindings.clone());
    if op.is_commutative() && operands.len() == 2 {
        results.extend(extend_in_order(patterns, operands.iter().rev(), bindings));
    }
    results
}

fn extend_in_order<'a>(
    patterns: &[Pattern],
    operands: impl Iterator<Item = &'a Entity>,
    bindings: Bindings,
) -> Vec<Bindings> {
    patterns.iter()
        .zip(operands)
        .fold(vec![bindings], |states, (pattern, operand)| {
            states.into_iter()
                .flat_map(|state| pattern.extend(operand, state))
                .collect()
        })
}
