//! The operators and functions an [`Entity`](super::Entity) node can apply.

use levenshtein::levenshtein;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The family an [`Op`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Operators over numbers, producing numbers.
    Arithmetic,

    /// Named functions over numbers, producing numbers.
    Function,

    /// Connectives over booleans, producing booleans.
    Boolean,

    /// Comparisons between values, producing booleans.
    Comparison,

    /// Operators over sets.
    Set,
}

/// An operator or function with a fixed number of operands.
///
/// The declaration order is significant: it is part of the canonical order of expressions, which
/// places nodes with "smaller" operators first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// `a + b`
    Sum,

    /// `a - b`
    Minus,

    /// `a * b`
    Mul,

    /// `a / b`
    Div,

    /// `a ^ b`
    Pow,

    /// `-a`
    Neg,

    Sin,
    Cos,
    Tan,

    /// The cotangent, `1 / tan(a)`.
    Cot,

    Arcsin,
    Arccos,
    Arctan,

    /// The inverse cotangent, with `arccot(0) = pi/2`.
    Arccot,

    /// The natural logarithm.
    Ln,

    /// `log(base, x)`
    Log,

    Abs,

    /// The sign of a real number, `a / abs(a)` for complex numbers, and `0` at zero.
    Signum,

    Factorial,

    Not,
    And,
    Or,
    Xor,

    /// `a -> b`
    Implies,

    Equals,
    Less,
    LessEq,
    Greater,
    GreaterEq,

    Union,
    Intersection,

    /// `a \ b`
    SetMinus,

    /// `x ∈ a`
    In,
}

/// The functions that can be created by name with [`Entity::call`](super::Entity::call).
pub const FUNCTIONS: [Op; 13] = [
    Op::Sin,
    Op::Cos,
    Op::Tan,
    Op::Cot,
    Op::Arcsin,
    Op::Arccos,
    Op::Arctan,
    Op::Arccot,
    Op::Ln,
    Op::Log,
    Op::Abs,
    Op::Signum,
    Op::Factorial,
];

impl Op {
    /// The number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            Op::Log => 2,
            Op::Neg | Op::Not => 1,
            _ if self.kind() == OpKind::Function => 1,
            _ => 2,
        }
    }

    /// Returns true if swapping the operands never changes the value.
    pub fn is_commutative(self) -> bool {
        matches!(
            self,
            Op::Sum | Op::Mul | Op::And | Op::Or | Op::Xor | Op::Equals | Op::Union | Op::Intersection
        )
    }

    /// Returns true if chains of this operator can be regrouped freely. Such chains are flattened
    /// and sorted during simplification.
    pub fn is_associative(self) -> bool {
        self.is_commutative() && self != Op::Equals
    }

    /// The family of the operator.
    pub fn kind(self) -> OpKind {
        match self {
            Op::Sum | Op::Minus | Op::Mul | Op::Div | Op::Pow | Op::Neg => OpKind::Arithmetic,
            Op::Sin | Op::Cos | Op::Tan | Op::Cot
            | Op::Arcsin | Op::Arccos | Op::Arctan | Op::Arccot
            | Op::Ln | Op::Log | Op::Abs | Op::Signum | Op::Factorial => OpKind::Function,
            Op::Not | Op::And | Op::Or | Op::Xor | Op::Implies => OpKind::Boolean,
            Op::Equals | Op::Less | Op::LessEq | Op::Greater | Op::GreaterEq => OpKind::Comparison,
            Op::Union | Op::Intersection | Op::SetMinus | Op::In => OpKind::Set,
        }
    }

    /// The name of the operator, as a function name or symbol.
    pub fn name(self) -> &'static str {
        match self {
            Op::Sum => "+",
            Op::Minus => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Neg => "-",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Cot => "cot",
            Op::Arcsin => "arcsin",
            Op::Arccos => "arccos",
            Op::Arctan => "arctan",
            Op::Arccot => "arccot",
            Op::Ln => "ln",
            Op::Log => "log",
            Op::Abs => "abs",
            Op::Signum => "signum",
            Op::Factorial => "factorial",
            Op::Not => "not",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::Implies => "->",
            Op::Equals => "=",
            Op::Less => "<",
            Op::LessEq => "<=",
            Op::Greater => ">",
            Op::GreaterEq => ">=",
            Op::Union => "∪",
            Op::Intersection => "∩",
            Op::SetMinus => "\\",
            Op::In => "∈",
        }
    }

    /// Looks up a function by name.
    pub fn function(name: &str) -> Option<Op> {
        FUNCTIONS.into_iter().find(|op| op.name() == name)
    }

    /// Returns the names of the functions whose names are similar to the given name.
    pub fn similar_functions(name: &str) -> Vec<&'static str> {
        FUNCTIONS
            .into_iter()
            .map(Op::name)
            .filter(|candidate| levenshtein(candidate, name) < 2)
            .collect()
    }

    /// The binding strength of the operator when formatted infix; higher binds tighter.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Op::Implies => 1,
            Op::Or | Op::Xor => 2,
            Op::And => 3,
            Op::Not => 4,
            Op::Equals | Op::Less | Op::LessEq | Op::Greater | Op::GreaterEq | Op::In => 5,
            Op::Union | Op::SetMinus => 6,
            Op::Intersection => 7,
            Op::Sum | Op::Minus => 8,
            Op::Mul | Op::Div => 9,
            Op::Neg => 10,
            Op::Pow => 11,
            _ => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup() {
        assert_eq!(Op::function("log"), Some(Op::Log));
        assert_eq!(Op::function("and"), None);
        assert_eq!(Op::similar_functions("sn"), vec!["sin", "ln"]);
        assert_eq!(Op::function("arcsin"), Some(Op::Arcsin));
        assert_eq!(Op::similar_functions("arcsn"), vec!["arcsin"]);
    }

    #[test]
    fn function_arity() {
        assert_eq!(Op::Arccot.arity(), 1);
        assert_eq!(Op::Signum.arity(), 1);
        assert_eq!(Op::Log.arity(), 2);
        assert!(FUNCTIONS.iter().all(|op| op.kind() == OpKind::Function));
    }

    #[test]
    fn equals_is_not_associative() {
        assert!(Op::Equals.is_commutative());
        assert!(!Op::Equals.is_associative());
        assert!(Op::Union.is_associative());
    }
}
