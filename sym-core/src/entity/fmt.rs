use crate::numeric::Number;
use std::fmt::{Debug, Display, Formatter, Result};
use super::{Entity, Node, Op, OpKind};

/// Binding strength of atoms, which never need parentheses.
const ATOM: u8 = u8::MAX;

/// The binding strength of a number when it is formatted as an operand.
fn number_precedence(n: &Number) -> u8 {
    match n {
        Number::Complex(re, _) if !re.is_zero() => Op::Sum.precedence(),
        Number::Complex(_, im) if im.is_negative() => Op::Neg.precedence(),
        Number::Rational(_) => Op::Div.precedence(),
        n if n.is_negative() => Op::Neg.precedence(),
        _ => ATOM,
    }
}

fn precedence(entity: &Entity) -> u8 {
    match entity.node() {
        Node::Number(n) => number_precedence(n),
        Node::Op(op, _) => op.precedence(),
        _ => ATOM,
    }
}

/// Formats the operand, wrapping it in parentheses if it binds weaker than `min`.
fn fmt_operand(entity: &Entity, min: u8, f: &mut Formatter<'_>) -> Result {
    if precedence(entity) < min {
        write!(f, "({})", entity)
    } else {
        write!(f, "{}", entity)
    }
}

fn fmt_op(op: Op, children: &[Entity], f: &mut Formatter<'_>) -> Result {
    let prec = op.precedence();
    match op {
        Op::Neg => {
            write!(f, "-")?;
            fmt_operand(&children[0], prec + 1, f)
        },
        Op::Not => {
            write!(f, "not ")?;
            fmt_operand(&children[0], prec, f)
        },
        _ if op.kind() == OpKind::Function => {
            write!(f, "{}(", op.name())?;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")
        },
        Op::Pow => {
            // right-associative
            fmt_operand(&children[0], prec + 1, f)?;
            write!(f, "^")?;
            fmt_operand(&children[1], prec, f)
        },
        _ => {
            // left-associative; the right operand of a non-associative operator needs parentheses
            // at equal precedence
            let rhs_min = if op.is_associative() { prec } else { prec + 1 };
            fmt_operand(&children[0], prec, f)?;
            write!(f, " {} ", op.name())?;
            fmt_operand(&children[1], rhs_min, f)
        },
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.node() {
            Node::Number(n) => write!(f, "{}", n),
            Node::Variable(v) => write!(f, "{}", v.name),
            Node::Boolean(b) => write!(f, "{}", b),
            Node::Op(op, children) => fmt_op(*op, children, f),
            Node::FiniteSet(elements) if elements.is_empty() => write!(f, "∅"),
            Node::FiniteSet(elements) => {
                write!(f, "{{")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "}}")
            },
            Node::Pieces(pieces) => {
                for (i, piece) in pieces.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ∪ ")?;
                    }
                    write!(f, "{}", piece)?;
                }
                Ok(())
            },
        }
    }
}

impl Debug for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "`{}`", self)
    }
}
