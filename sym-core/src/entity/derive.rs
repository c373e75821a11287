//! Symbolic differentiation.

use crate::ctxt::Ctxt;
use crate::error::NotSupported;
use crate::numeric::Number;
use crate::simplify::Simplifier;
use sym_error::Error;
use super::{Entity, Node, Op, OpKind, Variable};

impl Entity {
    /// Differentiates the expression with respect to `var`, and simplifies the result with the
    /// default context.
    ///
    /// Constants and every other variable are treated as independent of `var`.
    pub fn differentiate(&self, var: &Variable) -> Result<Entity, Error> {
        self.differentiate_with(var, &Ctxt::default())
    }

    /// Differentiates the expression with respect to `var`, and simplifies the result within
    /// the given context.
    pub fn differentiate_with(&self, var: &Variable, ctxt: &Ctxt) -> Result<Entity, Error> {
        Simplifier::new(ctxt).simplify(&self.derivative(var)?)
    }

    /// Returns the derivative with respect to `var`, built from the differentiation rules without
    /// any simplification.
    ///
    /// The derivative of the undefined sentinel is undefined. Fails with [`NotSupported`] for the
    /// factorial, and for boolean and set expressions.
    pub fn derivative(&self, var: &Variable) -> Result<Entity, Error> {
        match self.node() {
            Node::Number(n) if n.is_undefined() => Ok(self.clone()),
            Node::Number(_) => Ok(Entity::from(0)),
            Node::Variable(variable) => Ok(Entity::from(i64::from(variable == var))),
            Node::Op(op, operands) => derive_op(*op, operands, var),
            Node::Boolean(_) | Node::FiniteSet(_) | Node::Pieces(_) => Err(not_numeric()),
        }
    }
}

fn not_numeric() -> Error {
    NotSupported { feature: "the derivative of a non-numeric expression" }.into()
}

/// Returns true if `var` appears in the expression.
fn depends_on(expr: &Entity, var: &Variable) -> bool {
    expr.free_symbols().contains(var)
}

fn call(op: Op, operand: &Entity) -> Entity {
    Entity::unary(op, operand.clone())
}

/// `(1 - a^2)^(1/2)`
fn sqrt_one_minus_square(a: &Entity) -> Result<Entity, Error> {
    let half = Entity::number(Number::rational(1, 2)?);
    Ok((Entity::from(1) - a.pow(2)).pow(half))
}

fn derive_op(op: Op, operands: &[Entity], var: &Variable) -> Result<Entity, Error> {
    if !matches!(op.kind(), OpKind::Arithmetic | OpKind::Function) {
        return Err(not_numeric());
    }

    let d = |expr: &Entity| expr.derivative(var);
    let derivative = match (op, operands) {
        (Op::Sum, [a, b]) => d(a)? + d(b)?,
        (Op::Minus, [a, b]) => d(a)? - d(b)?,
        (Op::Neg, [a]) => -d(a)?,

        // (ab)' = a'b + ab'
        (Op::Mul, [a, b]) => d(a)? * b + a * d(b)?,

        // (a/b)' = (a'b - ab') / b^2
        (Op::Div, [a, b]) => (d(a)? * b - a * d(b)?) / b.pow(2),

        // (a^c)' = c * a^(c-1) * a'
        (Op::Pow, [base, exp]) if !depends_on(exp, var) => {
            exp * base.pow(exp - Entity::from(1)) * d(base)?
        },

        // (c^b)' = c^b * ln(c) * b'
        (Op::Pow, [base, exp]) if !depends_on(base, var) => {
            base.pow(exp) * call(Op::Ln, base) * d(exp)?
        },

        // (a^b)' = a^b * (a' * b / a + ln(a) * b')
        (Op::Pow, [base, exp]) => {
            base.pow(exp) * (d(base)? * exp / base + call(Op::Ln, base) * d(exp)?)
        },

        (Op::Sin, [a]) => call(Op::Cos, a) * d(a)?,
        (Op::Cos, [a]) => -call(Op::Sin, a) * d(a)?,
        (Op::Tan, [a]) => d(a)? / call(Op::Cos, a).pow(2),
        (Op::Cot, [a]) => -d(a)? / call(Op::Sin, a).pow(2),
        (Op::Arcsin, [a]) => d(a)? / sqrt_one_minus_square(a)?,
        (Op::Arccos, [a]) => -d(a)? / sqrt_one_minus_square(a)?,
        (Op::Arctan, [a]) => d(a)? / (Entity::from(1) + a.pow(2)),
        (Op::Arccot, [a]) => -d(a)? / (Entity::from(1) + a.pow(2)),
        (Op::Ln, [a]) => d(a)? / a,

        // log(b, a) = ln(a) / ln(b)
        (Op::Log, [base, a]) => {
            let (ln_a, ln_b) = (call(Op::Ln, a), call(Op::Ln, base));
            (d(a)? / a * &ln_b - ln_a * (d(base)? / base)) / ln_b.pow(2)
        },

        (Op::Abs, [a]) => call(Op::Signum, a) * d(a)?,

        // zero away from the jump at the origin
        (Op::Signum, [_]) => Entity::from(0),

        (Op::Factorial, _) => {
            return Err(NotSupported { feature: "the derivative of the factorial" }.into());
        },
        _ => return Err(not_numeric()),
    };
    Ok(derivative)
}
