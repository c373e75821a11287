//! Numeric evaluation of expression trees.

use crate::error::CannotEvaluate;
use crate::simplify::fold::{fold, Mode};
use sym_error::Error;
use super::{Entity, Node};

impl Entity {
    /// Evaluates this expression numerically.
    ///
    /// Every node is folded to a literal, approximating the named constants, irrational powers and
    /// transcendental functions with [`PRECISION`](crate::primitive::PRECISION)-bit floats.
    /// Undefined arithmetic evaluates to the undefined sentinel.
    ///
    /// Fails with [`CannotEvaluate`] if the expression contains a free variable. The result is
    /// stored in the node, so evaluating the same tree again is free.
    pub fn evaluate(&self) -> Result<Entity, Error> {
        if let Some(value) = self.0.evaluated.get() {
            return Ok(value.clone());
        }

        let value = match self.node() {
            Node::Number(_) | Node::Boolean(_) => return Ok(self.clone()),
            Node::Variable(variable) if !variable.constant => {
                return Err(CannotEvaluate { variable: variable.name.clone() }.into());
            },
            _ => fold(&self.try_map_children(Entity::evaluate)?, Mode::Approximate)?,
        };

        // a node must not hold a reference to itself
        if value.ptr_eq(self) {
            return Ok(value);
        }
        Ok(self.0.evaluated.get_or_init(|| value).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Op;
    use crate::numeric::Number;
    use crate::set::{Edge, Piece};
    use pretty_assertions::assert_eq;

    fn approx(entity: &Entity) -> f64 {
        entity.as_number().unwrap().to_float().to_f64()
    }

    #[test]
    fn approximates_constants() {
        let expr = &Entity::from(2) * &Entity::pi();
        let value = expr.evaluate().unwrap();
        assert!((approx(&value) - std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn approximates_functions() {
        let expr = &Entity::unary(Op::Sin, Entity::from(1)) + &Entity::unary(Op::Ln, Entity::e());
        let value = expr.evaluate().unwrap();
        assert!((approx(&value) - (1f64.sin() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn exact_results_stay_exact() {
        let expr = &Entity::from(1) / &Entity::from(4) + &Entity::from(2).pow(3);
        let value = expr.evaluate().unwrap();
        assert_eq!(value.as_number(), Some(&Number::rational(33, 4).unwrap()));
    }

    #[test]
    fn free_variable_fails() {
        let expr = &Entity::var("x") + &Entity::pi();
        let err = expr.evaluate().unwrap_err();
        assert_eq!(
            err.downcast_ref::<CannotEvaluate>(),
            Some(&CannotEvaluate { variable: "x".to_string() }),
        );
    }

    #[test]
    fn is_memoized() {
        let expr = &Entity::pi() + &Entity::e();
        let first = expr.evaluate().unwrap();
        let second = expr.evaluate().unwrap();
        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn literals_evaluate_to_themselves() {
        let n = Entity::from(7);
        assert!(n.evaluate().unwrap().ptr_eq(&n));

        let set = Entity::finite_set([Entity::from(1), Entity::from(2)]);
        assert!(set.evaluate().unwrap().ptr_eq(&set));
    }

    #[test]
    fn evaluates_set_bounds() {
        let interval = Entity::pieces(vec![Piece::interval(Edge::closed(0), Edge::open(Entity::pi()))]);
        let member = Entity::binary(Op::In, Entity::from(3), interval);
        assert_eq!(member.evaluate().unwrap(), Entity::boolean(true));
    }
}
