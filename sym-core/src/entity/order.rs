//! The canonical total order over expressions.
//!
//! This order has no mathematical meaning. It exists so that the operands of commutative
//! operators can be sorted into a unique arrangement, making `a + b` and `b + a` simplify to the
//! same tree. Expressions are ordered first by the kind of their node:
//!
//! `number < variable < boolean < operator node < finite set < pieces`
//!
//! then operator nodes by their [`Op`](super::Op), then by their number of children, and finally
//! by their children, from left to right. Numbers are ordered by value (complex numbers by real
//! part, then imaginary part), with the undefined sentinel before every other number.
//!
//! The order is consistent with structural equality: two entities compare as
//! [`Ordering::Equal`] exactly when they are equal.

use crate::numeric::Number;
use crate::set::{Edge, Piece, Span};
use std::cmp::Ordering;
use super::{Entity, Node};

fn kind_tag(node: &Node) -> u8 {
    match node {
        Node::Number(_) => 0,
        Node::Variable(_) => 1,
        Node::Boolean(_) => 2,
        Node::Op(..) => 3,
        Node::FiniteSet(_) => 4,
        Node::Pieces(_) => 5,
    }
}

/// Compares two non-complex numbers, placing the undefined sentinel first.
fn cmp_real(a: &Number, b: &Number) -> Ordering {
    match (a.is_undefined(), b.is_undefined()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.try_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Compares two numbers by value.
pub fn cmp_numbers(a: &Number, b: &Number) -> Ordering {
    let ((a_re, a_im), (b_re, b_im)) = (a.parts(), b.parts());
    cmp_real(&a_re, &b_re).then_with(|| cmp_real(&a_im, &b_im))
}

fn cmp_edges(a: &Edge, b: &Edge) -> Ordering {
    canonical_cmp(&a.value, &b.value).then(a.closed.cmp(&b.closed))
}

fn cmp_spans(a: &Span, b: &Span) -> Ordering {
    cmp_edges(&a.lower, &b.lower).then_with(|| cmp_edges(&a.upper, &b.upper))
}

pub(crate) fn cmp_pieces(a: &Piece, b: &Piece) -> Ordering {
    cmp_spans(&a.re, &b.re).then_with(|| match (&a.im, &b.im) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp_spans(a, b),
    })
}

/// Compares two slices element by element with the given comparison, shorter slices first.
fn cmp_slices<T>(a: &[T], b: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b)
            .map(|(a, b)| cmp(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Compares two entities in canonical order.
pub fn canonical_cmp(a: &Entity, b: &Entity) -> Ordering {
    if a.ptr_eq(b) {
        return Ordering::Equal;
    }

    match (a.node(), b.node()) {
        (Node::Number(a), Node::Number(b)) => cmp_numbers(a, b),
        (Node::Variable(a), Node::Variable(b)) => a.cmp(b),
        (Node::Boolean(a), Node::Boolean(b)) => a.cmp(b),
        (Node::Op(op_a, a), Node::Op(op_b, b)) => {
            op_a.cmp(op_b).then_with(|| cmp_slices(a, b, canonical_cmp))
        },
        (Node::FiniteSet(a), Node::FiniteSet(b)) => cmp_slices(a, b, canonical_cmp),
        (Node::Pieces(a), Node::Pieces(b)) => cmp_slices(a, b, cmp_pieces),
        (a, b) => kind_tag(a).cmp(&kind_tag(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Op;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    #[test]
    fn kinds() {
        let number = Entity::from(100);
        let var = Entity::var("a");
        let boolean = Entity::boolean(false);
        let op = Entity::unary(Op::Neg, Entity::from(0));
        let set = Entity::finite_set([Entity::from(1)]);

        let mut sorted = vec![set.clone(), op.clone(), boolean.clone(), var.clone(), number.clone()];
        sorted.sort_by(canonical_cmp);
        assert_eq!(sorted, vec![number, var, boolean, op, set]);
    }

    #[test]
    fn numbers_by_value() {
        let half = Entity::number(Number::rational(1, 2).unwrap());
        assert_eq!(canonical_cmp(&half, &Entity::from(1)), Ordering::Less);
        assert_eq!(canonical_cmp(&Entity::from(0.5), &half), Ordering::Equal);
        assert_eq!(canonical_cmp(&Entity::undefined(), &Entity::from(-1000)), Ordering::Less);
    }

    #[test]
    fn equal_only_when_structurally_equal() {
        let a = Entity::var("x") + Entity::from(1);
        let b = Entity::var("x") + Entity::from(1);
        let c = Entity::var("x") * Entity::from(1);
        assert_eq!(canonical_cmp(&a, &b), Ordering::Equal);
        assert!(canonical_cmp(&a, &c).is_ne());
    }

    #[test]
    fn sorting_is_independent_of_input_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let x = Entity::var("x");
        let items = vec![
            Entity::from(3),
            Entity::var("y"),
            x.pow(2),
            Entity::call("sin", vec![x.clone()]).unwrap(),
            &x * &Entity::from(2),
            Entity::boolean(true),
            x.clone(),
        ];

        let mut expected = items.clone();
        expected.sort_by(canonical_cmp);
        for _ in 0..20 {
            let mut shuffled = items.clone();
            shuffled.shuffle(&mut rng);
            shuffled.sort_by(canonical_cmp);
            assert_eq!(shuffled, expected);
        }
    }
}
