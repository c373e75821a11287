//! Depth-first traversal of an [`Entity`] tree.

use super::Entity;

/// An iterator over every subtree of an [`Entity`], in depth-first pre-order.
///
/// The iterator is lazy and borrows the tree, so it doesn't clone any nodes. Calling
/// [`Entity::nodes`] again starts a fresh traversal.
#[derive(Clone)]
pub struct Nodes<'a> {
    /// Subtrees still to visit. The next subtree to visit is at the top of the stack.
    stack: Vec<&'a Entity>,
}

impl<'a> Nodes<'a> {
    /// Creates a new iterator starting at the given entity.
    pub(crate) fn new(root: &'a Entity) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let entity = self.stack.pop()?;

        // push children in reverse so that the leftmost child is visited first
        let start = self.stack.len();
        self.stack.extend(entity.children());
        self.stack[start..].reverse();

        Some(entity)
    }
}

#[cfg(test)]
mod tests {
    use crate::entity::{Entity, Op};
    use crate::set::{Edge, Piece};
    use pretty_assertions::assert_eq;

    #[test]
    fn pre_order() {
        // (x + 1) * y
        let x = Entity::var("x");
        let one = Entity::from(1);
        let y = Entity::var("y");
        let sum = &x + &one;
        let expr = &sum * &y;

        let visited = expr.nodes().cloned().collect::<Vec<_>>();
        assert_eq!(visited, vec![expr.clone(), sum, x, one, y]);
    }

    #[test]
    fn restartable() {
        let expr = Entity::call("sin", vec![Entity::var("x")]).unwrap();
        assert_eq!(expr.nodes().count(), 2);
        assert_eq!(expr.nodes().count(), 2);
        assert_eq!(expr.nodes().next().and_then(Entity::op_kind), Some(Op::Sin));
    }

    #[test]
    fn piece_bounds_are_visited() {
        let piece = Piece::interval(Edge::closed(Entity::from(0)), Edge::open(Entity::var("a")));
        let set = Entity::pieces(vec![piece]);
        assert!(set.contains_node(&Entity::var("a")));
        assert_eq!(set.nodes().count(), 3);
    }
}
