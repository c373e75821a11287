//! The symbolic expression tree.
//!
//! An [`Entity`] is an immutable, reference-counted node. Cloning an entity is cheap, and every
//! transformation ([`Entity::substitute`], [`simplify`](crate::simplify()), ...) returns a new tree
//! that shares the subtrees it did not change with the original.
//!
//! Entities compare structurally: two entities are equal if they have the same kind of node and
//! equal children, in order. Commutative operations are *not* equal up to reordering; the
//! simplifier sorts their operands into canonical order instead (see [`order`]).

mod derive;
mod evaluate;
mod fmt;
pub mod iter;
mod op;
mod ops;
pub mod order;

use crate::consts;
use crate::error::{UnknownConstant, UnknownFunction, WrongArity};
use crate::numeric::Number;
use crate::set::Piece;
use once_cell::sync::OnceCell;
use std::{collections::BTreeSet, convert::Infallible, hash::{Hash, Hasher}, sync::Arc};
use sym_error::Error;

pub use iter::Nodes;
pub use op::{FUNCTIONS, Op, OpKind};

/// A named variable, or one of the named constants `pi` and `e`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    /// The name of the variable.
    pub name: String,

    /// Whether the name refers to a known constant with a numeric value.
    pub constant: bool,
}

impl Variable {
    /// Creates a free variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), constant: false }
    }

    /// Creates a reference to a known constant.
    pub fn constant(name: &str) -> Result<Self, Error> {
        if consts::value_of(name).is_none() {
            return Err(UnknownConstant {
                name: name.to_string(),
                suggestions: consts::similar_names(name),
            }.into());
        }
        Ok(Self { name: name.to_string(), constant: true })
    }

    /// Returns the numeric value of a constant, or `None` for a free variable.
    pub fn value(&self) -> Option<Number> {
        if !self.constant {
            return None;
        }
        consts::value_of(&self.name).map(|value| Number::Real(value.clone()))
    }
}

/// The contents of an [`Entity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A numeric literal.
    Number(Number),

    /// A variable or constant.
    Variable(Variable),

    /// `true` or `false`.
    Boolean(bool),

    /// An operator or function applied to its operands.
    Op(Op, Vec<Entity>),

    /// A finite set of elements, sorted in canonical order without duplicates.
    FiniteSet(Vec<Entity>),

    /// A union of [`Piece`]s: intervals of the real line or rectangles of the complex plane.
    Pieces(Vec<Piece>),
}

struct Inner {
    node: Node,

    /// The memoized result of [`Entity::evaluate`].
    evaluated: OnceCell<Entity>,
}

/// An immutable node of an expression tree.
#[derive(Clone)]
pub struct Entity(Arc<Inner>);

impl Entity {
    /// Wraps a node without checking it. The node must already satisfy the invariants of its
    /// variant (operator arity, sorted finite sets).
    pub(crate) fn from_node(node: Node) -> Self {
        Self(Arc::new(Inner { node, evaluated: OnceCell::new() }))
    }

    /// Creates a numeric literal.
    pub fn number(n: Number) -> Self {
        Self::from_node(Node::Number(n.normalize()))
    }

    /// Creates a free variable.
    pub fn var(name: impl Into<String>) -> Self {
        Self::from_node(Node::Variable(Variable::new(name)))
    }

    /// Creates a reference to the named constant `pi` or `e`.
    pub fn constant(name: &str) -> Result<Self, Error> {
        Ok(Self::from_node(Node::Variable(Variable::constant(name)?)))
    }

    /// The constant `pi`.
    pub fn pi() -> Self {
        Self::from_node(Node::Variable(Variable { name: "pi".to_string(), constant: true }))
    }

    /// The constant `e`.
    pub fn e() -> Self {
        Self::from_node(Node::Variable(Variable { name: "e".to_string(), constant: true }))
    }

    /// Creates a boolean literal.
    pub fn boolean(value: bool) -> Self {
        Self::from_node(Node::Boolean(value))
    }

    /// The undefined sentinel.
    pub fn undefined() -> Self {
        Self::number(Number::undefined())
    }

    /// The empty set.
    pub fn empty_set() -> Self {
        Self::from_node(Node::FiniteSet(Vec::new()))
    }

    /// Applies an operator to the given operands.
    ///
    /// Fails with [`WrongArity`] if the number of operands doesn't match the operator.
    pub fn op(op: Op, children: Vec<Entity>) -> Result<Self, Error> {
        if children.len() != op.arity() {
            return Err(WrongArity {
                name: op.name(),
                expected: op.arity(),
                given: children.len(),
            }.into());
        }
        Ok(Self::from_node(Node::Op(op, children)))
    }

    /// Applies a unary operator.
    pub fn unary(op: Op, child: Entity) -> Self {
        debug_assert_eq!(op.arity(), 1);
        Self::from_node(Node::Op(op, vec![child]))
    }

    /// Applies a binary operator.
    pub fn binary(op: Op, lhs: Entity, rhs: Entity) -> Self {
        debug_assert_eq!(op.arity(), 2);
        Self::from_node(Node::Op(op, vec![lhs, rhs]))
    }

    /// Calls a function by name, such as `sin` or `log`.
    ///
    /// Fails with [`UnknownFunction`] if there is no such function, suggesting similarly named
    /// functions, or with [`WrongArity`].
    pub fn call(name: &str, args: Vec<Entity>) -> Result<Self, Error> {
        let op = Op::function(name).ok_or_else(|| UnknownFunction {
            name: name.to_string(),
            suggestions: Op::similar_functions(name),
        })?;
        Self::op(op, args)
    }

    /// Creates a finite set. Duplicate elements are removed.
    pub fn finite_set(elements: impl IntoIterator<Item = Entity>) -> Self {
        let mut elements = elements.into_iter().collect::<Vec<_>>();
        elements.sort_by(order::canonical_cmp);
        elements.dedup();
        Self::from_node(Node::FiniteSet(elements))
    }

    /// Creates a union of pieces. An empty list of pieces is the empty set.
    pub fn pieces(pieces: Vec<Piece>) -> Self {
        if pieces.is_empty() {
            return Self::empty_set();
        }
        Self::from_node(Node::Pieces(pieces))
    }

    /// Raises `self` to the given power.
    pub fn pow(&self, exp: impl Into<Entity>) -> Self {
        Self::binary(Op::Pow, self.clone(), exp.into())
    }

    /// Returns the node of this entity.
    pub fn node(&self) -> &Node {
        &self.0.node
    }

    /// Returns the number, if this entity is a numeric literal.
    pub fn as_number(&self) -> Option<&Number> {
        match self.node() {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value, if this entity is a boolean literal.
    pub fn as_boolean(&self) -> Option<bool> {
        match self.node() {
            Node::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the variable, if this entity is a variable or constant.
    pub fn as_variable(&self) -> Option<&Variable> {
        match self.node() {
            Node::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the operator and operands, if this entity is an operator node.
    pub fn as_op(&self) -> Option<(Op, &[Entity])> {
        match self.node() {
            Node::Op(op, children) => Some((*op, children)),
            _ => None,
        }
    }

    /// Returns the operator, if this entity is an operator node.
    pub fn op_kind(&self) -> Option<Op> {
        self.as_op().map(|(op, _)| op)
    }

    /// Returns true if this entity is a numeric literal equal to zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().map(Number::is_zero).unwrap_or(false)
    }

    /// Returns true if this entity is a numeric literal equal to one.
    pub fn is_one(&self) -> bool {
        self.as_number().map(Number::is_one).unwrap_or(false)
    }

    /// Returns true if this entity is the undefined sentinel.
    pub fn is_undefined(&self) -> bool {
        self.as_number().map(Number::is_undefined).unwrap_or(false)
    }

    /// Returns true if this entity is a set literal ([`Node::FiniteSet`] or [`Node::Pieces`]).
    pub fn is_set(&self) -> bool {
        matches!(self.node(), Node::FiniteSet(_) | Node::Pieces(_))
    }

    /// Returns true if this entity is the empty set.
    pub fn is_empty_set(&self) -> bool {
        matches!(self.node(), Node::FiniteSet(elements) if elements.is_empty())
    }

    /// Returns true if both entities are the same allocation.
    pub fn ptr_eq(&self, other: &Entity) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns an iterator over the direct children of this entity. The children of a set of
    /// pieces are the values of the pieces' edges.
    pub fn children(&self) -> Box<dyn Iterator<Item = &Entity> + '_> {
        match self.node() {
            Node::Op(_, children) | Node::FiniteSet(children) => Box::new(children.iter()),
            Node::Pieces(pieces) => Box::new(pieces.iter().flat_map(|piece| piece.bounds())),
            Node::Number(_) | Node::Variable(_) | Node::Boolean(_) => Box::new(std::iter::empty()),
        }
    }

    /// Returns an iterator over every subtree of this entity, in depth-first pre-order, starting
    /// with the entity itself.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(self)
    }

    /// Returns true if the given entity appears anywhere in this tree.
    pub fn contains_node(&self, target: &Entity) -> bool {
        self.nodes().any(|node| node == target)
    }

    /// Returns the variables and constants appearing in this tree.
    pub fn free_symbols(&self) -> BTreeSet<Variable> {
        self.nodes()
            .filter_map(Entity::as_variable)
            .cloned()
            .collect()
    }

    /// Rebuilds this entity with each child replaced by the result of `f`.
    ///
    /// If every child comes back unchanged (the same allocation), this entity itself is returned,
    /// so untouched subtrees stay shared.
    pub fn try_map_children<E>(
        &self,
        mut f: impl FnMut(&Entity) -> Result<Entity, E>,
    ) -> Result<Entity, E> {
        match self.node() {
            Node::Number(_) | Node::Variable(_) | Node::Boolean(_) => Ok(self.clone()),
            Node::Op(op, children) => {
                let mapped = map_all(children, &mut f)?;
                Ok(mapped.map(|children| Self::from_node(Node::Op(*op, children)))
                    .unwrap_or_else(|| self.clone()))
            },
            Node::FiniteSet(elements) => {
                let mapped = map_all(elements, &mut f)?;
                Ok(mapped.map(Self::finite_set).unwrap_or_else(|| self.clone()))
            },
            Node::Pieces(pieces) => {
                let mut changed = false;
                let mut new_pieces = Vec::with_capacity(pieces.len());
                for piece in pieces {
                    let new_piece = piece.try_map_bounds(|bound| {
                        let mapped = f(bound)?;
                        changed |= !mapped.ptr_eq(bound);
                        Ok(mapped)
                    })?;
                    new_pieces.push(new_piece);
                }
                Ok(if changed { Self::pieces(new_pieces) } else { self.clone() })
            },
        }
    }

    /// Rebuilds this entity with each child replaced by the result of `f`.
    pub fn map_children(&self, mut f: impl FnMut(&Entity) -> Entity) -> Entity {
        match self.try_map_children(|child| Ok::<_, Infallible>(f(child))) {
            Ok(entity) => entity,
            Err(never) => match never {},
        }
    }

    /// Replaces every occurrence of `from` in this tree with `to`.
    ///
    /// Occurrences are replaced outermost first, and the replacement is not searched again, so
    /// substituting `x` with `x + 1` terminates. No capture avoidance is performed.
    pub fn substitute(&self, from: &Entity, to: &Entity) -> Entity {
        if self == from {
            return to.clone();
        }
        self.map_children(|child| child.substitute(from, to))
    }
}

/// Maps every entity in the slice, returning `None` if all of them came back unchanged.
fn map_all<E>(
    entities: &[Entity],
    f: &mut impl FnMut(&Entity) -> Result<Entity, E>,
) -> Result<Option<Vec<Entity>>, E> {
    let mut changed = false;
    let mut mapped = Vec::with_capacity(entities.len());
    for entity in entities {
        let new = f(entity)?;
        changed |= !new.ptr_eq(entity);
        mapped.push(new);
    }
    Ok(changed.then_some(mapped))
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.node() == other.node()
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node().hash(state);
    }
}

impl From<Number> for Entity {
    fn from(n: Number) -> Self {
        Self::number(n)
    }
}

impl From<i64> for Entity {
    fn from(n: i64) -> Self {
        Self::number(Number::from(n))
    }
}

impl From<i32> for Entity {
    fn from(n: i32) -> Self {
        Self::number(Number::from(n))
    }
}

impl From<f64> for Entity {
    fn from(f: f64) -> Self {
        Self::number(Number::from(f))
    }
}

impl From<bool> for Entity {
    fn from(b: bool) -> Self {
        Self::boolean(b)
    }
}

impl From<&Entity> for Entity {
    fn from(e: &Entity) -> Self {
        e.clone()
    }
}
