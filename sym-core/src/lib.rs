//! A small computer-algebra core.
//!
//! This crate provides an immutable symbolic expression tree ([`Entity`]) over an arbitrary
//! precision numeric tower ([`Number`]), a term-rewriting simplifier driven by a declarative
//! pattern matcher, symbolic differentiation, and an algebra of continuous sets built from axis-aligned [`Piece`]s.
//!
//! ```
//! use sym_core::{Ctxt, Entity};
//!
//! let x = Entity::var("x");
//! let expr = &x + &Entity::from(0) + Entity::from(2) * Entity::from(3);
//! let simplified = expr.simplify(&Ctxt::default()).unwrap();
//! assert_eq!(simplified, &Entity::from(6) + &x);
//! ```
//!
//! Every operation that can fail returns a [`sym_error::Error`], whose
//! [`Category`](sym_error::Category) tells the caller whether it was bad input, an unsupported
//! request, an exhausted quota, or a cancellation.

pub mod consts;
pub mod ctxt;
pub mod entity;
pub mod error;
pub mod numeric;
pub mod pattern;
pub mod primitive;
pub mod set;
pub mod simplify;
pub mod step_collector;

pub use ctxt::{CancellationToken, Ctxt};
pub use entity::{Entity, Node, Op, Variable};
pub use numeric::Number;
pub use set::{Edge, Piece, Span};
pub use simplify::{expand, simplify, simplify_with, simplify_with_steps, Step};
pub use step_collector::StepCollector;
pub use sym_error::{Category, Error};
