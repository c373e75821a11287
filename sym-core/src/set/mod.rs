//! Sets of real and complex numbers.
//!
//! A continuous set is a union of [`Piece`]s: intervals of the real line, and axis-aligned
//! rectangles of the complex plane. Each piece is bounded by two [`Edge`]s per axis, which can be
//! open or closed, and whose values are [`Entity`](crate::Entity)s so that a piece can have
//! symbolic bounds.
//!
//! The piece operations ([`invert`], [`intersect`], [`unite`]) only work on *concrete* pieces,
//! whose bounds are all real numbers. The set operations ([`union`], [`intersection`],
//! [`set_minus`], [`contains`]) work on whole set entities, and keep whatever they cannot resolve
//! as a symbolic expression.

mod combine;
mod intersect;
mod invert;
mod piece;
mod unite;

pub use combine::{contains, intersection, set_minus, union};
pub use intersect::intersect;
pub use invert::invert;
pub use piece::{Edge, Piece, Span};
pub use unite::{unite, unite_all};
