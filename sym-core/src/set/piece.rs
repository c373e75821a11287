//! Intervals of the real line and rectangles of the complex plane.

use crate::entity::Entity;
use crate::error::SymbolicBound;
use crate::numeric::Number;
use std::{cmp::Ordering, fmt::{self, Display, Formatter}};
use sym_error::Error;

/// One end of a [`Span`].
///
/// An edge at positive or negative infinity is always open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The value at which the span ends.
    pub value: Entity,

    /// Whether the value itself belongs to the span.
    pub closed: bool,
}

impl Edge {
    /// Creates a new edge. The edge is forced open if the value is infinite.
    pub fn new(value: Entity, closed: bool) -> Self {
        let infinite = value.as_number().map(Number::is_infinite).unwrap_or(false);
        Self { value, closed: closed && !infinite }
    }

    /// Creates an edge that includes its value.
    pub fn closed(value: impl Into<Entity>) -> Self {
        Self::new(value.into(), true)
    }

    /// Creates an edge that excludes its value.
    pub fn open(value: impl Into<Entity>) -> Self {
        Self::new(value.into(), false)
    }

    /// The edge at negative infinity.
    pub fn neg_infinity() -> Self {
        Self::open(Number::neg_infinity())
    }

    /// The edge at positive infinity.
    pub fn infinity() -> Self {
        Self::open(Number::infinity())
    }

    /// Returns true if the edge value is a real number (possibly infinite).
    pub fn is_concrete(&self) -> bool {
        self.value
            .as_number()
            .map(|n| n.is_real() && !n.is_undefined())
            .unwrap_or(false)
    }

    /// Returns true if the edge value is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.value.as_number().map(Number::is_infinite).unwrap_or(false)
    }

    /// Returns the value of a concrete edge.
    ///
    /// Fails with [`SymbolicBound`] if the value is not a real number.
    pub(crate) fn number(&self) -> Result<&Number, Error> {
        match self.value.as_number() {
            Some(n) if n.is_real() && !n.is_undefined() => Ok(n),
            _ => Err(SymbolicBound { bound: self.value.to_string() }.into()),
        }
    }
}

/// The extent of a [`Piece`] along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub lower: Edge,
    pub upper: Edge,
}

impl Span {
    pub fn new(lower: Edge, upper: Edge) -> Self {
        Self { lower, upper }
    }

    /// The whole axis, `(-∞, +∞)`.
    pub fn all() -> Self {
        Self::new(Edge::neg_infinity(), Edge::infinity())
    }

    /// The span containing exactly one value, `[v, v]`.
    pub fn point(value: impl Into<Entity>) -> Self {
        let value = value.into();
        Self::new(Edge::closed(value.clone()), Edge::closed(value))
    }

    /// Returns true if both edges are concrete.
    pub fn is_concrete(&self) -> bool {
        self.lower.is_concrete() && self.upper.is_concrete()
    }

    /// Returns true if the span contains no value.
    pub fn is_empty(&self) -> Result<bool, Error> {
        let (lower, upper) = (self.lower.number()?, self.upper.number()?);
        Ok(match lower.try_cmp(upper)? {
            Ordering::Greater => true,
            Ordering::Equal => !self.lower.closed || !self.upper.closed,
            Ordering::Less => false,
        })
    }

    /// Returns the single value in the span, if the span is a single point.
    pub fn as_point(&self) -> Option<&Number> {
        let (lower, upper) = (self.lower.number().ok()?, self.upper.number().ok()?);
        (self.lower.closed && self.upper.closed && lower == upper).then_some(lower)
    }

    /// Returns true if the span contains the given real number.
    pub fn contains(&self, n: &Number) -> Result<bool, Error> {
        let (lower, upper) = (self.lower.number()?, self.upper.number()?);
        let above = match n.try_cmp(lower)? {
            Ordering::Greater => true,
            Ordering::Equal => self.lower.closed,
            Ordering::Less => false,
        };
        let below = match n.try_cmp(upper)? {
            Ordering::Less => true,
            Ordering::Equal => self.upper.closed,
            Ordering::Greater => false,
        };
        Ok(above && below)
    }

    fn try_map<E>(&self, f: &mut impl FnMut(&Entity) -> Result<Entity, E>) -> Result<Span, E> {
        Ok(Span::new(
            Edge::new(f(&self.lower.value)?, self.lower.closed),
            Edge::new(f(&self.upper.value)?, self.upper.closed),
        ))
    }
}

/// A single convex, axis-aligned region: an interval of the real line, or a rectangle of the
/// complex plane.
///
/// A piece is *concrete* if every edge is a real number, and *symbolic* otherwise. Only concrete
/// pieces can be inverted, intersected, and united; symbolic pieces are carried along unchanged
/// by the set-level operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The extent along the real axis.
    pub re: Span,

    /// The extent along the imaginary axis, or `None` for an interval of the real line.
    pub im: Option<Span>,
}

impl Piece {
    /// Creates an interval of the real line.
    pub fn interval(lower: Edge, upper: Edge) -> Self {
        Self { re: Span::new(lower, upper), im: None }
    }

    /// Creates a rectangle of the complex plane.
    pub fn rectangle(re: Span, im: Span) -> Self {
        Self { re, im: Some(im) }
    }

    /// The piece containing exactly the given value.
    pub fn point(value: impl Into<Entity>) -> Self {
        let value = value.into();
        match value.as_number() {
            Some(Number::Complex(re, im)) => {
                Self::rectangle(Span::point((**re).clone()), Span::point((**im).clone()))
            },
            _ => Self { re: Span::point(value), im: None },
        }
    }

    /// The whole real line.
    pub fn real_line() -> Self {
        Self { re: Span::all(), im: None }
    }

    /// The whole complex plane.
    pub fn complex_plane() -> Self {
        Self::rectangle(Span::all(), Span::all())
    }

    /// Returns true if this piece is an interval of the real line.
    pub fn is_real(&self) -> bool {
        self.im.is_none()
    }

    /// Returns true if every edge of this piece is a real number.
    pub fn is_concrete(&self) -> bool {
        self.re.is_concrete() && self.im.as_ref().map(Span::is_concrete).unwrap_or(true)
    }

    /// Returns true if the piece contains no value.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.re.is_empty()? || match &self.im {
            Some(im) => im.is_empty()?,
            None => false,
        })
    }

    /// Returns the single value in the piece, if the piece is a single point.
    pub fn as_point(&self) -> Option<Number> {
        let re = self.re.as_point()?;
        match &self.im {
            Some(im) => Some(Number::complex(re.clone(), im.as_point()?.clone())),
            None => Some(re.clone()),
        }
    }

    /// Returns true if the piece contains the given number.
    pub fn contains(&self, n: &Number) -> Result<bool, Error> {
        let (re, im) = n.parts();
        match &self.im {
            Some(span) => Ok(self.re.contains(&re)? && span.contains(&im)?),
            None => Ok(n.is_real() && self.re.contains(&re)?),
        }
    }

    /// Returns the same region as a piece of the complex plane. A real interval becomes a
    /// rectangle of zero height on the real axis.
    pub fn to_complex(&self) -> Piece {
        match &self.im {
            Some(_) => self.clone(),
            None => Self::rectangle(self.re.clone(), Span::point(0)),
        }
    }

    /// Returns an iterator over the values of the edges of this piece.
    pub fn bounds(&self) -> impl Iterator<Item = &Entity> {
        [&self.re.lower, &self.re.upper]
            .into_iter()
            .chain(self.im.iter().flat_map(|im| [&im.lower, &im.upper]))
            .map(|edge| &edge.value)
    }

    /// Rebuilds this piece with each edge value replaced by the result of `f`.
    pub fn try_map_bounds<E>(
        &self,
        mut f: impl FnMut(&Entity) -> Result<Entity, E>,
    ) -> Result<Piece, E> {
        let re = self.re.try_map(&mut f)?;
        let im = match &self.im {
            Some(im) => Some(im.try_map(&mut f)?),
            None => None,
        };
        Ok(Piece { re, im })
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(point) = self.as_point() {
            return write!(f, "{{{}}}", point);
        }
        write!(
            f,
            "{}{}, {}{}",
            if self.lower.closed { "[" } else { "(" },
            self.lower.value,
            self.upper.value,
            if self.upper.closed { "]" } else { ")" },
        )
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.im {
            Some(im) => write!(f, "{} + {}i", self.re, im),
            None => write!(f, "{}", self.re),
        }
    }
}
