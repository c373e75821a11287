//! The complement of a single piece.

use crate::numeric::Number;
use std::cmp::Ordering;
use sym_error::Error;
use super::piece::{Edge, Piece, Span};

/// Returns true if the edge value is the given infinity.
fn is_at(edge: &Edge, infinity: &Number) -> Result<bool, Error> {
    Ok(edge.number()?.try_cmp(infinity)? == Ordering::Equal)
}

/// The part of the axis below the lower edge of the span, open at that edge.
fn below(span: &Span) -> Result<Option<Span>, Error> {
    if is_at(&span.lower, &Number::neg_infinity())? {
        return Ok(None);
    }
    Ok(Some(Span::new(Edge::neg_infinity(), Edge::open(span.lower.value.clone()))))
}

/// The part of the axis above the upper edge of the span, open at that edge.
fn above(span: &Span) -> Result<Option<Span>, Error> {
    if is_at(&span.upper, &Number::infinity())? {
        return Ok(None);
    }
    Ok(Some(Span::new(Edge::open(span.upper.value.clone()), Edge::infinity())))
}

/// Returns the complement of a real interval within the real line.
fn invert_real(re: &Span) -> Result<Vec<Piece>, Error> {
    let mut pieces = Vec::with_capacity(4);

    // the wings are open where they touch the interval; an open edge of the interval is then
    // covered by a single closing point
    if let Some(left) = below(re)? {
        pieces.push(Piece { re: left, im: None });
    }
    if let Some(right) = above(re)? {
        pieces.push(Piece { re: right, im: None });
    }

    for edge in [&re.lower, &re.upper] {
        if !edge.closed && !edge.is_infinite() {
            let point = Piece::point(edge.value.clone());
            if !pieces.contains(&point) {
                pieces.push(point);
            }
        }
    }

    Ok(pieces)
}

/// Returns the complement of a rectangle within the complex plane.
fn invert_complex(re: &Span, im: &Span) -> Result<Vec<Piece>, Error> {
    let mut pieces = Vec::with_capacity(8);

    // the real extent of the rectangle, with every finite edge closed; the part of this strip
    // outside the rectangle's imaginary extent belongs to the lower and upper wings
    let strip = Span::new(
        Edge::new(re.lower.value.clone(), true),
        Edge::new(re.upper.value.clone(), true),
    );

    if let Some(left) = below(re)? {
        pieces.push(Piece::rectangle(left, Span::all()));
    }
    if let Some(right) = above(re)? {
        pieces.push(Piece::rectangle(right, Span::all()));
    }
    if let Some(low) = below(im)? {
        pieces.push(Piece::rectangle(strip.clone(), low));
    }
    if let Some(high) = above(im)? {
        pieces.push(Piece::rectangle(strip, high));
    }

    // an open vertical edge is covered by a segment spanning the whole imaginary extent,
    // including both corners
    let column = Span::new(
        Edge::new(im.lower.value.clone(), true),
        Edge::new(im.upper.value.clone(), true),
    );
    for edge in [&re.lower, &re.upper] {
        if !edge.closed && !edge.is_infinite() {
            let segment = Piece::rectangle(Span::point(edge.value.clone()), column.clone());
            if !pieces.contains(&segment) {
                pieces.push(segment);
            }
        }
    }

    // an open horizontal edge is covered by a segment with the rectangle's own real closure, so
    // that it never overlaps the vertical segments above
    for edge in [&im.lower, &im.upper] {
        if !edge.closed && !edge.is_infinite() {
            let segment = Piece::rectangle(re.clone(), Span::point(edge.value.clone()));
            if !segment.is_empty()? && !pieces.contains(&segment) {
                pieces.push(segment);
            }
        }
    }

    Ok(pieces)
}

/// Returns the complement of a concrete piece, as a list of pairwise disjoint pieces.
///
/// The complement is made of up to four unbounded *wings*: to the left and right of the piece
/// spanning every imaginary value, and below and above the piece spanning its real extent. Each
/// wing is open where it touches the piece. Every open, finite edge of the piece is then covered
/// by one *closing* piece. Together with the piece itself, the result partitions the real line
/// (for a real interval) or the complex plane (for a rectangle).
///
/// An empty piece inverts to the whole space.
///
/// Fails with [`SymbolicBound`](crate::error::SymbolicBound) if the piece is not concrete.
///
/// ```
/// use sym_core::{Edge, Piece, set::invert};
///
/// let pieces = invert(&Piece::interval(Edge::closed(0), Edge::open(5))).unwrap();
/// let formatted = pieces.iter().map(|p| p.to_string()).collect::<Vec<_>>();
/// assert_eq!(formatted, vec!["(-∞, 0)", "(5, ∞)", "{5}"]);
/// ```
pub fn invert(piece: &Piece) -> Result<Vec<Piece>, Error> {
    if piece.is_empty()? {
        return Ok(vec![if piece.is_real() { Piece::real_line() } else { Piece::complex_plane() }]);
    }

    match &piece.im {
        None => invert_real(&piece.re),
        Some(im) => invert_complex(&piece.re, im),
    }
}
