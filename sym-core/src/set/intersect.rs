//! The intersection of two pieces.

use crate::numeric::Number;
use std::cmp::Ordering;
use sym_error::Error;
use super::piece::{Edge, Piece, Span};

/// Returns the tighter of two lower edges. At equal values, the edge is closed only if both are.
fn max_lower(a: &Edge, b: &Edge) -> Result<Edge, Error> {
    Ok(match a.number()?.try_cmp(b.number()?)? {
        Ordering::Greater => a.clone(),
        Ordering::Less => b.clone(),
        Ordering::Equal => Edge::new(a.value.clone(), a.closed && b.closed),
    })
}

/// Returns the tighter of two upper edges. At equal values, the edge is closed only if both are.
fn min_upper(a: &Edge, b: &Edge) -> Result<Edge, Error> {
    Ok(match a.number()?.try_cmp(b.number()?)? {
        Ordering::Less => a.clone(),
        Ordering::Greater => b.clone(),
        Ordering::Equal => Edge::new(a.value.clone(), a.closed && b.closed),
    })
}

/// Intersects two spans along the same axis, returning `None` if they don't overlap.
pub(crate) fn intersect_spans(a: &Span, b: &Span) -> Result<Option<Span>, Error> {
    let span = Span::new(max_lower(&a.lower, &b.lower)?, min_upper(&a.upper, &b.upper)?);
    Ok((!span.is_empty()?).then_some(span))
}

/// Returns the intersection of two concrete pieces, or `None` if they don't overlap.
///
/// Along each axis, the intersection takes the larger of the two lower edges and the smaller of
/// the two upper edges. When a real interval meets a rectangle, the result is a real interval,
/// provided the rectangle reaches the real axis.
///
/// Fails with [`SymbolicBound`](crate::error::SymbolicBound) if either piece is not concrete.
///
/// ```
/// use sym_core::{Edge, Piece, set::intersect};
///
/// let a = Piece::interval(Edge::closed(0), Edge::open(10));
/// let b = Piece::interval(Edge::open(5), Edge::closed(15));
/// let result = intersect(&a, &b).unwrap();
/// assert_eq!(result, Some(Piece::interval(Edge::open(5), Edge::open(10))));
/// ```
pub fn intersect(p: &Piece, q: &Piece) -> Result<Option<Piece>, Error> {
    let Some(re) = intersect_spans(&p.re, &q.re)? else {
        return Ok(None);
    };

    match (&p.im, &q.im) {
        (None, None) => Ok(Some(Piece { re, im: None })),
        (Some(a), Some(b)) => Ok(intersect_spans(a, b)?.map(|im| Piece::rectangle(re, im))),
        (Some(im), None) | (None, Some(im)) => {
            if im.contains(&Number::int(0))? {
                Ok(Some(Piece { re, im: None }))
            } else {
                Ok(None)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tighter_edges_win() {
        let a = Piece::interval(Edge::closed(0), Edge::open(10));
        let b = Piece::interval(Edge::open(5), Edge::closed(15));
        assert_eq!(
            intersect(&a, &b).unwrap(),
            Some(Piece::interval(Edge::open(5), Edge::open(10))),
        );
    }

    #[test]
    fn equal_edges_close_only_if_both_close() {
        let a = Piece::interval(Edge::closed(0), Edge::closed(3));
        let b = Piece::interval(Edge::open(0), Edge::closed(3));
        assert_eq!(
            intersect(&a, &b).unwrap(),
            Some(Piece::interval(Edge::open(0), Edge::closed(3))),
        );
    }

    #[test]
    fn touching_at_an_open_edge_is_empty() {
        let a = Piece::interval(Edge::closed(0), Edge::open(1));
        let b = Piece::interval(Edge::closed(1), Edge::closed(2));
        assert_eq!(intersect(&a, &b).unwrap(), None);
    }

    #[test]
    fn touching_at_closed_edges_is_a_point() {
        let a = Piece::interval(Edge::closed(0), Edge::closed(1));
        let b = Piece::interval(Edge::closed(1), Edge::closed(2));
        assert_eq!(intersect(&a, &b).unwrap(), Some(Piece::point(1)));
    }

    #[test]
    fn disjoint() {
        let a = Piece::interval(Edge::closed(0), Edge::closed(1));
        let b = Piece::interval(Edge::closed(2), Edge::closed(3));
        assert_eq!(intersect(&a, &b).unwrap(), None);
    }

    #[test]
    fn rectangles() {
        let a = Piece::rectangle(
            Span::new(Edge::closed(0), Edge::closed(2)),
            Span::new(Edge::closed(0), Edge::closed(2)),
        );
        let b = Piece::rectangle(
            Span::new(Edge::open(1), Edge::closed(3)),
            Span::new(Edge::neg_infinity(), Edge::open(1)),
        );
        assert_eq!(intersect(&a, &b).unwrap(), Some(Piece::rectangle(
            Span::new(Edge::open(1), Edge::closed(2)),
            Span::new(Edge::closed(0), Edge::open(1)),
        )));
    }

    #[test]
    fn real_meets_complex() {
        let line = Piece::interval(Edge::closed(0), Edge::closed(5));
        let crossing = Piece::rectangle(
            Span::new(Edge::closed(1), Edge::closed(2)),
            Span::new(Edge::closed(-1), Edge::closed(1)),
        );
        let above = Piece::rectangle(
            Span::new(Edge::closed(1), Edge::closed(2)),
            Span::new(Edge::open(0), Edge::closed(1)),
        );

        assert_eq!(
            intersect(&line, &crossing).unwrap(),
            Some(Piece::interval(Edge::closed(1), Edge::closed(2))),
        );
        assert_eq!(intersect(&above, &line).unwrap(), None);
    }

    #[test]
    fn commutes() {
        let a = Piece::interval(Edge::open(-2), Edge::closed(4));
        let b = Piece::interval(Edge::closed(-2), Edge::open(4));
        assert_eq!(intersect(&a, &b).unwrap(), intersect(&b, &a).unwrap());
    }
}
