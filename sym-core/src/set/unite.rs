//! Merging pieces that share a boundary.

use std::cmp::Ordering;
use sym_error::Error;
use super::{
    intersect::intersect_spans,
    piece::{Edge, Piece, Span},
};

/// Compares the values of two concrete edges.
fn cmp_edges(a: &Edge, b: &Edge) -> Result<Ordering, Error> {
    a.number()?.try_cmp(b.number()?)
}

/// Returns true if two spans along the same axis overlap or touch, so that their union is a
/// single span.
fn connected(a: &Span, b: &Span) -> Result<bool, Error> {
    if intersect_spans(a, b)?.is_some() {
        return Ok(true);
    }

    // adjacent: one span ends exactly where the other begins, and the meeting point belongs to
    // at least one of them
    let touches = |upper: &Edge, lower: &Edge| -> Result<bool, Error> {
        Ok(cmp_edges(upper, lower)? == Ordering::Equal && (upper.closed || lower.closed))
    };
    Ok(touches(&a.upper, &b.lower)? || touches(&b.upper, &a.lower)?)
}

/// Returns the smallest span containing two connected spans.
fn hull(a: &Span, b: &Span) -> Result<Span, Error> {
    let lower = match cmp_edges(&a.lower, &b.lower)? {
        Ordering::Less => a.lower.clone(),
        Ordering::Greater => b.lower.clone(),
        Ordering::Equal => Edge::new(a.lower.value.clone(), a.lower.closed || b.lower.closed),
    };
    let upper = match cmp_edges(&a.upper, &b.upper)? {
        Ordering::Greater => a.upper.clone(),
        Ordering::Less => b.upper.clone(),
        Ordering::Equal => Edge::new(a.upper.value.clone(), a.upper.closed || b.upper.closed),
    };
    Ok(Span::new(lower, upper))
}

/// Returns true if two concrete spans have exactly the same edges.
fn same_extent(a: &Span, b: &Span) -> Result<bool, Error> {
    Ok(cmp_edges(&a.lower, &b.lower)? == Ordering::Equal
        && cmp_edges(&a.upper, &b.upper)? == Ordering::Equal
        && a.lower.closed == b.lower.closed
        && a.upper.closed == b.upper.closed)
}

/// Merges two concrete pieces into one if their union is itself a piece.
fn merge(p: &Piece, q: &Piece) -> Result<Option<Piece>, Error> {
    match (&p.im, &q.im) {
        (None, None) => {
            if connected(&p.re, &q.re)? {
                return Ok(Some(Piece { re: hull(&p.re, &q.re)?, im: None }));
            }
            Ok(None)
        },
        (Some(p_im), Some(q_im)) => {
            if same_extent(p_im, q_im)? && connected(&p.re, &q.re)? {
                return Ok(Some(Piece::rectangle(hull(&p.re, &q.re)?, p_im.clone())));
            }
            if same_extent(&p.re, &q.re)? && connected(p_im, q_im)? {
                return Ok(Some(Piece::rectangle(p.re.clone(), hull(p_im, q_im)?)));
            }
            Ok(None)
        },
        _ => Ok(None),
    }
}

/// Unites two concrete pieces.
///
/// The pieces are merged into one only if they overlap or are adjacent along exactly one axis,
/// with identical extents along the other. Otherwise both pieces are returned unchanged. Empty
/// pieces are dropped.
///
/// Fails with [`SymbolicBound`](crate::error::SymbolicBound) if either piece is not concrete.
pub fn unite(p: &Piece, q: &Piece) -> Result<Vec<Piece>, Error> {
    match (p.is_empty()?, q.is_empty()?) {
        (true, true) => return Ok(Vec::new()),
        (true, false) => return Ok(vec![q.clone()]),
        (false, true) => return Ok(vec![p.clone()]),
        (false, false) => {},
    }

    Ok(match merge(p, q)? {
        Some(merged) => vec![merged],
        None => vec![p.clone(), q.clone()],
    })
}

/// Unites a sequence of optional pieces, merging every pair of pieces that can be merged.
///
/// The sequence is consumed lazily. Returns `None` if it yields no piece at all.
pub fn unite_all(
    pieces: impl IntoIterator<Item = Option<Piece>>,
) -> Result<Option<Vec<Piece>>, Error> {
    let mut united: Option<Vec<Piece>> = None;
    for piece in pieces.into_iter().flatten() {
        let acc = united.get_or_insert_with(Vec::new);
        if piece.is_empty()? {
            continue;
        }
        insert_merging(acc, piece)?;
    }
    Ok(united)
}

/// Adds a piece to a list of pieces that cannot be merged with each other, merging it into every
/// piece it connects with.
pub(crate) fn insert_merging(acc: &mut Vec<Piece>, mut piece: Piece) -> Result<(), Error> {
    // a merged piece may now connect with pieces it previously didn't, so keep going until the
    // piece connects with nothing
    'search: loop {
        for i in 0..acc.len() {
            if let Some(merged) = merge(&acc[i], &piece)? {
                acc.swap_remove(i);
                piece = merged;
                continue 'search;
            }
        }
        break;
    }
    acc.push(piece);
    Ok(())
}
