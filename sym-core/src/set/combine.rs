//! Union, intersection, difference, and membership of whole sets.
//!
//! The operands are set literals: [`Node::FiniteSet`] and [`Node::Pieces`] entities. Each operand
//! is split into a *good* part, made of concrete pieces and numeric elements (as single-point
//! pieces), and a *bad* part, made of symbolic pieces and non-numeric elements. Good parts are
//! combined exactly with the piece operations; the bad parts are combined with them by
//! distributivity and left as symbolic set nodes.
//!
//! These operations never fail. Anything they cannot resolve stays symbolic.

use crate::entity::{order::cmp_pieces, Entity, Node, Op};
use sym_error::Error;
use super::{
    intersect::intersect,
    invert::invert,
    piece::Piece,
    unite::insert_merging,
};

/// The good and bad parts of a set literal.
#[derive(Debug, Default)]
struct Parts {
    /// Pairwise disjoint concrete pieces.
    good: Vec<Piece>,

    /// Pieces with at least one symbolic edge.
    pieces: Vec<Piece>,

    /// Elements of a finite set that are not numbers.
    elements: Vec<Entity>,
}

impl Parts {
    fn has_bad(&self) -> bool {
        !self.pieces.is_empty() || !self.elements.is_empty()
    }

    fn has_complex(&self) -> bool {
        self.good.iter().any(|piece| !piece.is_real())
    }

    /// Builds the set made of only the good part.
    fn good_set(&self) -> Entity {
        build(self.good.clone(), Vec::new(), Vec::new())
    }

    /// Builds the set made of only the bad part.
    fn bad_set(&self) -> Entity {
        build(Vec::new(), self.pieces.clone(), self.elements.clone())
    }
}

/// Splits a set literal into its parts, or returns `None` if the entity is not a set literal.
fn split(set: &Entity) -> Result<Option<Parts>, Error> {
    let mut parts = Parts::default();
    match set.node() {
        Node::FiniteSet(elements) => {
            for element in elements {
                match element.as_number() {
                    Some(n) if !n.is_undefined() => parts.good.push(Piece::point(n.clone())),
                    _ => parts.elements.push(element.clone()),
                }
            }
        },
        Node::Pieces(pieces) => {
            for piece in pieces {
                if piece.is_concrete() {
                    // pieces built by hand may overlap
                    add_piece(&mut parts.good, piece.clone())?;
                } else if !parts.pieces.contains(piece) {
                    parts.pieces.push(piece.clone());
                }
            }
        },
        _ => return Ok(None),
    }
    Ok(Some(parts))
}

/// Returns `p \ q` as pairwise disjoint pieces, computed as `p ∩ invert(q)`.
fn subtract(p: &Piece, q: &Piece) -> Result<Vec<Piece>, Error> {
    // a real interval has to be complemented within the complex plane when it is subtracted from
    // a rectangle
    let q = if p.is_real() { q.clone() } else { q.to_complex() };
    let mut remainder = Vec::new();
    for complement in invert(&q)? {
        if let Some(piece) = intersect(p, &complement)? {
            remainder.push(piece);
        }
    }
    Ok(remainder)
}

/// Adds a concrete piece to a list of pairwise disjoint pieces, keeping them disjoint.
///
/// The parts of the piece already covered by the list are subtracted first, then every
/// remainder is merged into the list.
fn add_piece(acc: &mut Vec<Piece>, piece: Piece) -> Result<(), Error> {
    if piece.is_empty()? {
        return Ok(());
    }

    let mut remainders = vec![piece];
    for existing in acc.iter() {
        let mut next = Vec::new();
        for remainder in &remainders {
            next.extend(subtract(remainder, existing)?);
        }
        remainders = next;
        if remainders.is_empty() {
            return Ok(());
        }
    }

    for remainder in remainders {
        insert_merging(acc, remainder)?;
    }
    Ok(())
}

/// Builds a set entity from concrete pieces, symbolic pieces, and non-numeric elements.
///
/// If every piece is a single point, the result is a finite set.
fn build(mut good: Vec<Piece>, mut pieces: Vec<Piece>, elements: Vec<Entity>) -> Entity {
    let points = good.iter().map(Piece::as_point).collect::<Option<Vec<_>>>();
    if let (Some(points), true) = (points, pieces.is_empty()) {
        return Entity::finite_set(points.into_iter().map(Entity::from).chain(elements));
    }

    good.sort_by(cmp_pieces);
    pieces.sort_by(cmp_pieces);
    good.append(&mut pieces);
    let pieces = Entity::pieces(good);
    if elements.is_empty() {
        pieces
    } else {
        Entity::binary(Op::Union, pieces, Entity::finite_set(elements))
    }
}

/// Combines the symbolic terms of a result with the exact part, skipping empty sets.
fn join(exact: Entity, symbolic: Vec<Entity>) -> Entity {
    symbolic.into_iter().fold(exact, |acc, term| {
        if acc.is_empty_set() {
            term
        } else {
            Entity::binary(Op::Union, acc, term)
        }
    })
}

fn try_union(a: &Entity, b: &Entity) -> Result<Option<Entity>, Error> {
    let (Some(a), Some(b)) = (split(a)?, split(b)?) else {
        return Ok(None);
    };

    let mut good = a.good;
    for piece in b.good {
        add_piece(&mut good, piece)?;
    }

    let mut pieces = a.pieces;
    for piece in b.pieces {
        if !pieces.contains(&piece) {
            pieces.push(piece);
        }
    }

    let mut elements = a.elements;
    elements.extend(b.elements);
    Ok(Some(build(good, pieces, elements)))
}

/// Returns the union of two sets.
///
/// Concrete pieces are renormalized into pairwise disjoint pieces, merging pieces that share a
/// boundary. If either operand is not a set literal, the result is a symbolic union.
pub fn union(a: &Entity, b: &Entity) -> Entity {
    match try_union(a, b) {
        Ok(Some(result)) => result,
        _ => Entity::binary(Op::Union, a.clone(), b.clone()),
    }
}

fn try_intersection(a: &Entity, b: &Entity) -> Result<Option<Entity>, Error> {
    let (Some(a), Some(b)) = (split(a)?, split(b)?) else {
        return Ok(None);
    };

    // good pieces of each operand are disjoint, so their pairwise intersections are too
    let mut good = Vec::new();
    for p in &a.good {
        for q in &b.good {
            if let Some(piece) = intersect(p, q)? {
                insert_merging(&mut good, piece)?;
            }
        }
    }

    // (gA ∪ bA) ∩ (gB ∪ bB) = gA∩gB ∪ gA∩bB ∪ bA∩gB ∪ bA∩bB, keeping every cross term whose operands
    // are nonempty, even if the exact term is empty
    let mut symbolic = Vec::new();
    if b.has_bad() && !a.good.is_empty() {
        symbolic.push(Entity::binary(Op::Intersection, a.good_set(), b.bad_set()));
    }
    if a.has_bad() && !b.good.is_empty() {
        symbolic.push(Entity::binary(Op::Intersection, a.bad_set(), b.good_set()));
    }
    if a.has_bad() && b.has_bad() {
        symbolic.push(Entity::binary(Op::Intersection, a.bad_set(), b.bad_set()));
    }

    Ok(Some(join(build(good, Vec::new(), Vec::new()), symbolic)))
}

/// Returns the intersection of two sets.
///
/// If either operand is not a set literal, the result is a symbolic intersection.
pub fn intersection(a: &Entity, b: &Entity) -> Entity {
    match try_intersection(a, b) {
        Ok(Some(result)) => result,
        _ => Entity::binary(Op::Intersection, a.clone(), b.clone()),
    }
}

fn try_set_minus(a: &Entity, b: &Entity) -> Result<Option<Entity>, Error> {
    let (Some(a_parts), Some(b_parts)) = (split(a)?, split(b)?) else {
        return Ok(None);
    };

    let universe = if a_parts.has_complex() || b_parts.has_complex() {
        Piece::complex_plane()
    } else {
        Piece::real_line()
    };

    // the complement of a union is the intersection of the complements
    let mut complement = vec![universe];
    for q in &b_parts.good {
        let mut next = Vec::new();
        for piece in &complement {
            next.extend(subtract(piece, q)?);
        }
        complement = next;
    }

    let result = intersection(a, &Entity::pieces(complement));
    if b_parts.has_bad() {
        Ok(Some(Entity::binary(Op::SetMinus, result, b_parts.bad_set())))
    } else {
        Ok(Some(result))
    }
}

/// Returns the set difference `a \ b`.
///
/// If either operand is not a set literal, the result is a symbolic difference.
pub fn set_minus(a: &Entity, b: &Entity) -> Entity {
    match try_set_minus(a, b) {
        Ok(Some(result)) => result,
        _ => Entity::binary(Op::SetMinus, a.clone(), b.clone()),
    }
}

/// Decides whether the element belongs to the set.
///
/// Returns `None` if membership depends on the values of variables, or if `set` is not a set
/// literal.
pub fn contains(element: &Entity, set: &Entity) -> Option<bool> {
    let parts = split(set).ok()??;

    if parts.elements.contains(element) {
        return Some(true);
    }

    match element.as_number() {
        Some(n) if !n.is_undefined() => {
            for piece in &parts.good {
                if piece.contains(n).ok()? {
                    return Some(true);
                }
            }
            (!parts.has_bad()).then_some(false)
        },
        _ => {
            let empty = parts.good.is_empty() && !parts.has_bad();
            empty.then_some(false)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Number;
    use crate::set::piece::{Edge, Span};
    use pretty_assertions::assert_eq;

    fn interval(lo: i64, lo_closed: bool, hi: i64, hi_closed: bool) -> Piece {
        Piece::interval(Edge::new(lo.into(), lo_closed), Edge::new(hi.into(), hi_closed))
    }

    fn closed(lo: i64, hi: i64) -> Entity {
        Entity::pieces(vec![interval(lo, true, hi, true)])
    }

    fn numbers(ns: &[i64]) -> Entity {
        Entity::finite_set(ns.iter().map(|&n| Entity::from(n)))
    }

    /// Builds a set of intervals in canonical piece order.
    fn sorted(mut pieces: Vec<Piece>) -> Entity {
        pieces.sort_by(cmp_pieces);
        Entity::pieces(pieces)
    }

    #[test]
    fn union_merges_overlapping_intervals() {
        assert_eq!(union(&closed(0, 2), &closed(1, 3)), closed(0, 3));
    }

    #[test]
    fn union_absorbs_points() {
        let result = union(&closed(0, 2), &numbers(&[1, 2]));
        assert_eq!(result, closed(0, 2));
    }

    #[test]
    fn union_closes_open_edges() {
        let open = Entity::pieces(vec![interval(0, false, 1, false)]);
        let result = union(&open, &numbers(&[0, 1]));
        assert_eq!(result, closed(0, 1));
    }

    #[test]
    fn union_of_finite_sets_stays_finite() {
        assert_eq!(union(&numbers(&[1, 2]), &numbers(&[2, 3])), numbers(&[1, 2, 3]));
    }

    #[test]
    fn union_is_disjoint() {
        let a = Entity::pieces(vec![interval(0, true, 2, true), interval(5, true, 7, true)]);
        let b = Entity::pieces(vec![interval(1, true, 6, false)]);
        assert_eq!(union(&a, &b), closed(0, 7));
    }

    #[test]
    fn union_keeps_symbolic_parts() {
        let x = Entity::var("x");
        let result = union(&numbers(&[1]), &Entity::finite_set([x.clone()]));
        assert_eq!(result, Entity::finite_set([Entity::from(1), x]));
    }

    #[test]
    fn union_of_non_sets_is_symbolic() {
        let a = Entity::var("A");
        let result = union(&a, &numbers(&[1]));
        assert_eq!(result.op_kind(), Some(Op::Union));
    }

    #[test]
    fn intersection_of_intervals() {
        let result = intersection(&closed(0, 5), &closed(3, 8));
        assert_eq!(result, closed(3, 5));
    }

    #[test]
    fn intersection_of_disjoint_sets_is_empty() {
        assert!(intersection(&closed(0, 1), &closed(2, 3)).is_empty_set());
    }

    #[test]
    fn intersection_filters_points() {
        let result = intersection(&numbers(&[0, 1, 5]), &closed(0, 2));
        assert_eq!(result, numbers(&[0, 1]));
    }

    #[test]
    fn intersection_keeps_cross_terms_when_exact_part_is_empty() {
        // A = [0, 1] ∪ [x, x + 1], B = [5, 6]; the exact part is empty, but [x, x + 1] ∩ [5, 6]
        // is not when x = 5
        let x = Entity::var("x");
        let symbolic = Piece::interval(Edge::closed(x.clone()), Edge::closed(&x + &Entity::from(1)));
        let a = Entity::pieces(vec![interval(0, true, 1, true), symbolic.clone()]);
        let b = closed(5, 6);

        let result = intersection(&a, &b);
        assert_eq!(result, Entity::binary(
            Op::Intersection,
            Entity::pieces(vec![symbolic]),
            closed(5, 6),
        ));
    }

    #[test]
    fn set_minus_punches_holes() {
        let result = set_minus(&closed(0, 10), &numbers(&[5]));
        assert_eq!(result, sorted(vec![
            interval(0, true, 5, false),
            interval(5, false, 10, true),
        ]));
    }

    #[test]
    fn set_minus_of_finite_sets() {
        assert_eq!(set_minus(&numbers(&[1, 2, 3]), &numbers(&[2])), numbers(&[1, 3]));
    }

    #[test]
    fn set_minus_everything() {
        let line = Entity::pieces(vec![Piece::real_line()]);
        assert!(set_minus(&closed(0, 1), &line).is_empty_set());
    }

    #[test]
    fn set_minus_keeps_complex_points() {
        let i = Entity::from(Number::i());
        let result = set_minus(&Entity::finite_set([i.clone(), Entity::from(1)]), &numbers(&[1]));
        assert_eq!(result, Entity::finite_set([i]));
    }

    #[test]
    fn membership() {
        let x = Entity::var("x");
        assert_eq!(contains(&Entity::from(1), &closed(0, 2)), Some(true));
        assert_eq!(contains(&Entity::from(3), &closed(0, 2)), Some(false));
        assert_eq!(contains(&x, &closed(0, 2)), None);
        assert_eq!(contains(&x, &Entity::finite_set([x.clone()])), Some(true));
        assert_eq!(contains(&x, &Entity::empty_set()), Some(false));
    }

    #[test]
    fn membership_in_rectangles() {
        let square = Entity::pieces(vec![Piece::rectangle(
            Span::new(Edge::closed(-1), Edge::closed(1)),
            Span::new(Edge::closed(-1), Edge::closed(1)),
        )]);
        assert_eq!(contains(&Entity::from(Number::i()), &square), Some(true));
        assert_eq!(contains(&Entity::from(2), &square), Some(false));
    }
}
