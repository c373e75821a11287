use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use sym_core::{Ctxt, Edge, Entity, Number, Op, Piece, set};

fn simplified(expr: &Entity) -> Entity {
    expr.simplify(&Ctxt::default()).unwrap()
}

fn random_number(rng: &mut StdRng) -> Entity {
    let numer = rng.gen_range(-20..=20i64);
    let denom = rng.gen_range(1..=6i64);
    Entity::number(Number::rational(numer, denom).unwrap())
}

/// Builds a random polynomial-like expression over `x` and `y`.
fn random_expr(rng: &mut StdRng, depth: usize) -> Entity {
    if depth == 0 || rng.gen_bool(0.25) {
        return match rng.gen_range(0..3) {
            0 => Entity::var("x"),
            1 => Entity::var("y"),
            _ => Entity::from(rng.gen_range(-3..=3i64)),
        };
    }

    let lhs = random_expr(rng, depth - 1);
    match rng.gen_range(0..5) {
        0 => lhs + random_expr(rng, depth - 1),
        1 => lhs - random_expr(rng, depth - 1),
        2 => lhs * random_expr(rng, depth - 1),
        3 => -lhs,
        _ => lhs.pow(2),
    }
}

#[test]
fn numeric_sums_are_order_independent() {
    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    for _ in 0..100 {
        let (a, b, c) = (random_number(&mut rng), random_number(&mut rng), random_number(&mut rng));
        let forward = &(&a + &b) + &c;
        let backward = &(&c + &b) + &a;
        assert_eq!(simplified(&forward), simplified(&backward));
    }
}

#[test]
fn numeric_products_are_order_independent() {
    let mut rng = StdRng::seed_from_u64(0xbeef);
    for _ in 0..100 {
        let (a, b, c) = (random_number(&mut rng), random_number(&mut rng), random_number(&mut rng));
        let forward = &(&a * &b) * &c;
        let backward = &c * &(&b * &a);
        assert_eq!(simplified(&forward), simplified(&backward));
    }
}

#[test]
fn symbolic_sums_are_order_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut terms = ["a", "b", "c", "d", "e1"].map(Entity::var).to_vec();
    let sum = |terms: &[Entity]| {
        terms.iter().cloned().reduce(|acc, term| acc + term).unwrap()
    };

    let expected = simplified(&sum(&terms));
    for _ in 0..20 {
        terms.shuffle(&mut rng);
        assert_eq!(simplified(&sum(&terms)), expected);
    }
}

#[test]
fn simplify_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x1de);
    for _ in 0..100 {
        let expr = random_expr(&mut rng, 4);
        let once = simplified(&expr);
        assert_eq!(simplified(&once), once, "simplifying {} twice", expr);
    }
}

#[test]
fn substitution_then_evaluation_matches_folding() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let expr = random_expr(&mut rng, 3);
        let (x, y) = (Entity::from(rng.gen_range(-4..=4i64)), Entity::from(rng.gen_range(-4..=4i64)));
        let closed = expr
            .substitute(&Entity::var("x"), &x)
            .substitute(&Entity::var("y"), &y);

        let folded = simplified(&closed);
        let evaluated = closed.evaluate().unwrap();
        assert_eq!(folded, evaluated, "evaluating {}", closed);
    }
}

#[test]
fn complement_partitions_the_line() {
    let mut rng = StdRng::seed_from_u64(0x5e7);
    let samples = (-12..=12i64)
        .map(|n| Number::rational(n, 2).unwrap())
        .collect::<Vec<_>>();

    for _ in 0..200 {
        let lo = rng.gen_range(-5..=5i64);
        let hi = rng.gen_range(lo..=5);
        let piece = Piece::interval(
            Edge::new(Entity::from(lo), rng.gen()),
            Edge::new(Entity::from(hi), rng.gen()),
        );
        let complement = set::invert(&piece).unwrap();

        for sample in &samples {
            let count = std::iter::once(&piece)
                .chain(&complement)
                .filter(|p| p.contains(sample).unwrap())
                .count();
            assert_eq!(count, 1, "{} in {} and its complement {:?}", sample, piece, complement);
        }
    }
}

#[test]
fn set_union_agrees_with_membership() {
    let mut rng = StdRng::seed_from_u64(99);
    let interval = |rng: &mut StdRng| {
        let lo = rng.gen_range(-5..=5i64);
        let hi = rng.gen_range(lo..=5);
        Entity::pieces(vec![Piece::interval(
            Edge::new(Entity::from(lo), rng.gen()),
            Edge::new(Entity::from(hi), rng.gen()),
        )])
    };

    for _ in 0..100 {
        let (a, b) = (interval(&mut rng), interval(&mut rng));
        let union = set::union(&a, &b);
        let intersection = set::intersection(&a, &b);
        let difference = set::set_minus(&a, &b);

        for n in -12..=12i64 {
            let sample = Entity::number(Number::rational(n, 2).unwrap());
            let in_a = set::contains(&sample, &a).unwrap();
            let in_b = set::contains(&sample, &b).unwrap();
            assert_eq!(set::contains(&sample, &union), Some(in_a || in_b), "{} in {}", sample, union);
            assert_eq!(
                set::contains(&sample, &intersection),
                Some(in_a && in_b),
                "{} in {}",
                sample,
                intersection,
            );
            assert_eq!(
                set::contains(&sample, &difference),
                Some(in_a && !in_b),
                "{} in {}",
                sample,
                difference,
            );
        }
    }
}

#[test]
fn entities_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Entity>();

    let expr = Entity::binary(Op::Mul, Entity::var("x"), Entity::from(1));
    let handle = std::thread::spawn(move || simplified(&expr));
    assert_eq!(handle.join().unwrap(), Entity::var("x"));
}
