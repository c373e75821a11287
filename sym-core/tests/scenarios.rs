use pretty_assertions::assert_eq;
use std::{thread, time::Duration};
use sym_core::{
    error::{Cancelled, QuotaExceeded},
    pattern::{any, lit, Rule, RuleTable},
    set::{intersect, invert},
    simplify::Simplifier,
    CancellationToken,
    Category,
    Ctxt,
    Edge,
    Entity,
    Number,
    Op,
    Piece,
    Step,
    Variable,
};

fn call(name: &str, arg: impl Into<Entity>) -> Entity {
    Entity::call(name, vec![arg.into()]).unwrap()
}

fn approx(expr: &Entity) -> f64 {
    expr.evaluate().unwrap().as_number().unwrap().to_float().to_f64()
}

fn simplified(expr: &Entity) -> Entity {
    sym_core::simplify(&Ctxt::default(), expr).unwrap()
}

#[test]
fn add_zero() {
    let x = Entity::var("x");
    assert_eq!(simplified(&(&x + &Entity::from(0))), x);
}

#[test]
fn multiply_numbers() {
    assert_eq!(simplified(&(&Entity::from(2) * &Entity::from(3))), Entity::from(6));
}

#[test]
fn divide_downcasts_to_integer() {
    let result = simplified(&(&Entity::from(6) / &Entity::from(3)));
    assert!(matches!(result.as_number(), Some(Number::Integer(n)) if *n == 2));
}

#[test]
fn invert_half_open_interval() {
    let pieces = invert(&Piece::interval(Edge::closed(0), Edge::open(5))).unwrap();
    let formatted = pieces.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(formatted, vec!["(-∞, 0)", "(5, ∞)", "{5}"]);
}

#[test]
fn intersect_overlapping_intervals() {
    let a = Piece::interval(Edge::closed(0), Edge::open(10));
    let b = Piece::interval(Edge::open(5), Edge::closed(15));
    let result = intersect(&a, &b).unwrap();
    assert_eq!(result, Some(Piece::interval(Edge::open(5), Edge::open(10))));
}

#[test]
fn simplifies_set_expressions() {
    let interval = |a: i64, b: i64| Entity::pieces(vec![Piece::interval(Edge::closed(a), Edge::closed(b))]);
    let expr = Entity::binary(
        Op::In,
        Entity::from(4),
        Entity::binary(Op::SetMinus, interval(0, 10), interval(3, 5)),
    );
    assert_eq!(simplified(&expr), Entity::boolean(false));

    let symbolic = Entity::binary(Op::Union, Entity::var("A"), Entity::empty_set());
    assert_eq!(simplified(&symbolic), Entity::var("A"));
}

#[test]
fn steps_are_reported() {
    let x = Entity::var("x");
    let expr = &(&x * &x) - &(&x * &x);
    let (result, steps) = sym_core::simplify_with_steps(&Ctxt::default(), &expr).unwrap();
    assert_eq!(result, Entity::from(0));
    assert!(steps.contains(&Step::SubtractSelf));
}

#[test]
fn growing_rules_hit_the_quota() {
    let rules = [Rule::new(Step::DoubleNegation, any(0), |b| Some(-b.get(0)?.clone()))]
        .into_iter()
        .collect::<RuleTable>();
    let ctxt = Ctxt::default().with_quota(64);

    let err = Simplifier::new(&ctxt)
        .with_rules(&rules)
        .simplify(&Entity::var("x"))
        .unwrap_err();
    assert_eq!(err.category(), Category::Exhausted);
    assert_eq!(err.downcast_ref::<QuotaExceeded>(), Some(&QuotaExceeded { limit: 64 }));
}

#[test]
fn pre_cancelled_token() {
    let token = CancellationToken::new();
    token.cancel();
    let ctxt = Ctxt::default().with_cancellation(token);

    let err = Entity::var("x").simplify(&ctxt).unwrap_err();
    assert_eq!(err.category(), Category::Cancelled);
    assert!(err.is::<Cancelled>());
}

#[test]
fn cancelled_from_another_thread() {
    // never settles, so only cancellation can stop it
    let rules = [
        Rule::new(Step::AddZero, lit(Entity::var("a")), |_| Some(Entity::var("b"))),
        Rule::new(Step::AddZero, lit(Entity::var("b")), |_| Some(Entity::var("a"))),
    ]
        .into_iter()
        .collect::<RuleTable>();
    let token = CancellationToken::new();
    let ctxt = Ctxt::default()
        .with_quota(usize::MAX)
        .with_cancellation(token.clone());

    let worker = thread::spawn(move || {
        Simplifier::new(&ctxt).with_rules(&rules).simplify(&Entity::var("a"))
    });
    thread::sleep(Duration::from_millis(20));
    token.cancel();

    let err = worker.join().unwrap().unwrap_err();
    assert!(err.is::<Cancelled>());
}

#[test]
fn arcsin_values() {
    assert_eq!(simplified(&call("arcsin", 0)), Entity::from(0));
    assert_eq!(simplified(&call("arcsin", 1)), simplified(&(Entity::pi() / Entity::from(2))));
    assert!((approx(&call("arcsin", 0.5)) - 0.5f64.asin()).abs() < 1e-12);
}

#[test]
fn arccos_values() {
    assert_eq!(simplified(&call("arccos", 1)), Entity::from(0));
    assert_eq!(simplified(&call("arccos", -1)), Entity::pi());
    assert!((approx(&call("arccos", 0.25)) - 0.25f64.acos()).abs() < 1e-12);
}

#[test]
fn arctan_values() {
    let x = Entity::var("x");
    assert_eq!(simplified(&call("arctan", 0)), Entity::from(0));
    assert_eq!(simplified(&call("arctan", -&x)), simplified(&-call("arctan", x)));
    assert!((approx(&call("arctan", 3)) - 3f64.atan()).abs() < 1e-12);
}

#[test]
fn arccot_values() {
    assert_eq!(simplified(&call("arccot", 1)), simplified(&(Entity::pi() / Entity::from(4))));
    assert!((approx(&call("arccot", 2)) - 0.5f64.atan()).abs() < 1e-12);
}

#[test]
fn cot_values() {
    assert!(simplified(&call("cot", 0)).is_undefined());
    assert!((approx(&call("cot", 1)) - 1.0 / 1f64.tan()).abs() < 1e-12);
}

#[test]
fn signum_values() {
    assert_eq!(simplified(&call("signum", -3)), Entity::from(-1));
    assert_eq!(simplified(&call("signum", 0)), Entity::from(0));
    assert_eq!(approx(&call("signum", Entity::pi())), 1.0);

    let symbolic = call("signum", Entity::var("x"));
    assert_eq!(simplified(&symbolic), symbolic);
}

#[test]
fn differentiate_polynomial() {
    let x = Entity::var("x");
    let expr = &(&x.pow(2) * &Entity::from(3)) + &x;
    let derivative = expr.differentiate(&Variable::new("x")).unwrap();
    let at_two = derivative.substitute(&x, &Entity::from(2)).evaluate().unwrap();
    assert_eq!(at_two, Entity::from(13));
}

#[test]
fn differentiate_factorial_is_unsupported() {
    let err = call("factorial", Entity::var("x"))
        .differentiate(&Variable::new("x"))
        .unwrap_err();
    assert_eq!(err.category(), Category::Unsupported);
}
