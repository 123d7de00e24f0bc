//! Built-in predicate dispatch.
//!
//! Mirrors `builtin_predicates.py::BuiltinRegistry`: a fixed table of
//! functor names backed by small evaluators, each returning zero or one
//! solution (never more) as a lazy iterator so the engine can treat builtins
//! and ordinary clauses uniformly.

use crate::subst::Substitution;
use crate::term::{AtomValue, Term};

/// Returns whether `functor` names a built-in predicate.
pub fn is_builtin(functor: &str) -> bool {
    matches!(
        functor,
        "=" | "is" | "atom" | "number" | "var" | "nonvar" | "<" | ">" | "=<" | ">=" | "<>" | "/="
    )
}

/// Evaluates a built-in call `(functor arg1 arg2 ...)` under `subst`,
/// returning the (at most one) resulting substitution. `args` are the
/// compound's arguments, unapplied — each evaluator applies `subst` itself.
pub fn evaluate(functor: &str, args: &[Term], subst: &Substitution) -> Option<Substitution> {
    match functor {
        "=" => unify_builtin(args, subst),
        "is" => arithmetic_eval(args, subst),
        "atom" => type_test(args, subst, |t| matches!(t, Term::Atom(v) if v.is_symbol())),
        "number" => type_test(args, subst, |t| matches!(t, Term::Atom(v) if v.is_number())),
        "var" => type_test(args, subst, |t| matches!(t, Term::Var(_))),
        "nonvar" => type_test(args, subst, |t| !matches!(t, Term::Var(_))),
        "<" => compare(args, subst, |a, b| a < b),
        ">" => compare(args, subst, |a, b| a > b),
        "=<" => compare(args, subst, |a, b| a <= b),
        ">=" => compare(args, subst, |a, b| a >= b),
        "<>" => compare(args, subst, |a, b| a != b),
        "/=" => not_unifiable(args, subst),
        _ => None,
    }
}

fn unify_builtin(args: &[Term], subst: &Substitution) -> Option<Substitution> {
    if args.len() != 2 {
        return None;
    }
    crate::unify::unify(&args[0], &args[1], subst)
}

/// `(/= a b)` succeeds, leaving bindings unchanged, exactly when `a` and `b`
/// do NOT unify. On success the ORIGINAL substitution is returned, never
/// whatever partial bindings a failed unify attempt might have produced.
fn not_unifiable(args: &[Term], subst: &Substitution) -> Option<Substitution> {
    if args.len() != 2 {
        return None;
    }
    match crate::unify::unify(&args[0], &args[1], subst) {
        Some(_) => None,
        None => Some(subst.clone()),
    }
}

fn arithmetic_eval(args: &[Term], subst: &Substitution) -> Option<Substitution> {
    if args.len() != 2 {
        return None;
    }
    let value = eval_arithmetic(&subst.apply(&args[1]), subst)?;
    crate::unify::unify(&args[0], &Term::Atom(value), subst)
}

/// Evaluates an arithmetic expression term to a numeric `AtomValue`.
/// `+ - *` stay `Int` only when both operands are `Int`; `/` always produces
/// a `Real` (true division) and fails on division by zero.
fn eval_arithmetic(term: &Term, subst: &Substitution) -> Option<AtomValue> {
    let term = subst.apply(term);
    match &term {
        Term::Atom(value) if value.is_number() => Some(value.clone()),
        Term::Compound(op, operands) if operands.len() == 2 => {
            let a = eval_arithmetic(&operands[0], subst)?;
            let b = eval_arithmetic(&operands[1], subst)?;
            apply_op(op, &a, &b)
        }
        _ => None,
    }
}

fn apply_op(op: &str, a: &AtomValue, b: &AtomValue) -> Option<AtomValue> {
    match op {
        "+" => numeric_binop(a, b, |x, y| x + y, |x, y| x + y),
        "-" => numeric_binop(a, b, |x, y| x - y, |x, y| x - y),
        "*" => numeric_binop(a, b, |x, y| x * y, |x, y| x * y),
        "/" => {
            let x = a.as_f64()?;
            let y = b.as_f64()?;
            if y == 0.0 {
                None
            } else {
                Some(AtomValue::Real(x / y))
            }
        }
        _ => None,
    }
}

fn numeric_binop(
    a: &AtomValue,
    b: &AtomValue,
    int_op: impl Fn(i64, i64) -> i64,
    real_op: impl Fn(f64, f64) -> f64,
) -> Option<AtomValue> {
    match (a, b) {
        (AtomValue::Int(x), AtomValue::Int(y)) => Some(AtomValue::Int(int_op(*x, *y))),
        _ => Some(AtomValue::Real(real_op(a.as_f64()?, b.as_f64()?))),
    }
}

fn type_test(
    args: &[Term],
    subst: &Substitution,
    pred: impl Fn(&Term) -> bool,
) -> Option<Substitution> {
    if args.len() != 1 {
        return None;
    }
    let value = subst.apply(&args[0]);
    if pred(&value) {
        Some(subst.clone())
    } else {
        None
    }
}

fn compare(
    args: &[Term],
    subst: &Substitution,
    pred: impl Fn(f64, f64) -> bool,
) -> Option<Substitution> {
    if args.len() != 2 {
        return None;
    }
    let a = eval_arithmetic(&args[0], subst)?;
    let b = eval_arithmetic(&args[1], subst)?;
    if pred(a.as_f64()?, b.as_f64()?) {
        Some(subst.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Substitution {
        Substitution::new()
    }

    #[test]
    fn unify_builtin_binds_variable() {
        let s = evaluate("=", &[Term::var("X"), Term::symbol("tom")], &empty()).unwrap();
        assert_eq!(s.apply(&Term::var("X")), Term::symbol("tom"));
    }

    #[test]
    fn is_evaluates_nested_arithmetic_preserving_int() {
        let expr = Term::compound(
            "+",
            vec![Term::int(2), Term::compound("*", vec![Term::int(3), Term::int(4)])],
        );
        let s = evaluate("is", &[Term::var("X"), expr], &empty()).unwrap();
        assert_eq!(s.apply(&Term::var("X")), Term::int(14));
    }

    #[test]
    fn division_always_promotes_to_real() {
        let expr = Term::compound("/", vec![Term::int(4), Term::int(2)]);
        let s = evaluate("is", &[Term::var("X"), expr], &empty()).unwrap();
        assert_eq!(s.apply(&Term::var("X")), Term::real(2.0));
    }

    #[test]
    fn division_by_zero_fails_silently() {
        let expr = Term::compound("/", vec![Term::int(1), Term::int(0)]);
        assert!(evaluate("is", &[Term::var("X"), expr], &empty()).is_none());
    }

    #[test]
    fn type_tests_respect_current_bindings() {
        let s = empty().bind("X", Term::int(5));
        assert!(evaluate("number", &[Term::var("X")], &s).is_some());
        assert!(evaluate("atom", &[Term::var("X")], &s).is_none());
        assert!(evaluate("var", &[Term::var("Y")], &s).is_some());
        assert!(evaluate("nonvar", &[Term::var("X")], &s).is_some());
    }

    #[test]
    fn comparisons_evaluate_both_sides() {
        assert!(evaluate("<", &[Term::int(2), Term::int(3)], &empty()).is_some());
        assert!(evaluate(">", &[Term::int(2), Term::int(3)], &empty()).is_none());
    }

    #[test]
    fn not_unifiable_leaves_bindings_untouched_on_success() {
        let s = empty().bind("Y", Term::symbol("existing"));
        let result = evaluate("/=", &[Term::symbol("tom"), Term::symbol("bob")], &s).unwrap();
        assert_eq!(result, s);
    }

    #[test]
    fn not_unifiable_fails_when_terms_unify() {
        assert!(evaluate("/=", &[Term::symbol("tom"), Term::symbol("tom")], &empty()).is_none());
    }

    #[test]
    fn arithmetic_not_equal_evaluates_both_sides() {
        assert!(evaluate("<>", &[Term::int(1), Term::int(2)], &empty()).is_some());

        let doubled = Term::compound("+", vec![Term::int(1), Term::int(1)]);
        assert!(evaluate("<>", &[doubled, Term::int(2)], &empty()).is_none());
    }
}
