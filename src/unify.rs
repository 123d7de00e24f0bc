//! Robinson-style unification with occurs-check over the term model.

use crate::subst::Substitution;
use crate::term::Term;

/// Checks whether variable `name` occurs in `term` (after applying `subst`).
/// Infinite terms are never admitted: this is always run before a variable
/// is bound to a compound or list.
fn occurs(name: &str, term: &Term, subst: &Substitution) -> bool {
    let term = subst.apply(term);
    match term {
        Term::Var(other) => other == name,
        Term::Compound(_, args) => args.iter().any(|a| occurs(name, a, subst)),
        Term::List(elements, tail) => {
            elements.iter().any(|e| occurs(name, e, subst))
                || tail.map_or(false, |t| occurs(name, &t, subst))
        }
        Term::Atom(_) => false,
    }
}

/// Unifies `t1` and `t2` under `subst`, returning the extended substitution
/// or `None` on failure. See spec.md §4.2 for the per-shape rules.
pub fn unify(t1: &Term, t2: &Term, subst: &Substitution) -> Option<Substitution> {
    let t1 = subst.apply(t1);
    let t2 = subst.apply(t2);

    match (&t1, &t2) {
        (Term::Atom(a), Term::Atom(b)) => {
            if a == b {
                Some(subst.clone())
            } else {
                None
            }
        }

        (Term::Var(a), Term::Var(b)) if a == b => Some(subst.clone()),

        (Term::Var(name), _) => {
            if occurs(name, &t2, subst) {
                None
            } else {
                Some(subst.bind(name, t2))
            }
        }
        (_, Term::Var(name)) => {
            if occurs(name, &t1, subst) {
                None
            } else {
                Some(subst.bind(name, t1))
            }
        }

        (Term::Compound(f1, args1), Term::Compound(f2, args2)) => {
            if f1 != f2 || args1.len() != args2.len() {
                return None;
            }
            let mut current = subst.clone();
            for (a1, a2) in args1.iter().zip(args2.iter()) {
                current = unify(a1, a2, &current)?;
            }
            Some(current)
        }

        (Term::List(e1, t1_tail), Term::List(e2, t2_tail)) => {
            unify_lists(e1, t1_tail.as_deref(), e2, t2_tail.as_deref(), subst)
        }

        _ => None,
    }
}

fn unify_lists(
    e1: &[Term],
    tail1: Option<&Term>,
    e2: &[Term],
    tail2: Option<&Term>,
    subst: &Substitution,
) -> Option<Substitution> {
    if e1.is_empty() && tail1.is_none() && e2.is_empty() && tail2.is_none() {
        return Some(subst.clone());
    }
    if (e1.is_empty() && tail1.is_none()) || (e2.is_empty() && tail2.is_none()) {
        return None;
    }

    let min_len = e1.len().min(e2.len());
    let mut current = subst.clone();
    for i in 0..min_len {
        current = unify(&e1[i], &e2[i], &current)?;
    }

    let rest1 = &e1[min_len..];
    let rest2 = &e2[min_len..];

    let reduced1 = reduce_tail(rest1, tail1);
    let reduced2 = reduce_tail(rest2, tail2);

    unify(&reduced1, &reduced2, &current)
}

/// Reconstructs the remaining tail of a list after consuming the shared
/// prefix: leftover elements plus the original tail, or an empty list if
/// nothing is left over and there was no tail.
fn reduce_tail(remaining: &[Term], tail: Option<&Term>) -> Term {
    if !remaining.is_empty() {
        Term::List(remaining.to_vec(), tail.cloned().map(Box::new))
    } else {
        match tail {
            Some(t) => t.clone(),
            None => Term::nil(),
        }
    }
}
