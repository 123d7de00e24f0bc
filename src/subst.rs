//! Persistent variable bindings.
//!
//! Mirrors `unification.py`'s `Substitution`: `bind` clones the underlying
//! map and returns a new `Substitution`, leaving the caller's copy
//! untouched. This is what lets each search branch hold its own bindings and
//! makes backtracking as simple as "drop this substitution, try the next
//! alternative" — no trail to unwind.

use crate::term::Term;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    bindings: HashMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns a new substitution extending `self` with `name -> term`.
    ///
    /// The unifier never calls this with `term == Term::Var(name)` (it
    /// special-cases "same variable" before binding), so no `InvalidBind`
    /// signal is needed here.
    pub fn bind(&self, name: &str, term: Term) -> Substitution {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.to_string(), term);
        Substitution { bindings }
    }

    /// Chases the binding chain from `name` through variable-to-variable
    /// hops, stopping at the first non-variable term or unbound variable.
    /// Returns `None` if `name` itself is unbound.
    pub fn walk(&self, name: &str) -> Option<&Term> {
        let mut current = self.bindings.get(name)?;
        while let Term::Var(next_name) = current {
            match self.bindings.get(next_name) {
                Some(next) => current = next,
                None => break,
            }
        }
        Some(current)
    }

    /// Deep-rewrites `term` under this substitution: atoms pass through,
    /// bound variables are walked and recursively applied, compounds and
    /// lists are rebuilt from applied children. Terminates because the
    /// unifier enforces occurs-check, so no bound-cycle can exist.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Atom(_) => term.clone(),
            Term::Var(name) => match self.walk(name) {
                Some(bound) => self.apply(bound),
                None => term.clone(),
            },
            Term::Compound(functor, args) => {
                Term::Compound(functor.clone(), args.iter().map(|a| self.apply(a)).collect())
            }
            Term::List(elements, tail) => {
                let new_elements = elements.iter().map(|e| self.apply(e)).collect();
                let new_tail = tail.as_ref().map(|t| Box::new(self.apply(t)));
                Term::List(new_elements, new_tail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_does_not_mutate_the_original() {
        let s0 = Substitution::new();
        let s1 = s0.bind("X", Term::int(1));
        assert!(s0.walk("X").is_none());
        assert_eq!(s1.walk("X"), Some(&Term::int(1)));
    }

    #[test]
    fn walk_chases_variable_chains() {
        let s = Substitution::new()
            .bind("X", Term::var("Y"))
            .bind("Y", Term::symbol("bob"));
        assert_eq!(s.walk("X"), Some(&Term::symbol("bob")));
    }

    #[test]
    fn walk_stops_at_unbound_variable() {
        let s = Substitution::new().bind("X", Term::var("Y"));
        assert_eq!(s.walk("X"), Some(&Term::var("Y")));
    }

    #[test]
    fn apply_rebuilds_compounds_recursively() {
        let s = Substitution::new().bind("X", Term::symbol("bob"));
        let t = Term::compound("parent", vec![Term::symbol("tom"), Term::var("X")]);
        assert_eq!(
            s.apply(&t),
            Term::compound("parent", vec![Term::symbol("tom"), Term::symbol("bob")])
        );
    }

    #[test]
    fn apply_is_idempotent() {
        let s = Substitution::new()
            .bind("X", Term::var("Y"))
            .bind("Y", Term::int(3));
        let t = Term::compound("f", vec![Term::var("X")]);
        let once = s.apply(&t);
        let twice = s.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn apply_rebuilds_list_tail() {
        let s = Substitution::new().bind("T", Term::List(vec![Term::int(2)], None));
        let t = Term::List(vec![Term::int(1)], Some(Box::new(Term::var("T"))));
        assert_eq!(
            s.apply(&t),
            Term::List(vec![Term::int(1), Term::int(2)], None)
        );
    }
}
