//! Hygienic clause-variable renaming.
//!
//! Mirrors `inference.py::_rename_variables`: every clause fetched from the
//! database is renamed before it is unified against the current goal, so two
//! activations of the same clause (or a clause and the query itself) never
//! collide on a variable name. Uses `Cell<u64>` so `Renamer::rename` takes
//! `&self`, keeping the engine's `&self` API compatible with the iterators it
//! returns.

use crate::database::Clause;
use crate::term::Term;
use std::cell::Cell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Renamer {
    counter: Cell<u64>,
}

impl Renamer {
    pub fn new() -> Self {
        Renamer {
            counter: Cell::new(0),
        }
    }

    /// Renames every variable in `clause` to a fresh `_<k>`-suffixed name,
    /// consistently within this single call: two occurrences of `X` in the
    /// clause map to the same fresh name, and different clauses (or repeated
    /// activations of the same clause) never share one.
    pub fn rename_clause(&self, clause: &Clause) -> Clause {
        let k = self.counter.get();
        self.counter.set(k + 1);

        let mut map = HashMap::new();
        let head = rename_term(&clause.head, k, &mut map);
        let body = clause.body.iter().map(|g| rename_term(g, k, &mut map)).collect();
        Clause { head, body }
    }
}

fn rename_term(term: &Term, k: u64, map: &mut HashMap<String, String>) -> Term {
    match term {
        Term::Atom(_) => term.clone(),
        Term::Var(name) => {
            let fresh = map
                .entry(name.clone())
                .or_insert_with(|| format!("{name}_{k}"))
                .clone();
            Term::Var(fresh)
        }
        Term::Compound(functor, args) => Term::Compound(
            functor.clone(),
            args.iter().map(|a| rename_term(a, k, map)).collect(),
        ),
        Term::List(elements, tail) => Term::List(
            elements.iter().map(|e| rename_term(e, k, map)).collect(),
            tail.as_ref().map(|t| Box::new(rename_term(t, k, map))),
        ),
    }
}
