//! Clause storage with a functor-only index.
//!
//! Mirrors `database.py`: an insertion-ordered list of clauses (insertion
//! order is proof-search order) plus a coarse `functor -> clauses` index
//! used whenever the goal being resolved is itself a `Compound`.

use crate::term::Term;
use crate::unify::unify;
use crate::subst::Substitution;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

/// A fact (empty body) or rule (head provable once every body goal is).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub head: Term,
    pub body: Vec<Term>,
}

impl Clause {
    pub fn fact(head: Term) -> Clause {
        Clause {
            head,
            body: Vec::new(),
        }
    }

    pub fn rule(head: Term, body: Vec<Term>) -> Clause {
        Clause { head, body }
    }

    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_fact() {
            write!(f, "{}", self.head)
        } else {
            write!(f, "({}", self.head)?;
            for goal in &self.body {
                write!(f, " {goal}")?;
            }
            write!(f, ")")
        }
    }
}

#[derive(Debug, Default)]
pub struct Database {
    clauses: Vec<Rc<Clause>>,
    index: HashMap<String, Vec<Rc<Clause>>>,
}

impl Database {
    pub fn new() -> Self {
        Database::default()
    }

    pub fn add(&mut self, clause: Clause) {
        let clause = Rc::new(clause);
        if let Some(functor) = clause.head.functor() {
            self.index
                .entry(functor.to_string())
                .or_default()
                .push(Rc::clone(&clause));
        }
        self.clauses.push(clause);
    }

    /// Returns the clauses that might unify with `goal`, in insertion order:
    /// the indexed bucket when `goal` is a `Compound` with an indexed
    /// functor, otherwise every clause (the engine only ever calls this with
    /// a `Compound` goal, so the fallback is purely defensive).
    pub fn retrieve(&self, goal: &Term) -> Vec<Rc<Clause>> {
        match goal.functor().and_then(|f| self.index.get(f)) {
            Some(bucket) => bucket.clone(),
            None => self.clauses.clone(),
        }
    }

    /// Removes the first clause whose head unifies with `pattern`, rebuilding
    /// the index from scratch. Returns whether a clause was removed.
    ///
    /// Per spec.md §9, retract is only well-defined between queries — callers
    /// must not retract while a solution stream from this database is live.
    pub fn retract(&mut self, pattern: &Term) -> bool {
        let position = self
            .clauses
            .iter()
            .position(|c| unify(&c.head, pattern, &Substitution::new()).is_some());

        match position {
            Some(i) => {
                self.clauses.remove(i);
                self.rebuild_index();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.clauses.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<Clause>> {
        self.clauses.iter()
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for clause in &self.clauses {
            if let Some(functor) = clause.head.functor() {
                self.index
                    .entry(functor.to_string())
                    .or_default()
                    .push(Rc::clone(clause));
            }
        }
    }
}
