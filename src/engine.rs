//! SLD resolution: depth-first search with chronological backtracking,
//! exposed as a lazy solution stream.
//!
//! Mirrors `inference.py::InferenceEngine.solve`: a generator in the
//! original becomes a `Box<dyn Iterator<Item = Substitution>>` here, built by
//! chaining over clause alternatives with `flat_map`. Because Rust iterators
//! are pull-based, a caller that only asks for the first solution only pays
//! for the search needed to produce it.

use crate::builtins;
use crate::database::Database;
use crate::rename::Renamer;
use crate::subst::Substitution;
use crate::term::Term;

/// Proof search is abandoned below this depth, the same backstop
/// `inference.py` uses against runaway left-recursive rules.
const DEPTH_LIMIT: u32 = 1000;

pub struct Engine<'a> {
    database: &'a Database,
    renamer: Renamer,
}

impl<'a> Engine<'a> {
    pub fn new(database: &'a Database) -> Self {
        Engine {
            database,
            renamer: Renamer::new(),
        }
    }

    /// Proves `goal` on its own; a thin wrapper over [`Engine::solve_all`]
    /// for the common single-goal query case.
    pub fn query(&'a self, goal: &Term) -> Box<dyn Iterator<Item = Substitution> + 'a> {
        self.solve_all(std::iter::once(goal.clone()).collect(), Substitution::new(), 0)
    }

    /// Proves a conjunction of goals, lazily yielding one substitution per
    /// solution. `depth` bounds recursion through rule bodies.
    pub fn solve_all(
        &'a self,
        goals: Vec<Term>,
        subst: Substitution,
        depth: u32,
    ) -> Box<dyn Iterator<Item = Substitution> + 'a> {
        if depth > DEPTH_LIMIT {
            log::debug!("depth limit {DEPTH_LIMIT} exceeded, pruning branch");
            return Box::new(std::iter::empty());
        }

        let mut remaining = goals;
        let goal = match remaining.first().cloned() {
            None => return Box::new(std::iter::once(subst)),
            Some(g) => g,
        };
        remaining.remove(0);

        let goal = subst.apply(&goal);

        let (functor, args) = match &goal {
            Term::Compound(functor, args) => (functor.clone(), args.clone()),
            _ => {
                log::trace!("goal {goal} is not callable, failing");
                return Box::new(std::iter::empty());
            }
        };

        if builtins::is_builtin(&functor) {
            log::trace!("evaluating builtin {functor}/{}", args.len());
            return match builtins::evaluate(&functor, &args, &subst) {
                Some(next_subst) => self.solve_all(remaining, next_subst, depth + 1),
                None => Box::new(std::iter::empty()),
            };
        }

        let candidates = self.database.retrieve(&goal);
        log::trace!(
            "resolving {functor}/{} against {} candidate clause(s)",
            args.len(),
            candidates.len()
        );

        Box::new(candidates.into_iter().flat_map(move |clause| {
            let renamed = self.renamer.rename_clause(&clause);
            match crate::unify::unify(&goal, &renamed.head, &subst) {
                Some(extended) => {
                    let mut new_goals = renamed.body.clone();
                    new_goals.extend(remaining.clone());
                    self.solve_all(new_goals, extended, depth + 1)
                }
                None => Box::new(std::iter::empty()),
            }
        }))
    }
}
