#[macro_use]
extern crate pest_derive;

pub mod builtins;
pub mod database;
pub mod engine;
pub mod error;
pub mod parser;
pub mod pretty_print;
pub mod rename;
pub mod repl;
pub mod subst;
pub mod term;
pub mod unify;

pub use database::{Clause, Database};
pub use engine::Engine;
pub use error::{PrologError, PrologResult};
pub use parser::TermParser;
pub use repl::{ReplCommand, ReplSession};
pub use subst::Substitution;
pub use term::{AtomValue, Term};

pub const VERSION: &str = "0.1.0";
pub const LANGUAGE_NAME: &str = "parenlog";
