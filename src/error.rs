//! Crate-wide error taxonomy.
//!
//! Only the boundary layers (parser, file I/O) ever produce an `Err`; the
//! unifier and engine represent failure structurally (an empty solution
//! stream), matching spec §7's propagation policy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrologError {
    #[error("parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PrologResult<T> = Result<T, PrologError>;
