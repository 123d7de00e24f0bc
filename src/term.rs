//! The algebraic term representation shared by the parser, unifier and engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar payload of an [`Term::Atom`]: a symbol, an integer, or a real.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AtomValue {
    Symbol(String),
    Int(i64),
    Real(f64),
}

impl AtomValue {
    pub fn is_symbol(&self) -> bool {
        matches!(self, AtomValue::Symbol(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, AtomValue::Int(_) | AtomValue::Real(_))
    }

    /// Numeric value as `f64`, if this atom is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AtomValue::Int(n) => Some(*n as f64),
            AtomValue::Real(n) => Some(*n),
            AtomValue::Symbol(_) => None,
        }
    }
}

impl PartialEq for AtomValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AtomValue::Symbol(a), AtomValue::Symbol(b)) => a == b,
            (AtomValue::Int(a), AtomValue::Int(b)) => a == b,
            (AtomValue::Real(a), AtomValue::Real(b)) => a == b,
            // Python-style numeric equality: 2 == 2.0
            (AtomValue::Int(a), AtomValue::Real(b)) | (AtomValue::Real(b), AtomValue::Int(a)) => {
                *a as f64 == *b
            }
            _ => false,
        }
    }
}

impl fmt::Display for AtomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomValue::Symbol(s) => write!(f, "{s}"),
            AtomValue::Int(n) => write!(f, "{n}"),
            AtomValue::Real(n) => write!(f, "{n}"),
        }
    }
}

/// A term: the sole algebraic representation flowing through parser, unifier
/// and engine. Every payload is immutable once constructed — sharing a `Term`
/// between substitutions and clause copies is always safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Term {
    Atom(AtomValue),
    Var(String),
    Compound(String, Vec<Term>),
    List(Vec<Term>, Option<Box<Term>>),
}

impl Term {
    pub fn symbol(name: impl Into<String>) -> Term {
        Term::Atom(AtomValue::Symbol(name.into()))
    }

    pub fn int(value: i64) -> Term {
        Term::Atom(AtomValue::Int(value))
    }

    pub fn real(value: f64) -> Term {
        Term::Atom(AtomValue::Real(value))
    }

    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(name.into())
    }

    pub fn compound(functor: impl Into<String>, args: Vec<Term>) -> Term {
        Term::Compound(functor.into(), args)
    }

    pub fn nil() -> Term {
        Term::List(Vec::new(), None)
    }

    pub fn functor(&self) -> Option<&str> {
        match self {
            Term::Compound(functor, _) => Some(functor.as_str()),
            _ => None,
        }
    }

    /// Collects every distinct variable name occurring in this term, in
    /// first-occurrence order.
    pub fn collect_vars(&self, seen: &mut Vec<String>) {
        match self {
            Term::Atom(_) => {}
            Term::Var(name) => {
                if !seen.iter().any(|v| v == name) {
                    seen.push(name.clone());
                }
            }
            Term::Compound(_, args) => {
                for arg in args {
                    arg.collect_vars(seen);
                }
            }
            Term::List(elements, tail) => {
                for elem in elements {
                    elem.collect_vars(seen);
                }
                if let Some(tail) = tail {
                    tail.collect_vars(seen);
                }
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(value) => write!(f, "{value}"),
            Term::Var(name) => write!(f, "{name}"),
            Term::Compound(functor, args) => {
                if args.is_empty() {
                    write!(f, "({functor})")
                } else {
                    write!(f, "({functor}")?;
                    for arg in args {
                        write!(f, " {arg}")?;
                    }
                    write!(f, ")")
                }
            }
            Term::List(elements, tail) => {
                if elements.is_empty() && tail.is_none() {
                    return write!(f, "[]");
                }
                write!(f, "[")?;
                for (i, elem) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{elem}")?;
                }
                if let Some(tail) = tail {
                    write!(f, " | {tail}")?;
                }
                write!(f, "]")
            }
        }
    }
}
