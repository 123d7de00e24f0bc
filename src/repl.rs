//! REPL session state and command classification.
//!
//! Mirrors the reference REPL's main loop: command dispatch for
//! `help`/`quit`/`exit`/`listing`/`clear`/`consult`/`load`/`save`/`?query`/
//! `show`, and the "accumulate continuation lines until a `.` terminates the
//! clause" rule for multi-line clause input. The interactive read/print loop
//! itself (line editing, the "more solutions?" prompt) lives in
//! `bin/repl.rs`, which is the only piece that needs a terminal.

use crate::database::Database;
use crate::error::PrologResult;
use crate::parser;
use std::fs;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Quit,
    Listing,
    Clear,
    Consult(String),
    Save(String),
    Show(String),
    Query(String),
    /// A line starting a parenthesized clause that has not yet reached a
    /// terminating `.` — the caller should keep reading lines and
    /// concatenating them until [`classify_line`] (re-run on the whole
    /// buffer) reports [`ReplCommand::Clause`].
    ClauseContinuation(String),
    Clause(String),
    Unknown(String),
    Blank,
}

/// Classifies one logical input line (or accumulated buffer) into a command.
pub fn classify_line(line: &str) -> ReplCommand {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ReplCommand::Blank;
    }
    if trimmed == "help" {
        return ReplCommand::Help;
    }
    if trimmed == "quit" || trimmed == "exit" {
        return ReplCommand::Quit;
    }
    if trimmed == "listing" {
        return ReplCommand::Listing;
    }
    if trimmed == "clear" {
        return ReplCommand::Clear;
    }
    if let Some(rest) = trimmed.strip_prefix("consult ") {
        return ReplCommand::Consult(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("load ") {
        return ReplCommand::Consult(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("save ") {
        return ReplCommand::Save(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("show ") {
        return ReplCommand::Show(rest.trim().to_string());
    }
    if let Some(rest) = trimmed.strip_prefix('?') {
        return ReplCommand::Query(rest.trim().to_string());
    }
    if trimmed.starts_with('(') {
        if trimmed.ends_with('.') {
            return ReplCommand::Clause(trimmed.to_string());
        }
        return ReplCommand::ClauseContinuation(trimmed.to_string());
    }

    ReplCommand::Unknown(trimmed.to_string())
}

pub struct ReplSession {
    database: Database,
}

impl ReplSession {
    pub fn new() -> Self {
        ReplSession {
            database: Database::new(),
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn add_clause_text(&mut self, text: &str) -> PrologResult<()> {
        for clause in parser::parse_program(text)? {
            self.database.add(clause);
        }
        Ok(())
    }

    /// Loads clauses from `path`, matching the reference loader's tolerance
    /// for blank lines and `%` comments. Returns the number of clauses added.
    pub fn consult(&mut self, path: &str) -> PrologResult<usize> {
        let text = fs::read_to_string(path)?;
        let before = self.database.len();
        self.add_clause_text(&text)?;
        Ok(self.database.len() - before)
    }

    pub fn save(&self, path: &str) -> PrologResult<usize> {
        let mut file = fs::File::create(path)?;
        writeln!(file, "% saved by parenlog")?;
        let mut count = 0;
        for clause in self.database.iter() {
            writeln!(file, "{clause}.")?;
            count += 1;
        }
        Ok(count)
    }

    pub fn listing(&self) -> Vec<String> {
        self.database.iter().map(|c| c.to_string()).collect()
    }

    pub fn clear(&mut self) {
        self.database.clear();
    }
}

impl Default for ReplSession {
    fn default() -> Self {
        ReplSession::new()
    }
}
