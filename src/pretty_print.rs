//! Pretty printing utilities for REPL output.

use crate::database::Clause;
use crate::subst::Substitution;
use colored::*;

/// Formats a single variable binding, e.g. `X = bob`.
pub fn format_binding(name: &str, subst: &Substitution, query_var: &crate::term::Term) -> String {
    format!("{} = {}", name.magenta(), subst.apply(query_var).to_string().cyan())
}

/// Formats every binding in `vars` under `subst` as a comma-joined line.
pub fn format_solution(vars: &[String], subst: &Substitution) -> String {
    vars.iter()
        .map(|name| format_binding(name, subst, &crate::term::Term::var(name.clone())))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_clause(clause: &Clause) -> String {
    if clause.is_fact() {
        clause.head.to_string().cyan().to_string()
    } else {
        clause.to_string().yellow().to_string()
    }
}

pub fn success(msg: &str) -> String {
    format!("{} {}", "yes".green().bold(), msg)
}

pub fn failure(msg: &str) -> String {
    format!("{} {}", "no".red().bold(), msg)
}

pub fn error(msg: &str) -> String {
    format!("{} {}", "✗".red(), msg)
}

pub fn info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue(), msg)
}

pub fn section(title: &str) -> String {
    format!("\n{}", title.bold().underline())
}

pub fn print_help() {
    println!("{}", "parenlog REPL - Help".bold());
    println!();
    println!("{}", "Commands:".bold().underline());
    println!("  {}              - Show this help message", "help".cyan());
    println!("  {}       - Exit the REPL", "quit / exit".cyan());
    println!("  {}            - List every clause in the database", "listing".cyan());
    println!("  {}              - Remove every clause", "clear".cyan());
    println!("  {}      - Load clauses from a file", "consult <file>".cyan());
    println!("  {}         - Alias for consult", "load <file>".cyan());
    println!("  {}         - Save the database to a file", "save <file>".cyan());
    println!("  {}             - Pose a query", "? (goal...)".cyan());
    println!("  {}          - Attempt world visualization (out of scope)", "show <file>".cyan());
    println!();
    println!("{}", "Surface syntax:".bold().underline());
    println!("  {}     - a fact", "(parent tom bob).".cyan());
    println!(
        "  {}  - a rule",
        "((grandparent X Z) (parent X Y) (parent Y Z)).".cyan()
    );
    println!("  {}             - a query", "? (parent tom X)".cyan());
}
