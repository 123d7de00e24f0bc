//! Interactive shell for parenlog.

use colored::*;
use parenlog::{pretty_print, repl, Engine, PrologError, ReplCommand, ReplSession};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    println!("{}", "parenlog REPL".bright_cyan().bold());
    println!("{}", "Type help for commands, quit to exit.".bright_cyan());
    println!();

    let mut session = ReplSession::new();

    if let Some(path) = std::env::args().nth(1) {
        match session.consult(&path) {
            Ok(n) => println!("{}", pretty_print::info(&format!("loaded {n} clause(s) from {path}"))),
            Err(e) => {
                eprintln!("{}", pretty_print::error(&format!("could not load {path}: {e}")));
                return ExitCode::FAILURE;
            }
        }
    }

    let history_file = format!(
        "{}/.parenlog_history",
        std::env::var("HOME").unwrap_or_else(|_| ".".to_string())
    );

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("{}", pretty_print::error(&format!("failed to initialize readline: {e}")));
            return ExitCode::FAILURE;
        }
    };
    let _ = rl.load_history(&history_file);

    let mut pending = String::new();

    loop {
        let prompt = if pending.is_empty() {
            format!("{} ", "&-".bright_magenta())
        } else {
            format!("{} ", "...".bright_magenta())
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                let buffer = if pending.is_empty() {
                    line.clone()
                } else {
                    format!("{pending} {line}")
                };

                match repl::classify_line(&buffer) {
                    ReplCommand::Blank => pending.clear(),
                    ReplCommand::ClauseContinuation(partial) => pending = partial,
                    ReplCommand::Clause(text) => {
                        pending.clear();
                        if let Err(e) = session.add_clause_text(&text) {
                            println!("{}", pretty_print::error(&e.to_string()));
                        }
                    }
                    ReplCommand::Help => {
                        pending.clear();
                        pretty_print::print_help();
                    }
                    ReplCommand::Quit => break,
                    ReplCommand::Listing => {
                        pending.clear();
                        println!("{}", pretty_print::section("Database"));
                        for clause in session.database().iter() {
                            println!("{}", pretty_print::format_clause(clause));
                        }
                    }
                    ReplCommand::Clear => {
                        pending.clear();
                        session.clear();
                        println!("{}", pretty_print::success("database cleared"));
                    }
                    ReplCommand::Consult(path) => {
                        pending.clear();
                        match session.consult(&path) {
                            Ok(n) => println!(
                                "{}",
                                pretty_print::info(&format!("loaded {n} clause(s) from {path}"))
                            ),
                            Err(e) => println!("{}", pretty_print::error(&e.to_string())),
                        }
                    }
                    ReplCommand::Save(path) => {
                        pending.clear();
                        match session.save(&path) {
                            Ok(n) => println!(
                                "{}",
                                pretty_print::info(&format!("saved {n} clause(s) to {path}"))
                            ),
                            Err(e) => println!("{}", pretty_print::error(&e.to_string())),
                        }
                    }
                    ReplCommand::Show(_) => {
                        pending.clear();
                        println!(
                            "{}",
                            pretty_print::info("world visualization is out of scope for this interpreter")
                        );
                    }
                    ReplCommand::Query(text) => {
                        pending.clear();
                        run_query(&mut rl, &session, &text);
                    }
                    ReplCommand::Unknown(text) => {
                        pending.clear();
                        println!(
                            "{}",
                            pretty_print::error(&format!("unrecognized input: {text}"))
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                pending.clear();
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                eprintln!("{}", pretty_print::error(&err.to_string()));
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(&history_file) {
        eprintln!("{}", pretty_print::error(&format!("failed to save history: {e}")));
    }

    println!();
    println!("{}", "goodbye".bright_cyan());
    ExitCode::SUCCESS
}

fn run_query(rl: &mut DefaultEditor, session: &ReplSession, text: &str) {
    let goals = match parenlog::parser::parse_query_line(text) {
        Ok(goals) => goals,
        Err(PrologError::ParseError(msg)) => {
            println!("{}", pretty_print::error(&msg));
            return;
        }
        Err(e) => {
            println!("{}", pretty_print::error(&e.to_string()));
            return;
        }
    };

    let mut vars = Vec::new();
    for goal in &goals {
        goal.collect_vars(&mut vars);
    }

    let engine = Engine::new(session.database());
    let mut solutions = engine.solve_all(goals, parenlog::Substitution::new(), 0);

    let mut found_any = false;
    loop {
        match solutions.next() {
            None => {
                if !found_any {
                    println!("{}", pretty_print::failure("no solutions"));
                } else {
                    println!("{}", pretty_print::info("no more solutions"));
                }
                break;
            }
            Some(subst) => {
                found_any = true;
                if vars.is_empty() {
                    println!("{}", "yes".green());
                } else {
                    println!("{}", pretty_print::format_solution(&vars, &subst));
                }
                match rl.readline("; ") {
                    Ok(reply) if reply.trim().eq_ignore_ascii_case("n") => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
        }
    }
}
