//! Example of parsing a small database and solving a query against it.

use parenlog::{parser, Engine, PrologResult, Substitution, Term};

fn main() -> PrologResult<()> {
    println!("=== parenlog demo ===\n");

    let program_text = r#"
(parent tom bob).
(parent bob ann).
(parent tom mary).
(parent bob jane).
((grandparent X Z) (parent X Y) (parent Y Z)).
    "#;

    println!("Source:\n{program_text}\n");

    let clauses = parser::parse_program(program_text)?;
    println!("Parsed {} clause(s)\n", clauses.len());

    let mut database = parenlog::Database::new();
    for clause in clauses {
        database.add(clause);
    }

    let goal = Term::compound("grandparent", vec![Term::symbol("tom"), Term::var("X")]);
    println!("Query: ? {goal}\n");

    let engine = Engine::new(&database);
    let solutions: Vec<Substitution> = engine.query(&goal).collect();

    if solutions.is_empty() {
        println!("no");
    } else {
        for subst in &solutions {
            println!("X = {}", subst.apply(&Term::var("X")));
        }
    }

    Ok(())
}
