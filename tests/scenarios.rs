//! End-to-end worked scenarios, exercising the parser, database and engine
//! together the way a REPL query would.

use parenlog::{parser, Database, Engine, Substitution, Term};

fn basic_family_database() -> Database {
    let mut db = Database::new();
    for clause in parser::parse_program(
        r#"
        (parent tom bob).
        (parent bob ann).
        ((grandparent X Z) (parent X Y) (parent Y Z)).
        "#,
    )
    .unwrap()
    {
        db.add(clause);
    }
    db
}

fn extended_family_database() -> Database {
    let mut db = basic_family_database();
    for clause in parser::parse_program(
        r#"
        (parent tom mary).
        (parent bob jane).
        "#,
    )
    .unwrap()
    {
        db.add(clause);
    }
    db
}

#[test]
fn s1_facts_and_simple_query() {
    println!("S1: facts and a simple query");
    let db = basic_family_database();
    let engine = Engine::new(&db);
    let goal = Term::compound("parent", vec![Term::symbol("tom"), Term::var("X")]);

    let mut solutions = engine.query(&goal);
    let first = solutions.next().expect("expected one solution");
    assert_eq!(first.apply(&Term::var("X")), Term::symbol("bob"));
    assert!(solutions.next().is_none(), "expected no more solutions");
}

#[test]
fn s2_rule_with_two_step_chain() {
    println!("S2: rule with a two-step chain");
    let db = basic_family_database();
    let engine = Engine::new(&db);
    let goal = Term::compound("grandparent", vec![Term::symbol("tom"), Term::var("X")]);

    let solutions: Vec<_> = engine.query(&goal).collect();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].apply(&Term::var("X")), Term::symbol("ann"));
}

#[test]
fn s3_multiple_solutions_in_insertion_order() {
    println!("S3: multiple solutions in insertion order");
    let db = extended_family_database();
    let engine = Engine::new(&db);
    let goal = Term::compound("grandparent", vec![Term::symbol("tom"), Term::var("X")]);

    let names: Vec<String> = engine
        .query(&goal)
        .map(|s| s.apply(&Term::var("X")).to_string())
        .collect();
    assert_eq!(names, vec!["ann".to_string(), "jane".to_string()]);
}

#[test]
fn s4_arithmetic() {
    println!("S4: arithmetic via is/2");
    let db = Database::new();
    let engine = Engine::new(&db);
    let goals = parser::parse_query_line("(is X (+ 2 (* 3 4)))").unwrap();

    let solutions: Vec<_> = engine.solve_all(goals, Substitution::new(), 0).collect();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].apply(&Term::var("X")), Term::int(14));
}

#[test]
fn s5_occurs_check_rejects_cyclic_unification() {
    println!("S5: occurs-check rejects a cyclic binding");
    let db = Database::new();
    let engine = Engine::new(&db);
    let goals = parser::parse_query_line("(= X (f X))").unwrap();

    assert_eq!(engine.solve_all(goals, Substitution::new(), 0).count(), 0);
}

#[test]
fn s6_negation_via_slash_equals() {
    println!("S6: negation via /=");
    let db = basic_family_database();
    let engine = Engine::new(&db);

    let yes = parser::parse_query_line("(/= tom bob)").unwrap();
    assert_eq!(engine.solve_all(yes, Substitution::new(), 0).count(), 1);

    let no = parser::parse_query_line("(/= X X)").unwrap();
    assert_eq!(engine.solve_all(no, Substitution::new(), 0).count(), 0);

    let differing_functors = parser::parse_query_line("(/= (f A) (g B))").unwrap();
    assert_eq!(
        engine.solve_all(differing_functors, Substitution::new(), 0).count(),
        1
    );
}

#[test]
fn s6b_arithmetic_not_equal_is_distinct_from_slash_equals() {
    println!("S6b: <> evaluates both sides arithmetically, unlike /=");
    let db = Database::new();
    let engine = Engine::new(&db);

    let differs = parser::parse_query_line("(<> 1 2)").unwrap();
    assert_eq!(engine.solve_all(differs, Substitution::new(), 0).count(), 1);

    let equal_by_value = parser::parse_query_line("(<> (+ 1 1) 2)").unwrap();
    assert_eq!(
        engine.solve_all(equal_by_value, Substitution::new(), 0).count(),
        0
    );
}

#[test]
fn s7_list_unification_splits_head_and_tail() {
    println!("S7: list unification splits head and tail");
    let db = Database::new();
    let engine = Engine::new(&db);
    let goals = parser::parse_query_line("(= [1 2 3] [H | T])").unwrap();

    let mut solutions = engine.solve_all(goals, Substitution::new(), 0);
    let solution = solutions.next().expect("expected a solution");
    assert_eq!(solution.apply(&Term::var("H")), Term::int(1));
    assert_eq!(
        solution.apply(&Term::var("T")),
        Term::List(vec![Term::int(2), Term::int(3)], None)
    );
}

#[test]
fn s8_failure_reports_no_solutions() {
    println!("S8: an unprovable goal yields no solutions");
    let db = basic_family_database();
    let engine = Engine::new(&db);
    let goal = Term::compound("parent", vec![Term::symbol("ann"), Term::var("X")]);

    assert_eq!(engine.query(&goal).count(), 0);
}
