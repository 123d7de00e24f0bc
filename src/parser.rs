//! Lisp-shaped surface syntax reader.
//!
//! Wraps a `pest` grammar (`src/term.pest`) and resolves the "rule-as-compound"
//! convention exactly as the reference REPL's clause handler does: a
//! parenthesized form whose first child is itself parenthesized is a rule,
//! encoded as a `Compound` with the empty-string functor carrying `[head,
//! body1, body2, ...]`; otherwise the first child names the functor of an
//! ordinary compound.

use crate::database::Clause;
use crate::error::{PrologError, PrologResult};
use crate::term::Term;
use pest::iterators::Pair;
use pest::Parser;

#[derive(Parser)]
#[grammar = "term.pest"]
pub struct TermParser;

/// Parses a whole file or `consult` buffer into its clauses, in order.
pub fn parse_program(input: &str) -> PrologResult<Vec<Clause>> {
    let pairs = TermParser::parse(Rule::program, input)
        .map_err(|e| PrologError::ParseError(e.to_string()))?;

    let mut clauses = Vec::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::clause => {
                let term_pair = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| PrologError::ParseError("empty clause".to_string()))?;
                clauses.push(clause_from_term(term_from_pair(term_pair)?)?);
            }
            Rule::EOI => break,
            _ => {}
        }
    }
    Ok(clauses)
}

/// Parses a single REPL `? ...` query line (the `?` itself already stripped)
/// into its conjunction of goals.
pub fn parse_query_line(input: &str) -> PrologResult<Vec<Term>> {
    let pairs = TermParser::parse(Rule::query_line, input)
        .map_err(|e| PrologError::ParseError(e.to_string()))?;

    let mut goals = Vec::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::term => goals.push(term_from_pair(pair)?),
            Rule::EOI => break,
            _ => {}
        }
    }
    if goals.is_empty() {
        return Err(PrologError::ParseError("empty query".to_string()));
    }
    Ok(goals)
}

/// Turns a parsed term into a `Clause`, resolving the rule-as-compound
/// encoding. Errors if the term cannot head a clause (anything but a
/// `Compound`).
pub fn clause_from_term(term: Term) -> PrologResult<Clause> {
    match term {
        Term::Compound(functor, mut args) if functor.is_empty() => {
            if args.is_empty() {
                return Err(PrologError::ParseError("rule has no head".to_string()));
            }
            let head = args.remove(0);
            Ok(Clause::rule(head, args))
        }
        Term::Compound(_, _) => Ok(Clause::fact(term)),
        other => Err(PrologError::ParseError(format!(
            "clause head must be a compound, got {other}"
        ))),
    }
}

fn term_from_pair(pair: Pair<Rule>) -> PrologResult<Term> {
    match pair.as_rule() {
        Rule::term => term_from_pair(pair.into_inner().next().unwrap()),
        Rule::compound => compound_from_pair(pair),
        Rule::list => list_from_pair(pair),
        Rule::variable => Ok(Term::var(pair.as_str())),
        Rule::number => Ok(number_from_str(pair.as_str())),
        Rule::atom => Ok(Term::symbol(pair.as_str())),
        rule => Err(PrologError::ParseError(format!(
            "unexpected grammar rule {rule:?}"
        ))),
    }
}

/// Builds a compound, applying the rule-as-compound convention: if the first
/// child term is itself a `Compound` or `List`, the whole form is a rule and
/// gets the empty-string functor; otherwise the first child's atom text
/// names the functor.
fn compound_from_pair(pair: Pair<Rule>) -> PrologResult<Term> {
    let mut children = pair.into_inner();
    let first = match children.next() {
        None => return Ok(Term::compound("", Vec::new())),
        Some(first) => first,
    };

    let first_inner_rule = first.clone().into_inner().next().map(|p| p.as_rule());
    let is_parenthesized_first = matches!(
        first_inner_rule,
        Some(Rule::compound) | Some(Rule::list)
    );

    if is_parenthesized_first {
        let mut args = vec![term_from_pair(first)?];
        for child in children {
            args.push(term_from_pair(child)?);
        }
        Ok(Term::compound("", args))
    } else {
        let functor_term = term_from_pair(first)?;
        let functor = match functor_term {
            Term::Atom(value) => value.to_string(),
            Term::Var(name) => name,
            other => {
                return Err(PrologError::ParseError(format!(
                    "compound functor must be an atom, got {other}"
                )))
            }
        };
        let mut args = Vec::new();
        for child in children {
            args.push(term_from_pair(child)?);
        }
        Ok(Term::compound(functor, args))
    }
}

fn list_from_pair(pair: Pair<Rule>) -> PrologResult<Term> {
    let mut elements = Vec::new();
    let mut tail = None;
    for child in pair.into_inner() {
        match child.as_rule() {
            Rule::term => elements.push(term_from_pair(child)?),
            Rule::list_tail => {
                let inner = child.into_inner().next().unwrap();
                tail = Some(Box::new(term_from_pair(inner)?));
            }
            _ => {}
        }
    }
    Ok(Term::List(elements, tail))
}

fn number_from_str(text: &str) -> Term {
    if text.contains('.') {
        Term::real(text.parse::<f64>().unwrap_or(0.0))
    } else {
        Term::int(text.parse::<i64>().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_fact() {
        let clauses = parse_program("(parent tom bob).").unwrap();
        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].is_fact());
        assert_eq!(
            clauses[0].head,
            Term::compound("parent", vec![Term::symbol("tom"), Term::symbol("bob")])
        );
    }

    #[test]
    fn parses_a_rule_with_two_body_goals() {
        let clauses = parse_program("((grandparent X Z) (parent X Y) (parent Y Z)).").unwrap();
        assert_eq!(clauses.len(), 1);
        assert!(!clauses[0].is_fact());
        assert_eq!(clauses[0].body.len(), 2);
    }

    #[test]
    fn parses_a_conjunctive_query() {
        let goals = parse_query_line("(parent tom X) (parent X Y)").unwrap();
        assert_eq!(goals.len(), 2);
    }

    #[test]
    fn parses_arithmetic_operators_as_atoms() {
        let goals = parse_query_line("(is X (+ 2 (* 3 4)))").unwrap();
        assert_eq!(
            goals[0],
            Term::compound(
                "is",
                vec![
                    Term::var("X"),
                    Term::compound(
                        "+",
                        vec![Term::int(2), Term::compound("*", vec![Term::int(3), Term::int(4)])]
                    )
                ]
            )
        );
    }

    #[test]
    fn parses_list_with_head_tail_split() {
        let goals = parse_query_line("(= [1 2 3] [H | T])").unwrap();
        match &goals[0] {
            Term::Compound(_, args) => {
                assert_eq!(
                    args[1],
                    Term::List(vec![Term::var("H")], Some(Box::new(Term::var("T"))))
                );
            }
            _ => panic!("expected compound"),
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_program("(parent tom bob").is_err());
    }
}
