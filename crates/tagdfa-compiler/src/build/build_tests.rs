use indoc::indoc;
use tagdfa_core::Automaton;

use super::{build, build_with_state_limit};
use crate::Error;
use crate::parser::parse;
use crate::program::Program;

fn program(source: &str) -> Program {
    let result = parse(source).unwrap();
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        result.diagnostics
    );
    Program::resolve(&result.root, &[]).unwrap()
}

fn automaton(source: &str) -> Automaton {
    build(&program(source)).unwrap()
}

#[test]
fn single_literal() {
    let dfa = automaton("a = 0; b = 1; main = a;");

    // `a`, `b` and `main` all resolve to bare literals
    assert_eq!(dfa.alphabet_size(), 3);
    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1: 0→S2
    S2 ✓:
    ");
}

#[test]
fn concatenation() {
    let dfa = automaton("a = 0; b = 1; main = a b;");

    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1: 0→S2
    S2: 1→S3
    S3 ✓:
    ");
}

#[test]
fn plus_loops_back() {
    let dfa = automaton("a = 0; b = 1; main = (a b)+;");

    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1: 0→S2
    S2: 1→S3
    S3 ✓: 0→S2
    ");
}

#[test]
fn tagged_alternation() {
    let dfa = automaton(indoc! {"
        a = 0;
        b = 1;
        main = x:(b a) | y:(a b);
    "});

    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1: 0→S2 1→S3
    S2: 1→S4
    S3: 0→S5
    S4 ✓ [y]:
    S5 ✓ [x]:
    ");
    assert_eq!(dfa.tags(4), &["y".to_owned()]);
    assert!(dfa.is_accepting(5));
}

#[test]
fn converging_tags_share_a_state() {
    let dfa = automaton("a = 0; main = x:(a) | y:(a);");

    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1: 0→S2
    S2 ✓ [x, y]:
    ");
    assert_eq!(dfa.tags(2), ["x", "y"]);
}

#[test]
fn nullable_root_accepts_initially() {
    let dfa = automaton("a = 0; main = a*;");

    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1 ✓: 0→S1
    ");
}

#[test]
fn tag_after_optional_body() {
    let dfa = automaton("a = 0; main = x:a?;");

    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1 ✓ [x]: 0→S2
    S2 ✓ [x]:
    ");
}

#[test]
fn literals_outside_alphabet_have_no_transition() {
    let dfa = automaton("a = 5; main = a;");

    assert_eq!(dfa.alphabet_size(), 2);
    insta::assert_snapshot!(dfa.dump(), @r"
    S0:
    S1:
    ");
}

#[test]
fn dead_state_is_first() {
    let dfa = automaton("a = 0; b = 1; main = a | b;");

    let dead = dfa.state(0);
    assert!(!dead.accepting);
    assert!(dead.tags.is_empty());
    assert!(dead.transitions.iter().all(|&t| t == 0));
}

#[test]
fn parallel_views() {
    let dfa = automaton("a = 0; b = 1; main = a b;");

    assert_eq!(
        dfa.state_table(),
        vec![vec![0, 0], vec![2, 0], vec![0, 3], vec![0, 0]]
    );
    assert_eq!(dfa.accepting(), vec![false, false, false, true]);
    assert!(dfa.tag_sets().iter().all(|tags| tags.is_empty()));
}

#[test]
fn deterministic() {
    let source = indoc! {"
        a = 0;
        b = 1;
        c = 2;
        main = x:(a b)* c | y:(a | c)+ b?;
    "};

    assert_eq!(automaton(source), automaton(source));
}

#[test]
fn state_limit() {
    let source = "a = 0; b = 1; main = x:(b a) | y:(a b);";
    let program = program(source);

    let err = build_with_state_limit(&program, Some(4)).unwrap_err();
    assert!(matches!(err, Error::StateLimitExceeded(4)));
    insta::assert_snapshot!(err.to_string(), @"automaton exceeds 4 states");

    let dfa = build_with_state_limit(&program, Some(6)).unwrap();
    assert_eq!(dfa.len(), 6);
}
