use indoc::indoc;

use super::{Node, PositionAnalysis, PositionSet, Program};
use crate::Error;
use crate::parser::parse;

fn resolve_with(source: &str, symbols: &[(&str, u32)]) -> crate::Result<Program> {
    let result = parse(source).unwrap();
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        result.diagnostics
    );
    Program::resolve(&result.root, symbols)
}

fn resolve(source: &str) -> Program {
    resolve_with(source, &[]).unwrap()
}

fn resolve_err(source: &str) -> Error {
    resolve_with(source, &[]).unwrap_err()
}

/// Leaf positions rendered in id order: literal value, `<tag>` or `#`.
fn labels(program: &Program, set: &PositionSet) -> String {
    let arena = program.arena();
    set.iter()
        .map(|id| match arena.get(id) {
            Node::Literal(value) => value.to_string(),
            Node::Tag(sym) => format!("<{}>", arena.name(sym)),
            Node::EndMarker => "#".to_owned(),
            other => panic!("not a position: {other:?}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn tagged_alternation() {
    let program = resolve(indoc! {"
        a = 0;
        b = 1;
        main = x:(b a) | y:(a b);
    "});

    insta::assert_snapshot!(program.dump(), @"(| (. (. 1 0) <x>) (. (. 0 1) <y>))");
    assert_eq!(program.alphabet_size(), 2);
    assert_eq!(program.literal("a"), Some(0));
    assert_eq!(program.literal("b"), Some(1));
    assert_eq!(program.literal("main"), None);
}

#[test]
fn augmented_root_ends_with_marker() {
    let program = resolve("a = 0; main = a+;");

    insta::assert_snapshot!(program.arena().dump(program.augmented_root()), @"(. (+ 0) #)");
    assert_eq!(program.arena().get(program.end_marker()), Node::EndMarker);
}

#[test]
fn aliases_resolve_through_chains() {
    let program = resolve(indoc! {"
        a = 0;
        b = a;
        c = b b;
        main = c | a;
    "});

    insta::assert_snapshot!(program.dump(), @"(| (. 0 0) 0)");
    // `b` resolves to a bare literal and joins the alphabet; `c` does not
    assert_eq!(program.alphabet_size(), 2);
    assert_eq!(program.literal("b"), Some(0));
    insta::assert_snapshot!(
        program.literals().map(|(n, v)| format!("{n}={v}")).collect::<Vec<_>>().join(" "),
        @"a=0 b=0"
    );
}

#[test]
fn main_may_be_a_literal() {
    let program = resolve("a = 0; main = a;");

    insta::assert_snapshot!(program.dump(), @"0");
    assert_eq!(program.alphabet_size(), 2);
}

#[test]
fn rebinding_sees_previous_binding() {
    let program = resolve(indoc! {"
        a = 0;
        a = a a;
        main = a;
    "});

    insta::assert_snapshot!(program.dump(), @"(. 0 0)");
    assert_eq!(program.alphabet_size(), 1);
}

#[test]
fn comments_are_ignored() {
    let program = resolve(indoc! {"
        # alphabet
        a = 0;
        # root
        main = a a;
    "});

    insta::assert_snapshot!(program.dump(), @"(. 0 0)");
}

#[test]
fn external_symbols() {
    let result = parse("main = lo hi?;").unwrap();
    let program = Program::resolve(&result.root, &[("lo", 0), ("hi", 1)]).unwrap();

    insta::assert_snapshot!(program.dump(), @"(. 0 (? 1))");
    assert_eq!(program.alphabet_size(), 2);
    assert_eq!(program.literal("hi"), Some(1));
}

#[test]
fn declarations_shadow_external_symbols() {
    let result = parse("lo = 5; main = lo;").unwrap();
    let program = Program::resolve(&result.root, &[("lo", 0)]).unwrap();

    insta::assert_snapshot!(program.dump(), @"5");
    assert_eq!(program.literal("lo"), Some(5));
}

#[test]
fn references_become_fresh_copies() {
    let program = resolve("a = 0 1; main = a a;");

    insta::assert_snapshot!(program.dump(), @"(. (. 0 1) (. 0 1))");
    // no node is shared between the two occurrences
    assert_eq!(program.arena().subtree(program.root()).len(), 7);
}

#[test]
fn tags_follow_their_body() {
    let program = resolve("a = 0; main = x:a y:a?;");

    insta::assert_snapshot!(program.dump(), @"(. (. 0 <x>) (. (? 0) <y>))");
}

#[test]
fn bounded_repetition_of_reference() {
    let program = resolve("a = 0; main = a{2,3};");

    insta::assert_snapshot!(program.dump(), @"(. 0 (. 0 (? 0)))");
}

#[test]
fn undeclared_identifier() {
    let err = resolve_err("a = 0; main = a b;");

    insta::assert_snapshot!(err.to_string(), @"undeclared identifier `b`");
}

#[test]
fn forward_reference_is_undeclared() {
    let err = resolve_err("main = a; a = 0;");

    assert!(matches!(err, Error::UndeclaredIdentifier(name) if name == "a"));
}

#[test]
fn missing_main() {
    let err = resolve_err("a = 0; b = a;");

    insta::assert_snapshot!(err.to_string(), @"no `main` declaration");
}

#[test]
fn reference_to_main_before_declaration() {
    let err = resolve_err("a = main; main = 0;");

    assert!(matches!(err, Error::UndeclaredIdentifier(name) if name == "main"));
}

#[test]
fn invalid_range_in_declaration() {
    let err = resolve_err("a = 0; main = a{3,1};");

    insta::assert_snapshot!(err.to_string(), @"invalid repetition bounds {3,1}");
}

#[test]
fn node_limit_stops_exponential_aliases() {
    let source = indoc! {"
        a = 0;
        b = a a a a;
        c = b b b b;
        main = c c c c;
    "};
    let result = parse(source).unwrap();
    let err = Program::resolve_with_limit(&result.root, &[], Some(20)).unwrap_err();

    assert!(matches!(err, Error::NodeLimitExceeded(20)));
}

#[test]
fn positions_of_optional_prefix() {
    let program = resolve("a = 0; b = 1; main = a? b;");
    let arena = program.arena();
    let order = arena.subtree(program.augmented_root());
    let analysis = PositionAnalysis::compute(arena, &order);

    let root = program.root();
    assert!(!analysis.nullable(root));
    insta::assert_snapshot!(labels(&program, analysis.firstpos(root)), @"0 1");
    insta::assert_snapshot!(labels(&program, analysis.lastpos(root)), @"1");
    insta::assert_snapshot!(labels(&program, analysis.lastpos(program.augmented_root())), @"#");
}

#[test]
fn positions_through_tags() {
    let program = resolve("a = 0; b = 1; main = x:(a b) | b*;");
    let arena = program.arena();
    let order = arena.subtree(program.augmented_root());
    let analysis = PositionAnalysis::compute(arena, &order);

    let root = program.root();
    assert!(analysis.nullable(root));
    insta::assert_snapshot!(labels(&program, analysis.firstpos(root)), @"0 1");
    // the tag was allocated during lowering, before the resolved copies
    insta::assert_snapshot!(labels(&program, analysis.lastpos(root)), @"<x> 1 1");
    insta::assert_snapshot!(
        labels(&program, analysis.firstpos(program.augmented_root())),
        @"0 1 #"
    );
}

#[test]
fn plus_is_not_nullable() {
    let program = resolve("a = 0; main = (a?)+;");
    let arena = program.arena();
    let order = arena.subtree(program.augmented_root());
    let analysis = PositionAnalysis::compute(arena, &order);

    assert!(!analysis.nullable(program.root()));
}

#[test]
fn position_set_union() {
    let mut set = PositionSet::from_unsorted(vec![5, 1, 3, 1]);
    assert_eq!(set.as_slice(), &[1, 3, 5]);

    set.extend(&PositionSet::from_unsorted(vec![4, 3, 0]));
    assert_eq!(set.as_slice(), &[0, 1, 3, 4, 5]);
    assert!(set.contains(4));
    assert!(!set.contains(2));

    let collected: PositionSet = [2, 2, 1].into_iter().collect();
    assert_eq!(collected, PositionSet::from_unsorted(vec![1, 2]));
}
