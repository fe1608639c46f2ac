use indoc::indoc;

use super::lexer::{lex, token_text};

fn snapshot(input: &str) -> String {
    lex(input)
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind, token_text(input, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn assignment() {
    insta::assert_snapshot!(snapshot("a = 0;"), @r#"
    Id "a"
    Whitespace " "
    Equals "="
    Whitespace " "
    Number "0"
    Semicolon ";"
    "#);
}

#[test]
fn operators() {
    insta::assert_snapshot!(snapshot("x:(a|b)*+?{1,2}"), @r#"
    Id "x"
    Colon ":"
    ParenOpen "("
    Id "a"
    Pipe "|"
    Id "b"
    ParenClose ")"
    Star "*"
    Plus "+"
    Question "?"
    BraceOpen "{"
    Number "1"
    Comma ","
    Number "2"
    BraceClose "}"
    "#);
}

#[test]
fn identifiers_with_digits_and_underscores() {
    insta::assert_snapshot!(snapshot("_a1 b_2 3c"), @r#"
    Id "_a1"
    Whitespace " "
    Id "b_2"
    Whitespace " "
    Number "3"
    Id "c"
    "#);
}

#[test]
fn comment_runs_to_end_of_line() {
    let input = indoc! {r#"
        # header = 1;
        a = 0;
    "#};

    insta::assert_snapshot!(snapshot(input), @r##"
    Comment "# header = 1;"
    Whitespace "\n"
    Id "a"
    Whitespace " "
    Equals "="
    Whitespace " "
    Number "0"
    Semicolon ";"
    Whitespace "\n"
    "##);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a = $%^ 0;"), @r#"
    Id "a"
    Whitespace " "
    Equals "="
    Whitespace " "
    Garbage "$%^"
    Whitespace " "
    Number "0"
    Semicolon ";"
    "#);
}

#[test]
fn garbage_at_end() {
    insta::assert_snapshot!(snapshot("a = 0;@@"), @r#"
    Id "a"
    Whitespace " "
    Equals "="
    Whitespace " "
    Number "0"
    Semicolon ";"
    Garbage "@@"
    "#);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
}
