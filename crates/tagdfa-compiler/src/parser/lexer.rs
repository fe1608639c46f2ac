//! Lexer for the pattern language.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! source only when needed.
//!
//! Consecutive unrecognized characters are coalesced into a single `Garbage`
//! token rather than one error per character.

use logos::Logos;

use super::SyntaxKind;
use crate::diagnostics::Span;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(SyntaxKind::Garbage, (start..end).into()));
                }
                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(SyntaxKind::Garbage, (start..source.len()).into()));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
