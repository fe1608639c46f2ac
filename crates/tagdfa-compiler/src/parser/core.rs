//! Parser state machine and low-level operations.

use super::SyntaxKind;
use super::ast::Root;
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};

#[derive(Debug)]
pub struct ParseResult {
    pub root: Root,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// Recursive-descent parser over a pre-lexed token stream.
///
/// Trivia is skipped on lookahead. Statement-level comments are the one
/// exception: `parse_root` inspects them before skipping.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    last_diagnostic_pos: Option<u32>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parses the whole token stream. Syntax errors land in the returned
    /// diagnostics; only fuel exhaustion is an `Err`.
    pub fn parse(mut self) -> Result<ParseResult, Error> {
        let root = self.parse_root();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn skip_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.pos += 1;
        }
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.current_raw() == SyntaxKind::Whitespace {
            self.pos += 1;
        }
    }

    /// Raw kind at the cursor, without skipping trivia.
    pub(super) fn current_raw(&self) -> SyntaxKind {
        self.tokens
            .get(self.pos)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.current_raw()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// LL(1) lookahead past trivia.
    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia();
        self.tokens[self.pos..]
            .iter()
            .skip(1)
            .find(|t| !t.kind.is_trivia())
            .is_some_and(|t| t.kind == kind)
    }

    pub(super) fn current_span(&mut self) -> Span {
        self.skip_trivia();
        self.tokens
            .get(self.pos)
            .map_or_else(|| Span::empty(self.source.len() as u32), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia();
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    /// Consumes the token at the cursor and returns it. Callers peek with
    /// `current()` first, which positions the cursor past trivia.
    pub(super) fn bump(&mut self) -> Token {
        assert!(!self.eof(), "bump called at EOF");
        self.consume_exec_fuel();
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        let found = self.current();
        self.error_msg(
            DiagnosticKind::UnexpectedToken,
            format!("expected {}, found {}", kind.describe(), found.describe()),
        );
        false
    }

    fn should_report(&mut self, pos: u32) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let span = self.current_span();
        self.error_at(kind, span, message);
    }

    pub(super) fn error_at(
        &mut self,
        kind: DiagnosticKind,
        span: Span,
        message: impl Into<String>,
    ) {
        if !self.should_report(span.start) {
            return;
        }
        self.diagnostics.report(kind, span).message(message).emit();
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open: Span,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start) {
            return;
        }
        self.diagnostics
            .report(kind, open.cover(current))
            .related_to(related_msg, open)
            .emit();
    }

    /// Skips to just past the next `;`, or to EOF.
    pub(super) fn recover_statement(&mut self) {
        while !self.should_stop() {
            if self.bump().kind == SyntaxKind::Semicolon {
                break;
            }
        }
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
