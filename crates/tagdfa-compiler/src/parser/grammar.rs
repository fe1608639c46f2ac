//! Grammar productions.
//!
//! ```text
//! root          = statement*
//! statement     = COMMENT | Id "=" alternation ";"
//! alternation   = concatenation ("|" concatenation)*
//! concatenation = repeat repeat*
//! repeat        = Id ":" repeat
//!               | term ("*" | "+" | "?" | range)?
//! range         = "{" Number? "," Number? "}" | "{" Number "}"
//! term          = Id | Number | "(" alternation ")"
//! ```

use super::SyntaxKind;
use super::ast::{Assignment, Comment, Expr, RepeatOp, Root, Statement};
use super::core::Parser;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_root(&mut self) -> Root {
        let mut statements = Vec::new();

        loop {
            self.skip_whitespace();
            if self.should_stop() {
                break;
            }

            if self.current_raw() == SyntaxKind::Comment {
                let token = self.bump();
                statements.push(Statement::Comment(Comment {
                    text: self.text(&token).to_owned(),
                    span: token.span,
                }));
                continue;
            }

            if let Some(assignment) = self.parse_assignment() {
                statements.push(Statement::Assignment(assignment));
            }
        }

        Root { statements }
    }

    /// On failure the rest of the statement is skipped.
    fn parse_assignment(&mut self) -> Option<Assignment> {
        let start = self.current_span();

        if !self.currently_is(SyntaxKind::Id) {
            let found = self.current();
            self.error_msg(
                DiagnosticKind::ExpectedName,
                format!("found {}", found.describe()),
            );
            self.recover_statement();
            return None;
        }
        let name_token = self.bump();
        let name = self.text(&name_token).to_owned();

        let value = if self.expect(SyntaxKind::Equals) {
            self.parse_alternation()
        } else {
            None
        };
        let Some(value) = value else {
            self.recover_statement();
            return None;
        };

        let end = self.current_span();
        if !self.expect(SyntaxKind::Semicolon) {
            self.recover_statement();
            return None;
        }

        Some(Assignment {
            name,
            value,
            span: start.cover(end),
        })
    }

    fn parse_alternation(&mut self) -> Option<Expr> {
        let mut branches = vec![self.parse_concatenation()?];
        while !self.has_fatal_error() && self.eat_token(SyntaxKind::Pipe) {
            branches.push(self.parse_concatenation()?);
        }

        match branches.len() {
            1 => branches.pop(),
            _ => Some(Expr::Alt(branches)),
        }
    }

    fn parse_concatenation(&mut self) -> Option<Expr> {
        let mut items = vec![self.parse_repeat()?];
        while !self.has_fatal_error() && self.current().starts_term() {
            items.push(self.parse_repeat()?);
        }

        match items.len() {
            1 => items.pop(),
            _ => Some(Expr::Concat(items)),
        }
    }

    fn parse_repeat(&mut self) -> Option<Expr> {
        if self.currently_is(SyntaxKind::Id) && self.next_is(SyntaxKind::Colon) {
            return self.parse_tag();
        }

        let term = self.parse_term()?;
        let op = match self.current() {
            SyntaxKind::Star => RepeatOp::Star,
            SyntaxKind::Plus => RepeatOp::Plus,
            SyntaxKind::Question => RepeatOp::Question,
            SyntaxKind::BraceOpen => return self.parse_range(term),
            _ => return Some(term),
        };
        self.bump();

        Some(Expr::repeat(term, op))
    }

    /// `name:body`. Nested tags count against the recursion limit.
    fn parse_tag(&mut self) -> Option<Expr> {
        if !self.enter_recursion() {
            return None;
        }

        let name_token = self.bump();
        let name = self.text(&name_token);
        self.expect(SyntaxKind::Colon);
        let body = self.parse_repeat();

        self.exit_recursion();
        Some(Expr::tag(name, body?))
    }

    fn parse_term(&mut self) -> Option<Expr> {
        match self.current() {
            SyntaxKind::Id => {
                let token = self.bump();
                Some(Expr::reference(self.text(&token)))
            }
            SyntaxKind::Number => self.parse_number().map(Expr::literal),
            SyntaxKind::ParenOpen => self.parse_group(),
            SyntaxKind::Garbage => {
                let text = self.current_text();
                self.error_msg(DiagnosticKind::UnexpectedToken, format!("`{text}`"));
                None
            }
            found => {
                self.error_msg(
                    DiagnosticKind::ExpectedExpression,
                    format!("found {}", found.describe()),
                );
                None
            }
        }
    }

    fn parse_group(&mut self) -> Option<Expr> {
        if !self.enter_recursion() {
            return None;
        }

        let open = self.bump().span;
        let result = match self.parse_alternation() {
            Some(inner) if self.eat_token(SyntaxKind::ParenClose) => Some(inner),
            Some(_) => {
                self.error_unclosed_delimiter(DiagnosticKind::UnclosedParen, "opened here", open);
                None
            }
            None => None,
        };

        self.exit_recursion();
        result
    }

    /// `{n}`, `{m,}`, `{,n}`, `{m,n}` or `{,}` after a term.
    fn parse_range(&mut self, inner: Expr) -> Option<Expr> {
        let open = self.bump().span;

        let min = if self.currently_is(SyntaxKind::Number) {
            Some(self.parse_number()?)
        } else {
            None
        };

        let (min, max) = if self.eat_token(SyntaxKind::Comma) {
            let max = if self.currently_is(SyntaxKind::Number) {
                Some(self.parse_number()?)
            } else {
                None
            };
            (min.unwrap_or(0), max)
        } else {
            let Some(count) = min else {
                let found = self.current();
                self.error_msg(
                    DiagnosticKind::ExpectedNumber,
                    format!("found {}", found.describe()),
                );
                return None;
            };
            (count, Some(count))
        };

        if !self.eat_token(SyntaxKind::BraceClose) {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedBrace, "opened here", open);
            return None;
        }

        Some(Expr::range(inner, min, max))
    }

    fn parse_number(&mut self) -> Option<u32> {
        let token = self.bump();
        let text = self.text(&token);
        match text.parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.error_at(DiagnosticKind::InvalidNumber, token.span, text);
                None
            }
        }
    }
}
