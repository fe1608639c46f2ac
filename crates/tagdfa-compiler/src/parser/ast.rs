//! Abstract syntax tree for pattern declarations.
//!
//! This is the contract between the front end and the program model: an
//! ordered list of statements. Callers that bring their own parser can build
//! a [`Root`] directly.

use std::fmt;

use crate::diagnostics::Span;

/// Repetition operator applied to a sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatOp {
    /// `*`: zero or more
    Star,
    /// `+`: one or more
    Plus,
    /// `?`: zero or one
    Question,
}

impl RepeatOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Star => "*",
            Self::Plus => "+",
            Self::Question => "?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assignment(Assignment),
    Comment(Comment),
}

/// `name = expr;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}

/// `# ...` at statement level. Ignored by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Symbol value
    Literal(u32),
    /// Reference to an earlier declaration
    Ref(String),
    /// `name:body`, zero-width marker reported when `body` matches
    Tag { name: String, body: Box<Expr> },
    /// `a | b | c`
    Alt(Vec<Expr>),
    /// `a b c`
    Concat(Vec<Expr>),
    Repeat { inner: Box<Expr>, op: RepeatOp },
    /// `{min,max}`; `max == None` is unbounded
    Range {
        inner: Box<Expr>,
        min: u32,
        max: Option<u32>,
    },
}

impl Expr {
    pub fn literal(value: u32) -> Self {
        Self::Literal(value)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Ref(name.into())
    }

    pub fn tag(name: impl Into<String>, body: Expr) -> Self {
        Self::Tag {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn repeat(inner: Expr, op: RepeatOp) -> Self {
        Self::Repeat {
            inner: Box::new(inner),
            op,
        }
    }

    pub fn range(inner: Expr, min: u32, max: Option<u32>) -> Self {
        Self::Range {
            inner: Box::new(inner),
            min,
            max,
        }
    }
}

impl Root {
    /// Assignments in declaration order, comments skipped.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Assignment(a) => Some(a),
            Statement::Comment(_) => None,
        })
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match stmt {
                Statement::Assignment(a) => write!(f, "(assign {} {})", a.name, a.value)?,
                Statement::Comment(c) => write!(f, "(comment {:?})", c.text)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => write!(f, "{v}"),
            Self::Ref(name) => write!(f, "{name}"),
            Self::Tag { name, body } => write!(f, "(tag {name} {body})"),
            Self::Alt(items) => write_list(f, "alt", items),
            Self::Concat(items) => write_list(f, "concat", items),
            Self::Repeat { inner, op } => write!(f, "({} {inner})", op.as_str()),
            Self::Range { inner, min, max } => match max {
                Some(max) => write!(f, "(range {min} {max} {inner})"),
                None => write!(f, "(range {min} _ {inner})"),
            },
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, head: &str, items: &[Expr]) -> fmt::Result {
    write!(f, "({head}")?;
    for item in items {
        write!(f, " {item}")?;
    }
    write!(f, ")")
}
