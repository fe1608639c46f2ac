//! Token kinds for the pattern language.

use logos::Logos;

/// All token kinds. Logos derives recognition for everything except the
/// post-processing kinds at the end.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    /// Tag prefix `name:`
    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token(";")]
    Semicolon,

    #[token("|")]
    Pipe,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    /// Literal symbol value or repetition bound
    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    /// Coalesced unrecognized characters
    Garbage,
    /// Lookahead past the end of input
    Error,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Whether an expression can start with this token.
    #[inline]
    pub fn starts_term(self) -> bool {
        matches!(self, Self::Id | Self::Number | Self::ParenOpen)
    }

    /// Human-readable name for "expected" messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::ParenOpen => "`(`",
            Self::ParenClose => "`)`",
            Self::BraceOpen => "`{`",
            Self::BraceClose => "`}`",
            Self::Comma => "`,`",
            Self::Colon => "`:`",
            Self::Equals => "`=`",
            Self::Semicolon => "`;`",
            Self::Pipe => "`|`",
            Self::Star => "`*`",
            Self::Plus => "`+`",
            Self::Question => "`?`",
            Self::Number => "number",
            Self::Id => "name",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Garbage => "unrecognized input",
            Self::Error => "end of input",
        }
    }
}
