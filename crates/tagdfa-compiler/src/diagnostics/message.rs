use std::ops::Range;

/// Byte range into the pattern source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn empty(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start as u32, range.end as u32)
    }
}

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// At most one diagnostic is reported per source position, so the first kind
/// reported at a position wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Cascading: everything after an unclosed delimiter is suspect
    UnclosedParen,
    UnclosedBrace,

    // User omitted something required
    ExpectedExpression,
    ExpectedName,
    ExpectedNumber,

    // User wrote something that doesn't belong
    UnexpectedToken,
    InvalidNumber,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedName => "expected a name",
            Self::ExpectedNumber => "expected a number",
            Self::UnexpectedToken => "unexpected token",
            Self::InvalidNumber => "invalid number",
        }
    }

    /// Template for custom messages. `{}` is replaced by the caller's detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::InvalidNumber => "`{}` does not fit in 32 bits".to_string(),
            _ => format!("{}; {{}}", self.fallback_message()),
        }
    }

    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub(crate) fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range underlined in rendered output.
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self {
            kind,
            span,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.span.start, self.span.end, self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message, related.span.start, related.span.end
            )?;
        }
        Ok(())
    }
}
