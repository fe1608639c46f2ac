//! Pattern compilation facade.

use serde::{Deserialize, Serialize};
use tagdfa_core::Automaton;

use crate::build::build_with_state_limit;
use crate::parser::lexer::lex;
use crate::parser::{ParseResult, Parser};
use crate::program::Program;
use crate::{Error, Result};

const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
const DEFAULT_RECURSION_FUEL: u32 = 512;
const DEFAULT_NODE_LIMIT: u32 = 1_000_000;
const DEFAULT_STATE_LIMIT: u32 = 65_536;

/// Resource limits for one compilation. `None` means unlimited.
///
/// Deserializes with defaults for missing fields, so a host configuration
/// only needs to name the limits it overrides:
///
/// ```json
/// { "state_limit": 1024 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileLimits {
    /// Parser token budget. Never replenishes.
    pub exec_fuel: Option<u32>,
    /// Parser nesting depth. Restores when a group closes.
    pub recursion_fuel: Option<u32>,
    /// Expression arena size during lowering and resolution.
    pub node_limit: Option<u32>,
    /// Automaton size, dead state included.
    pub state_limit: Option<u32>,
}

impl Default for CompileLimits {
    fn default() -> Self {
        Self {
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            node_limit: Some(DEFAULT_NODE_LIMIT),
            state_limit: Some(DEFAULT_STATE_LIMIT),
        }
    }
}

impl CompileLimits {
    pub fn unlimited() -> Self {
        Self {
            exec_fuel: None,
            recursion_fuel: None,
            node_limit: None,
            state_limit: None,
        }
    }
}

/// Configured compilation of one pattern source.
///
/// Create with [`new`](Self::new), add host symbols and limits, then call
/// [`parse`](Self::parse) for the resolved [`Program`] or
/// [`build`](Self::build) for the automaton.
#[derive(Debug, Clone)]
pub struct PatternBuilder<'a> {
    source: &'a str,
    symbols: Vec<(&'a str, u32)>,
    limits: CompileLimits,
}

impl<'a> PatternBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            symbols: Vec::new(),
            limits: CompileLimits::default(),
        }
    }

    /// Bind `name` to the literal `value` before the first declaration.
    pub fn with_symbol(mut self, name: &'a str, value: u32) -> Self {
        self.symbols.push((name, value));
        self
    }

    pub fn with_symbols(mut self, symbols: &[(&'a str, u32)]) -> Self {
        self.symbols.extend_from_slice(symbols);
        self
    }

    pub fn with_limits(mut self, limits: CompileLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set execution fuel limit. None = infinite.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.limits.exec_fuel = limit;
        self
    }

    /// Set recursion depth limit. None = infinite.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.limits.recursion_fuel = limit;
        self
    }

    pub fn with_node_limit(mut self, limit: Option<u32>) -> Self {
        self.limits.node_limit = limit;
        self
    }

    pub fn with_state_limit(mut self, limit: Option<u32>) -> Self {
        self.limits.state_limit = limit;
        self
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn limits(&self) -> &CompileLimits {
        &self.limits
    }

    /// Parse and resolve.
    ///
    /// Syntax errors are returned together as `PatternParseError`; render
    /// them with [`Diagnostics::printer`](crate::Diagnostics::printer).
    pub fn parse(&self) -> Result<Program> {
        let parser = Parser::new(self.source, lex(self.source))
            .with_exec_fuel(self.limits.exec_fuel)
            .with_recursion_fuel(self.limits.recursion_fuel);

        let ParseResult {
            root, diagnostics, ..
        } = parser.parse()?;
        if diagnostics.has_errors() {
            return Err(Error::PatternParseError(diagnostics));
        }

        Program::resolve_with_limit(&root, &self.symbols, self.limits.node_limit)
    }

    /// Parse, resolve and build the automaton.
    pub fn build(&self) -> Result<Automaton> {
        let program = self.parse()?;
        build_with_state_limit(&program, self.limits.state_limit)
    }
}
