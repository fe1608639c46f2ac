//! Tracing infrastructure for debugging scans.
//!
//! The tracer is a zero-cost abstraction: with `NoopTracer` every hook is an
//! `#[inline(always)]` empty function and the calls disappear. `PrintTracer`
//! collects one line per event for display.

use tagdfa_core::{Colors, StateId, SymbolValue};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: one line per scan attempt outcome (match or miss).
    #[default]
    Default,
    /// Verbose (-v): also attempt starts, dead transitions and accepts.
    Verbose,
    /// Very verbose (-vv): also every transition taken.
    VeryVerbose,
}

/// Tracer trait for scan instrumentation.
///
/// Each method is called at a specific point during a scan:
/// - `trace_attempt` - a scan attempt starts at `start`
/// - `trace_step` - a symbol moved the automaton to a live state
/// - `trace_dead` - a symbol led to the dead state, ending the attempt
/// - `trace_accept` - the state reached after `pos` is accepting
/// - `trace_match` - the attempt produced a match
/// - `trace_miss` - the attempt never reached an accepting state
pub trait Tracer {
    fn trace_attempt(&mut self, start: usize);

    fn trace_step(&mut self, pos: usize, symbol: SymbolValue, from: StateId, to: StateId);

    fn trace_dead(&mut self, pos: usize, symbol: SymbolValue, from: StateId);

    fn trace_accept(&mut self, pos: usize, state: StateId);

    fn trace_match(&mut self, start: usize, end: usize, tags: &[String]);

    fn trace_miss(&mut self, start: usize);
}

/// No-op tracer that gets optimized away completely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_attempt(&mut self, _start: usize) {}

    #[inline(always)]
    fn trace_step(&mut self, _pos: usize, _symbol: SymbolValue, _from: StateId, _to: StateId) {}

    #[inline(always)]
    fn trace_dead(&mut self, _pos: usize, _symbol: SymbolValue, _from: StateId) {}

    #[inline(always)]
    fn trace_accept(&mut self, _pos: usize, _state: StateId) {}

    #[inline(always)]
    fn trace_match(&mut self, _start: usize, _end: usize, _tags: &[String]) {}

    #[inline(always)]
    fn trace_miss(&mut self, _start: usize) {}
}

/// Lets a caller keep ownership of its tracer across scans.
impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline(always)]
    fn trace_attempt(&mut self, start: usize) {
        (**self).trace_attempt(start);
    }

    #[inline(always)]
    fn trace_step(&mut self, pos: usize, symbol: SymbolValue, from: StateId, to: StateId) {
        (**self).trace_step(pos, symbol, from, to);
    }

    #[inline(always)]
    fn trace_dead(&mut self, pos: usize, symbol: SymbolValue, from: StateId) {
        (**self).trace_dead(pos, symbol, from);
    }

    #[inline(always)]
    fn trace_accept(&mut self, pos: usize, state: StateId) {
        (**self).trace_accept(pos, state);
    }

    #[inline(always)]
    fn trace_match(&mut self, start: usize, end: usize, tags: &[String]) {
        (**self).trace_match(start, end, tags);
    }

    #[inline(always)]
    fn trace_miss(&mut self, start: usize) {
        (**self).trace_miss(start);
    }
}

/// Tracer that collects a human-readable scan log.
///
/// ```text
/// @1
///   1: 0 S1→S2
///   2: 1 S2→S3
///   ✓ S3 at 2
///   3: 1 S3→✗
/// match 1..=2
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            verbosity,
            colors,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Print all trace lines to stdout.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn verbose(&self) -> bool {
        self.verbosity != Verbosity::Default
    }

    fn very_verbose(&self) -> bool {
        self.verbosity == Verbosity::VeryVerbose
    }
}

impl Tracer for PrintTracer {
    fn trace_attempt(&mut self, start: usize) {
        if self.verbose() {
            let c = &self.colors;
            self.lines.push(format!("{}@{}{}", c.dim, start, c.reset));
        }
    }

    fn trace_step(&mut self, pos: usize, symbol: SymbolValue, from: StateId, to: StateId) {
        if self.very_verbose() {
            let c = &self.colors;
            self.lines.push(format!(
                "  {}{}:{} {} {}→{}",
                c.dim,
                pos,
                c.reset,
                symbol,
                c.state(from),
                c.state(to)
            ));
        }
    }

    fn trace_dead(&mut self, pos: usize, symbol: SymbolValue, from: StateId) {
        if self.verbose() {
            let c = &self.colors;
            self.lines.push(format!(
                "  {}{}:{} {} {}→✗",
                c.dim,
                pos,
                c.reset,
                symbol,
                c.state(from)
            ));
        }
    }

    fn trace_accept(&mut self, pos: usize, state: StateId) {
        if self.verbose() {
            let c = &self.colors;
            self.lines.push(format!(
                "  {}✓{} {} at {}",
                c.green,
                c.reset,
                c.state(state),
                pos
            ));
        }
    }

    fn trace_match(&mut self, start: usize, end: usize, tags: &[String]) {
        let c = &self.colors;
        let mut line = format!("{}match{} {}..={}", c.green, c.reset, start, end);
        if !tags.is_empty() {
            line.push_str(&format!(" [{}]", tags.join(", ")));
        }
        self.lines.push(line);
    }

    fn trace_miss(&mut self, start: usize) {
        let c = &self.colors;
        self.lines.push(format!("{}miss{} {}", c.dim, c.reset, start));
    }
}
