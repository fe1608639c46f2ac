//! Plain-text dump of an automaton, one line per state.
//!
//! ```text
//! S0:
//! S1: 0→S2 1→S3
//! S2 ✓ [x]:
//! ```

use std::fmt::Write;

use super::Automaton;
use crate::Colors;

/// Printer for [`Automaton`] with optional colors.
pub struct AutomatonPrinter<'a> {
    automaton: &'a Automaton,
    colors: Colors,
}

impl<'a> AutomatonPrinter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = &self.colors;
        for (id, state) in self.automaton.states().iter().enumerate() {
            write!(w, "{}", c.state(id as u32))?;
            if state.accepting {
                write!(w, " {}✓{}", c.green, c.reset)?;
            }
            if !state.tags.is_empty() {
                write!(w, " {}[{}]{}", c.green, state.tags.join(", "), c.reset)?;
            }
            w.push(':');
            for (symbol, target) in state.edges() {
                write!(w, " {}{}→{}{}", c.dim, symbol, c.reset, c.state(target))?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

impl Automaton {
    pub fn printer(&self) -> AutomatonPrinter<'_> {
        AutomatonPrinter::new(self)
    }

    /// Uncolored dump, used by snapshot tests.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
