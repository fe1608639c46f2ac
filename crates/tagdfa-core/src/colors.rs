//! ANSI colors for automaton dumps and scan traces.
//!
//! - Blue: state ids
//! - Green: accepting marks and tag names
//! - Dim: symbols, arrows, dead transitions
//! - Reset: return to default

/// ANSI color palette. Only standard 16-color codes are used.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// `S{id}` in the state color.
    pub fn state(&self, id: u32) -> String {
        format!("{}S{}{}", self.blue, id, self.reset)
    }
}
