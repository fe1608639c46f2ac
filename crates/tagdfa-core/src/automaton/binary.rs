//! Compact binary encoding using postcard.

use super::{Automaton, AutomatonError};

impl Automaton {
    /// Deserialize from binary format, re-validating the structure.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, AutomatonError> {
        let decoded: Automaton = postcard::from_bytes(bytes)?;
        decoded.validate()?;
        Ok(decoded)
    }

    /// Serialize to binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}
