//! JSON encoding in the shape consumed by graph renderers.
//!
//! Parallel arrays indexed by state:
//!
//! ```json
//! { "alphabetSize": 2, "stateTable": [[0, 0], [2, 0], [0, 0]],
//!   "accepting": [false, false, true], "tags": [[], [], ["x"]] }
//! ```

use serde::{Deserialize, Serialize};

use super::{Automaton, AutomatonError, State, StateId};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAutomaton {
    alphabet_size: u32,
    state_table: Vec<Vec<StateId>>,
    accepting: Vec<bool>,
    tags: Vec<Vec<String>>,
}

impl Automaton {
    /// Serialize to the renderer JSON shape.
    pub fn to_json(&self) -> String {
        let raw = RawAutomaton {
            alphabet_size: self.alphabet_size,
            state_table: self.state_table(),
            accepting: self.accepting(),
            tags: self.tag_sets(),
        };
        serde_json::to_string(&raw).expect("serialization should not fail")
    }

    /// Parse and validate the renderer JSON shape.
    pub fn from_json(json: &str) -> Result<Self, AutomatonError> {
        let raw: RawAutomaton = serde_json::from_str(json)?;

        let count = raw.state_table.len();
        if raw.accepting.len() != count || raw.tags.len() != count {
            return Err(AutomatonError::Malformed(format!(
                "parallel arrays differ in length: {} rows, {} accepting flags, {} tag sets",
                count,
                raw.accepting.len(),
                raw.tags.len()
            )));
        }

        let states = raw
            .state_table
            .into_iter()
            .zip(raw.accepting)
            .zip(raw.tags)
            .map(|((transitions, accepting), tags)| State {
                transitions,
                accepting,
                tags,
            })
            .collect();

        Automaton::new(raw.alphabet_size, states)
    }
}
