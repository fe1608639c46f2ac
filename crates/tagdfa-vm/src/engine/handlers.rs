//! Tag callbacks for [`StateMachine::apply`](super::StateMachine::apply).

use std::collections::HashMap;
use std::fmt;

use tagdfa_core::SymbolValue;

/// Called with `(start, end, input[start..=end])` for each match carrying
/// the tag it is registered for.
pub type Handler<'h> = Box<dyn FnMut(usize, usize, &[SymbolValue]) + 'h>;

/// Tag name to callback.
#[derive(Default)]
pub struct Handlers<'h> {
    map: HashMap<String, Handler<'h>>,
}

impl<'h> Handlers<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn on(
        mut self,
        tag: impl Into<String>,
        handler: impl FnMut(usize, usize, &[SymbolValue]) + 'h,
    ) -> Self {
        self.insert(tag, handler);
        self
    }

    /// Registers `handler` for `tag`, replacing any previous one.
    pub fn insert(
        &mut self,
        tag: impl Into<String>,
        handler: impl FnMut(usize, usize, &[SymbolValue]) + 'h,
    ) {
        self.map.insert(tag.into(), Box::new(handler));
    }

    pub fn remove(&mut self, tag: &str) -> Option<Handler<'h>> {
        self.map.remove(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.map.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn get_mut(&mut self, tag: &str) -> Option<&mut Handler<'h>> {
        self.map.get_mut(tag)
    }
}

impl fmt::Debug for Handlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.map.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("Handlers").field("tags", &tags).finish()
    }
}
