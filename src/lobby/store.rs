//! Match storage.
//!
//! The manager never owns a global table: it is handed a `MatchStore` and
//! keeps every match there, keyed by match code.

use rustc_hash::FxHashMap;

use crate::core::MatchState;

/// Keyed storage for match state.
pub trait MatchStore {
    /// Insert a match under its code, returning any match it replaced.
    fn insert(&mut self, state: MatchState) -> Option<MatchState>;

    fn get(&self, code: &str) -> Option<&MatchState>;

    fn get_mut(&mut self, code: &str) -> Option<&mut MatchState>;

    fn remove(&mut self, code: &str) -> Option<MatchState>;

    fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Codes of every stored match, in no particular order.
    fn codes(&self) -> Vec<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process store backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryMatchStore {
    matches: FxHashMap<String, MatchState>,
}

impl InMemoryMatchStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn insert(&mut self, state: MatchState) -> Option<MatchState> {
        self.matches.insert(state.code.clone(), state)
    }

    fn get(&self, code: &str) -> Option<&MatchState> {
        self.matches.get(code)
    }

    fn get_mut(&mut self, code: &str) -> Option<&mut MatchState> {
        self.matches.get_mut(code)
    }

    fn remove(&mut self, code: &str) -> Option<MatchState> {
        self.matches.remove(code)
    }

    fn contains(&self, code: &str) -> bool {
        self.matches.contains_key(code)
    }

    fn codes(&self) -> Vec<String> {
        self.matches.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.matches.len()
    }
}
