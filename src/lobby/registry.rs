//! Thread-safe registry of running matches.
//!
//! Lookups take the map's read lock only long enough to clone the match's
//! handle; the action itself runs under that match's own mutex. Actions on
//! different matches never wait on each other, and actions on one match
//! are serialized.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::info;
use rustc_hash::FxHashMap;

use crate::bots::{BotPolicy, HeuristicBot};
use crate::core::{EngineConfig, EngineError, EngineResult, MatchState, PlayerIdentity};
use crate::rules::{MoveOutcome, RollOutcome, TurnEngine};

type Handle = Arc<Mutex<MatchState>>;

/// Matches shared across threads.
pub struct SharedMatches<P: BotPolicy = HeuristicBot> {
    matches: RwLock<FxHashMap<String, Handle>>,
    engine: TurnEngine<P>,
}

impl SharedMatches {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_engine(TurnEngine::new(config))
    }
}

impl<P: BotPolicy> SharedMatches<P> {
    #[must_use]
    pub fn with_engine(engine: TurnEngine<P>) -> Self {
        Self {
            matches: RwLock::new(FxHashMap::default()),
            engine,
        }
    }

    /// Register a match under its code, replacing any match with that code.
    pub fn insert(&self, state: MatchState) {
        let code = state.code.clone();
        self.matches
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code.clone(), Arc::new(Mutex::new(state)));
        info!("registered match {}", code);
    }

    /// Unregister a match, returning its final state.
    pub fn remove(&self, code: &str) -> EngineResult<MatchState> {
        let handle = self
            .matches
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(code)
            .ok_or_else(|| EngineError::MatchNotFound(code.to_string()))?;
        let state = handle.lock().unwrap_or_else(PoisonError::into_inner).clone();
        Ok(state)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.read().contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against one match while holding that match's lock.
    pub fn with_match<T>(
        &self,
        code: &str,
        f: impl FnOnce(&TurnEngine<P>, &mut MatchState) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let handle = self.handle(code)?;
        let mut state = handle.lock().unwrap_or_else(PoisonError::into_inner);
        f(&self.engine, &mut *state)
    }

    pub fn roll(&self, code: &str, actor: PlayerIdentity) -> EngineResult<RollOutcome> {
        self.with_match(code, |engine, state| engine.roll(state, actor))
    }

    pub fn roll_with(&self, code: &str, actor: PlayerIdentity, dice: u8) -> EngineResult<RollOutcome> {
        self.with_match(code, |engine, state| engine.roll_with(state, actor, dice))
    }

    pub fn apply_move(
        &self,
        code: &str,
        actor: PlayerIdentity,
        token: usize,
    ) -> EngineResult<MoveOutcome> {
        self.with_match(code, |engine, state| engine.apply_move(state, actor, token))
    }

    pub fn snapshot(&self, code: &str) -> EngineResult<MatchState> {
        self.with_match(code, |_, state| Ok(state.clone()))
    }

    fn handle(&self, code: &str) -> EngineResult<Handle> {
        self.read()
            .get(code)
            .cloned()
            .ok_or_else(|| EngineError::MatchNotFound(code.to_string()))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, FxHashMap<String, Handle>> {
        self.matches.read().unwrap_or_else(PoisonError::into_inner)
    }
}
