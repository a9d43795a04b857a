//! Match lifecycle: create, join, fill with bots, start, and route in-match
//! actions to the turn engine.
//!
//! ## Identities
//!
//! Human identities are positive and come from the host's account system.
//! Automated seats get `-(seat + 1)`, so any negative identity handed to
//! `create_match` or `join_match` is refused.
//!
//! ## Randomness
//!
//! The manager owns one `GameRng` seeded from [`EngineConfig::seed`]. It
//! draws match codes from it and derives an independent dice stream for
//! each new match, so a seeded manager replays identically.

use log::{debug, info};

use super::store::{InMemoryMatchStore, MatchStore};
use crate::board::Color;
use crate::bots::{BotPolicy, HeuristicBot};
use crate::core::{
    EngineConfig, EngineError, EngineResult, GameRng, MatchState, MatchStatus, PlayerIdentity,
    SeatId, MAX_PLAYERS, MIN_PLAYERS,
};
use crate::rules::{AutoTurn, MoveOutcome, RollOutcome, TurnEngine};

/// Characters match codes are drawn from.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Color request when joining a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorPreference {
    /// Any free color, picked at random.
    #[default]
    Any,
    /// This color if free, otherwise a random free one.
    Prefer(Color),
    /// This color or nothing.
    Require(Color),
}

/// Owns the match store and the turn engine.
pub struct MatchManager<S: MatchStore = InMemoryMatchStore, P: BotPolicy = HeuristicBot> {
    store: S,
    engine: TurnEngine<P>,
    config: EngineConfig,
    rng: GameRng,
}

impl MatchManager {
    /// In-memory manager with the heuristic bot.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let engine = TurnEngine::new(&config);
        Self::with_parts(config, InMemoryMatchStore::new(), engine)
    }
}

impl Default for MatchManager {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: MatchStore, P: BotPolicy> MatchManager<S, P> {
    /// Manager over a caller-supplied store and engine.
    #[must_use]
    pub fn with_parts(config: EngineConfig, store: S, engine: TurnEngine<P>) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            store,
            engine,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine<P> {
        &self.engine
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create a forming match with `host` seated on Red.
    pub fn create_match(
        &mut self,
        host: PlayerIdentity,
        max_players: usize,
    ) -> EngineResult<MatchState> {
        if host.is_automated() {
            return Err(EngineError::ReservedIdentity(host));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&max_players) {
            return Err(EngineError::InvalidPlayerCount(max_players));
        }

        let code = self.generate_code()?;
        let mut state = MatchState::new(code.clone(), max_players, self.rng.derive());
        state.add_player(host, Color::Red)?;
        info!("{} created match {} for {} players", host, code, max_players);

        self.store.insert(state.clone());
        Ok(state)
    }

    /// Seat `identity` in a forming match. Returns the assigned color.
    pub fn join_match(
        &mut self,
        code: &str,
        identity: PlayerIdentity,
        preference: ColorPreference,
    ) -> EngineResult<Color> {
        let state = fetch_mut(&mut self.store, code)?;
        if identity.is_automated() {
            return Err(EngineError::ReservedIdentity(identity));
        }
        if state.status != MatchStatus::Forming {
            return Err(EngineError::AlreadyStarted);
        }
        if state.is_participant(identity) {
            return Err(EngineError::AlreadyInMatch(identity));
        }
        if state.is_full() {
            return Err(EngineError::MatchFull);
        }

        let color = match preference {
            ColorPreference::Require(color) if state.color_taken(color) => {
                return Err(EngineError::ColorTaken)
            }
            ColorPreference::Require(color) | ColorPreference::Prefer(color)
                if !state.color_taken(color) =>
            {
                color
            }
            _ => {
                let free = state.free_colors();
                *state.rng.choose(&free).ok_or(EngineError::MatchFull)?
            }
        };

        state.add_player(identity, color)?;
        info!("{} joined match {} as {}", identity, code, color);
        Ok(color)
    }

    /// Seat automated players on every free color until the match is full.
    /// Returns how many were added.
    pub fn fill_with_automated_players(&mut self, code: &str) -> EngineResult<usize> {
        let state = fetch_mut(&mut self.store, code)?;
        seat_automated(state)
    }

    /// Start a forming match on behalf of one of its participants.
    ///
    /// Returns the automated turns played before the first human roll.
    pub fn start(&mut self, code: &str, requester: PlayerIdentity) -> EngineResult<Vec<AutoTurn>> {
        let state = fetch_mut(&mut self.store, code)?;
        if !state.is_participant(requester) {
            return Err(EngineError::NotAParticipant(requester));
        }
        if self.config.auto_fill_on_start && state.status == MatchStatus::Forming {
            seat_automated(state)?;
        }
        self.engine.begin(state)
    }

    /// Create, fill with `bots` automated players and start in one call.
    pub fn create_bot_match(
        &mut self,
        host: PlayerIdentity,
        bots: usize,
    ) -> EngineResult<MatchState> {
        let seats = bots
            .checked_add(1)
            .ok_or(EngineError::InvalidPlayerCount(bots))?;
        let state = self.create_match(host, seats)?;
        let code = state.code;
        self.fill_with_automated_players(&code)?;
        self.start(&code, host)?;
        self.snapshot(&code)
    }

    // =========================================================================
    // In-match actions
    // =========================================================================

    pub fn roll(&mut self, code: &str, actor: PlayerIdentity) -> EngineResult<RollOutcome> {
        let state = fetch_mut(&mut self.store, code)?;
        self.engine.roll(state, actor)
    }

    pub fn roll_with(
        &mut self,
        code: &str,
        actor: PlayerIdentity,
        dice: u8,
    ) -> EngineResult<RollOutcome> {
        let state = fetch_mut(&mut self.store, code)?;
        self.engine.roll_with(state, actor, dice)
    }

    pub fn apply_move(
        &mut self,
        code: &str,
        actor: PlayerIdentity,
        token: usize,
    ) -> EngineResult<MoveOutcome> {
        let state = fetch_mut(&mut self.store, code)?;
        self.engine.apply_move(state, actor, token)
    }

    // =========================================================================
    // Queries and housekeeping
    // =========================================================================

    /// Owned copy of a match, for display or persistence.
    pub fn snapshot(&self, code: &str) -> EngineResult<MatchState> {
        self.store
            .get(code)
            .cloned()
            .ok_or_else(|| EngineError::MatchNotFound(code.to_string()))
    }

    pub fn remove_match(&mut self, code: &str) -> EngineResult<MatchState> {
        self.store
            .remove(code)
            .ok_or_else(|| EngineError::MatchNotFound(code.to_string()))
    }

    /// Drop every finished match. Returns how many were removed.
    pub fn purge_finished(&mut self) -> usize {
        let finished: Vec<String> = self
            .store
            .codes()
            .into_iter()
            .filter(|code| self.store.get(code).is_some_and(MatchState::is_finished))
            .collect();
        for code in &finished {
            self.store.remove(code);
        }
        if !finished.is_empty() {
            debug!("purged {} finished matches", finished.len());
        }
        finished.len()
    }

    fn generate_code(&mut self) -> EngineResult<String> {
        for _ in 0..self.config.max_code_attempts {
            let code: String = (0..self.config.code_length)
                .map(|_| char::from(CODE_ALPHABET[self.rng.gen_range_usize(0..CODE_ALPHABET.len())]))
                .collect();
            if !self.store.contains(&code) {
                return Ok(code);
            }
        }
        Err(EngineError::CodeSpaceExhausted(self.config.max_code_attempts))
    }
}

fn fetch_mut<'a, S: MatchStore>(store: &'a mut S, code: &str) -> EngineResult<&'a mut MatchState> {
    store
        .get_mut(code)
        .ok_or_else(|| EngineError::MatchNotFound(code.to_string()))
}

/// Seat bots on free colors, in color order, until the match is full.
fn seat_automated(state: &mut MatchState) -> EngineResult<usize> {
    if state.status != MatchStatus::Forming {
        return Err(EngineError::AlreadyStarted);
    }

    let mut added = 0;
    for color in state.free_colors() {
        if state.is_full() {
            break;
        }
        let identity = PlayerIdentity::automated(SeatId::new(state.player_count() as u8));
        state.add_player(identity, color)?;
        added += 1;
    }
    if added > 0 {
        info!("seated {} automated players in match {}", added, state.code);
    }
    Ok(added)
}
