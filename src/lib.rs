//! # ludo-engine
//!
//! Authoritative turn engine for four-color Ludo matches, with a lobby
//! layer for creating, joining and starting matches and built-in bots for
//! empty seats.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the rules**: hosts supply identities and dice requests;
//!    every token move, capture, turn change and victory is decided here.
//!
//! 2. **All-or-nothing operations**: every call validates before it
//!    mutates. A rejected call leaves the match untouched.
//!
//! 3. **Injected collaborators**: storage (`MatchStore`) and bot behavior
//!    (`BotPolicy`) are traits, with in-memory and heuristic defaults.
//!
//! ## Board
//!
//! Each color walks its own 0..=56 path: 0..=50 on the shared 52-cell
//! track, 51..=56 on a private home stretch, 57 once finished. Colors
//! enter the shared track 13 cells apart. A six is needed to leave home
//! and grants another roll after any move.
//!
//! ## Modules
//!
//! - `board`: colors, token positions, track geometry and safe cells
//! - `core`: identities, seats, moves, match state, RNG, config, errors
//! - `rules`: legal move generation and the turn engine
//! - `bots`: move selection for automated seats
//! - `lobby`: match lifecycle, storage and the thread-safe registry

pub mod board;
pub mod bots;
pub mod core;
pub mod lobby;
pub mod rules;

// Re-export commonly used types
pub use crate::board::{Color, TokenPosition, Zone};

pub use crate::core::{
    BotConfig, Capture, EngineConfig, EngineError, EngineResult, GameRng, GameRngState, MatchState,
    MatchStatus, Move, Player, PlayerIdentity, SeatId, TurnPhase, TurnRecord,
};

pub use crate::rules::{legal_moves, AutoTurn, MoveList, MoveOutcome, RollOutcome, TurnEngine};

pub use crate::bots::{BotPolicy, HeuristicBot, UniformBot};

pub use crate::lobby::{ColorPreference, InMemoryMatchStore, MatchManager, MatchStore, SharedMatches};
