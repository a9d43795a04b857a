//! Core types: identities, seats, moves, state, RNG, configuration, errors.
//!
//! Nothing in here knows the movement rules; `rules` builds on these types.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Capture, Move, TurnRecord};
pub use config::{BotConfig, EngineConfig};
pub use error::{EngineError, EngineResult};
pub use player::{Player, PlayerIdentity, SeatId, TOKENS_PER_PLAYER};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use state::{MatchState, MatchStatus, TurnPhase, MAX_PLAYERS, MIN_PLAYERS};
