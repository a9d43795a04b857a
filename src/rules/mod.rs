//! Game rules.
//!
//! - `moves`: pure legal-move generation over a match snapshot
//! - `engine`: the turn engine that rolls, moves, captures and plays bots
//!
//! The lobby calls into `TurnEngine` for every in-match action and never
//! touches token positions itself.

pub mod engine;
pub mod moves;

pub use engine::{AutoTurn, MoveOutcome, RollOutcome, TurnEngine};
pub use moves::{has_legal_move, legal_moves, resolve_move, MoveList};
