//! Moves and the per-match action log.
//!
//! A `Move` is fully resolved when it is generated: it already knows where
//! the token lands, which opponent tokens it sends home and whether it
//! finishes the token. Applying it never recomputes anything.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::SeatId;
use crate::board::TokenPosition;

/// An opponent token a move sends back home.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub seat: SeatId,
    pub token: usize,
    /// Where the victim stood before being sent home.
    pub from: TokenPosition,
}

/// A legal move for the player to act.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub token: usize,
    pub from: TokenPosition,
    pub to: TokenPosition,
    /// Victims on the destination cell. Usually zero or one; a stacked
    /// opponent pair on an unsafe cell goes home together.
    pub captures: SmallVec<[Capture; 2]>,
    pub enters_finish: bool,
}

impl Move {
    /// A move with no captures.
    #[must_use]
    pub fn new(token: usize, from: TokenPosition, to: TokenPosition) -> Self {
        Self {
            token,
            from,
            to,
            captures: SmallVec::new(),
            enters_finish: to.is_finished(),
        }
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Brings a token out of home onto its entry cell.
    #[must_use]
    pub fn is_deploy(&self) -> bool {
        self.from.is_home()
    }
}

/// One entry in a match's history: a roll and what came of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub seat: SeatId,
    pub dice: u8,
    /// `None` when the roll had no legal move and the turn passed.
    pub applied: Option<Move>,
    /// Turn number the roll belongs to.
    pub turn: u32,
    /// Sequence number within the turn (extra rolls after a six).
    pub sequence: u32,
}

impl TurnRecord {
    #[must_use]
    pub fn new(seat: SeatId, dice: u8, applied: Option<Move>, turn: u32, sequence: u32) -> Self {
        Self {
            seat,
            dice,
            applied,
            turn,
            sequence,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.applied.is_none()
    }
}
