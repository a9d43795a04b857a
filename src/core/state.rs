//! Match state.
//!
//! ## MatchState
//!
//! The authoritative record of one match:
//! - Seats in turn order, each with a color and four tokens
//! - Lifecycle status and whose turn it is
//! - The pending dice value and the legal moves computed for it
//! - Winner, turn counters, dice RNG and the action history
//!
//! Only the turn engine and the lobby mutate it. Everything is `serde`
//! serializable so a store can persist a snapshot and hand it back; the
//! history uses `im` vectors so cloning a snapshot stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Move, TurnRecord};
use super::error::{EngineError, EngineResult};
use super::player::{Player, PlayerIdentity, SeatId, TOKENS_PER_PLAYER};
use super::rng::GameRng;
use crate::board::{absolute_cell, Color, TokenPosition};

/// Smallest seat count a match can start with.
pub const MIN_PLAYERS: usize = 2;

/// Largest seat count (one per color).
pub const MAX_PLAYERS: usize = 4;

/// Match lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Seats are being filled.
    #[default]
    Forming,
    /// Turns are being played.
    Active,
    /// A player brought all four tokens home. Terminal.
    Finished,
}

impl MatchStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forming => "forming",
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Sub-state of the current turn while a match is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingRoll,
    AwaitingMove,
}

/// Full state of a single match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    /// Shareable match code.
    pub code: String,

    /// Seats the match was created for.
    pub max_players: usize,

    /// Seated players in turn order.
    players: Vec<Player>,

    pub status: MatchStatus,

    /// Seat whose turn it is.
    pub current: SeatId,

    /// Pending dice value; 0 when no roll is waiting for a move.
    pub dice: u8,

    /// Legal moves for the pending roll.
    pub pending_moves: SmallVec<[Move; 4]>,

    pub winner: Option<PlayerIdentity>,

    /// Turn number (starts at 1 when the match starts).
    pub turn_number: u32,

    /// Roll sequence within the current turn.
    pub sequence: u32,

    /// Sixes rolled back to back by the current seat.
    pub consecutive_sixes: u32,

    /// Dice and tie-break stream.
    pub rng: GameRng,

    pub history: Vector<TurnRecord>,
}

impl MatchState {
    /// Create an empty match in [`MatchStatus::Forming`].
    #[must_use]
    pub fn new(code: impl Into<String>, max_players: usize, rng: GameRng) -> Self {
        Self {
            code: code.into(),
            max_players,
            players: Vec::with_capacity(max_players),
            status: MatchStatus::Forming,
            current: SeatId::new(0),
            dice: 0,
            pending_moves: SmallVec::new(),
            winner: None,
            turn_number: 0,
            sequence: 0,
            consecutive_sixes: 0,
            rng,
            history: Vector::new(),
        }
    }

    // === Seats ===

    /// Seat a player with the given color.
    ///
    /// Validates everything before touching the seat list.
    pub fn add_player(&mut self, identity: PlayerIdentity, color: Color) -> EngineResult<SeatId> {
        if self.status != MatchStatus::Forming {
            return Err(EngineError::AlreadyStarted);
        }
        if self.seat_of(identity).is_some() {
            return Err(EngineError::AlreadyInMatch(identity));
        }
        if self.is_full() {
            return Err(EngineError::MatchFull);
        }
        if self.color_taken(color) {
            return Err(EngineError::ColorTaken);
        }

        let seat = SeatId::new(self.players.len() as u8);
        self.players.push(Player::new(identity, color, seat));
        Ok(seat)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: SeatId) -> &Player {
        &self.players[seat.index()]
    }

    pub(crate) fn player_mut(&mut self, seat: SeatId) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Place a seat's tokens directly, bypassing the rules.
    ///
    /// For restoring positions and setting up board scenarios. Pending
    /// moves are not recomputed, so call this between turns.
    pub fn set_tokens(&mut self, seat: SeatId, tokens: [TokenPosition; TOKENS_PER_PLAYER]) {
        self.player_mut(seat).tokens = tokens;
    }

    /// Iterate over all seat IDs.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> {
        SeatId::all(self.players.len())
    }

    /// Seat held by an identity.
    #[must_use]
    pub fn seat_of(&self, identity: PlayerIdentity) -> Option<SeatId> {
        self.players
            .iter()
            .find(|p| p.identity == identity)
            .map(|p| p.seat)
    }

    #[must_use]
    pub fn is_participant(&self, identity: PlayerIdentity) -> bool {
        self.seat_of(identity).is_some()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    #[must_use]
    pub fn color_taken(&self, color: Color) -> bool {
        self.players.iter().any(|p| p.color == color)
    }

    /// Colors nobody has claimed yet, in seating order.
    #[must_use]
    pub fn free_colors(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&c| !self.color_taken(c))
            .collect()
    }

    // === Turn ===

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    #[must_use]
    pub fn is_current(&self, identity: PlayerIdentity) -> bool {
        self.players
            .get(self.current.index())
            .is_some_and(|p| p.identity == identity)
    }

    /// Turn sub-state; `None` outside [`MatchStatus::Active`].
    #[must_use]
    pub fn phase(&self) -> Option<TurnPhase> {
        match (self.status, self.dice) {
            (MatchStatus::Active, 0) => Some(TurnPhase::AwaitingRoll),
            (MatchStatus::Active, _) => Some(TurnPhase::AwaitingMove),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MatchStatus::Active
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    // === Board queries ===

    /// Opponent tokens standing on an absolute main-track cell.
    pub fn occupants(&self, cell: u8, except: SeatId) -> impl Iterator<Item = (SeatId, usize)> + '_ {
        self.players
            .iter()
            .filter(move |p| p.seat != except)
            .flat_map(move |p| {
                p.tokens
                    .iter()
                    .enumerate()
                    .filter(move |(_, t)| absolute_cell(p.color, **t) == Some(cell))
                    .map(move |(i, _)| (p.seat, i))
            })
    }

    // === History ===

    /// Append a roll outcome to the history.
    pub(crate) fn record(&mut self, applied: Option<Move>) {
        let record = TurnRecord::new(self.current, self.dice, applied, self.turn_number, self.sequence);
        self.history.push_back(record);
        self.sequence += 1;
    }
}

impl PartialEq for MatchState {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.max_players == other.max_players
            && self.players == other.players
            && self.status == other.status
            && self.current == other.current
            && self.dice == other.dice
            && self.pending_moves == other.pending_moves
            && self.winner == other.winner
            && self.turn_number == other.turn_number
            && self.sequence == other.sequence
            && self.consecutive_sixes == other.consecutive_sixes
            && self.rng.state() == other.rng.state()
            && self.history == other.history
    }
}

impl Eq for MatchState {}
