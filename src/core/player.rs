//! Player identities and seats.
//!
//! ## PlayerIdentity
//!
//! Opaque account key handed in by the host. Negative values are reserved
//! for automated players.
//!
//! ## SeatId / Player
//!
//! A seat is a player's place in turn order. Each seat owns one color and
//! four tokens.

use serde::{Deserialize, Serialize};

use crate::board::{Color, TokenPosition};

/// Tokens each player races home.
pub const TOKENS_PER_PLAYER: usize = 4;

/// External account key. Negative ids denote automated players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerIdentity(pub i64);

impl PlayerIdentity {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Identity used for the bot seated at `seat`.
    ///
    /// ```
    /// use ludo_engine::core::{PlayerIdentity, SeatId};
    ///
    /// let bot = PlayerIdentity::automated(SeatId::new(1));
    /// assert_eq!(bot, PlayerIdentity::new(-2));
    /// assert!(bot.is_automated());
    /// ```
    #[must_use]
    pub const fn automated(seat: SeatId) -> Self {
        Self(-(seat.0 as i64) - 1)
    }

    /// Whether this identity falls in the reserved automated range.
    #[must_use]
    pub const fn is_automated(self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_automated() {
            write!(f, "bot#{}", -self.0)
        } else {
            write!(f, "user#{}", self.0)
        }
    }
}

/// Seat index in turn order (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub u8);

impl SeatId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat that follows this one in a match of `seat_count` seats.
    #[must_use]
    pub const fn next(self, seat_count: usize) -> Self {
        Self(((self.0 as usize + 1) % seat_count) as u8)
    }

    /// Iterate over all seat IDs for a match with `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub identity: PlayerIdentity,
    pub color: Color,
    pub tokens: [TokenPosition; TOKENS_PER_PLAYER],
    /// Position in turn order.
    pub seat: SeatId,
    /// Driven by the bot policy instead of host input.
    pub automated: bool,
}

impl Player {
    /// Seat a player with all tokens at home.
    #[must_use]
    pub fn new(identity: PlayerIdentity, color: Color, seat: SeatId) -> Self {
        Self {
            identity,
            color,
            tokens: [TokenPosition::HOME; TOKENS_PER_PLAYER],
            seat,
            automated: identity.is_automated(),
        }
    }

    /// Position of one token.
    #[must_use]
    pub fn token(&self, index: usize) -> TokenPosition {
        self.tokens[index]
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.tokens.iter().all(|t| t.is_finished())
    }

    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_finished()).count()
    }

    #[must_use]
    pub fn home_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_home()).count()
    }
}
