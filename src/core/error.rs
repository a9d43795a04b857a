//! Engine errors.
//!
//! Every rule violation comes back to the caller as an [`EngineError`];
//! nothing is retried or swallowed inside the engine, and a failed
//! validation leaves the match untouched.

use thiserror::Error;

use super::player::PlayerIdentity;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("match {0} not found")]
    MatchNotFound(String),

    #[error("match is full")]
    MatchFull,

    #[error("match has already started")]
    AlreadyStarted,

    #[error("{0} is already seated in this match")]
    AlreadyInMatch(PlayerIdentity),

    #[error("requested color is taken")]
    ColorTaken,

    #[error("a match seats 2 to 4 players, not {0}")]
    InvalidPlayerCount(usize),

    #[error("{0} is reserved for automated players")]
    ReservedIdentity(PlayerIdentity),

    #[error("{0} is not part of this match")]
    NotAParticipant(PlayerIdentity),

    #[error("match has not started")]
    MatchNotActive,

    #[error("it is not {0}'s turn")]
    OutOfTurn(PlayerIdentity),

    #[error("dice already rolled; move first")]
    RollAlreadyPending,

    #[error("roll the dice first")]
    NoPendingRoll,

    #[error("dice value {0} is outside 1..=6")]
    InvalidDice(u8),

    #[error("token {0} has no legal move for this roll")]
    InvalidMove(usize),

    #[error("need at least 2 players to start")]
    NeedAtLeastTwoPlayers,

    #[error("game already finished")]
    GameAlreadyFinished,

    #[error("could not find a free match code after {0} attempts")]
    CodeSpaceExhausted(usize),

    #[error("automated seat rolled {0} sixes in a row; aborting auto-play")]
    AutoPlayRunaway(u32),
}

impl EngineError {
    /// A defect signal rather than a rule violation by the caller.
    #[must_use]
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, Self::AutoPlayRunaway(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::OutOfTurn(PlayerIdentity::new(4)).to_string(),
            "it is not user#4's turn"
        );
        assert_eq!(EngineError::InvalidMove(2).to_string(), "token 2 has no legal move for this roll");
        assert_eq!(
            EngineError::MatchNotFound("ABC123".into()).to_string(),
            "match ABC123 not found"
        );
    }

    #[test]
    fn test_internal_fault_classification() {
        assert!(EngineError::AutoPlayRunaway(17).is_internal_fault());
        assert!(!EngineError::OutOfTurn(PlayerIdentity::new(1)).is_internal_fault());
        assert!(!EngineError::GameAlreadyFinished.is_internal_fault());
    }
}
