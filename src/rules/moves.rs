//! Legal move generation.
//!
//! Pure functions over a `MatchState` snapshot: nothing here mutates.
//! Each generated `Move` carries its destination and its capture victims,
//! so the turn engine applies it without recomputing anything.

use smallvec::SmallVec;

use crate::board::{absolute_cell, advance, is_safe_cell, Zone};
use crate::core::{Capture, MatchState, Move, SeatId, TOKENS_PER_PLAYER};

/// Move list for one roll; never more than one entry per token.
pub type MoveList = SmallVec<[Move; TOKENS_PER_PLAYER]>;

/// Every legal move for `seat` given a dice value.
///
/// An empty list means the roll is a forced pass.
#[must_use]
pub fn legal_moves(state: &MatchState, seat: SeatId, dice: u8) -> MoveList {
    (0..TOKENS_PER_PLAYER)
        .filter_map(|token| resolve_move(state, seat, token, dice))
        .collect()
}

/// Resolve the move of a single token, `None` if that token cannot move.
#[must_use]
pub fn resolve_move(state: &MatchState, seat: SeatId, token: usize, dice: u8) -> Option<Move> {
    let player = state.player(seat);
    let from = player.token(token);
    let to = advance(from, dice)?;

    let mut mv = Move::new(token, from, to);
    if to.zone() != Zone::Main {
        return Some(mv);
    }

    let cell = absolute_cell(player.color, to)?;
    if is_safe_cell(cell) {
        return Some(mv);
    }

    mv.captures = state
        .occupants(cell, seat)
        .map(|(victim, index)| Capture {
            seat: victim,
            token: index,
            from: state.player(victim).token(index),
        })
        .collect();

    Some(mv)
}

/// Whether `seat` has any legal move for `dice`.
#[must_use]
pub fn has_legal_move(state: &MatchState, seat: SeatId, dice: u8) -> bool {
    (0..TOKENS_PER_PLAYER).any(|token| advance(state.player(seat).token(token), dice).is_some())
}
