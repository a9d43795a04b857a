//! Move selection for automated seats.
//!
//! Policies are trait-based so hosts can plug in their own:
//! - `HeuristicBot`: fixed priority order with risk avoidance (default)
//! - `UniformBot`: uniformly random legal move
//!
//! A policy always acts for `state.current` and only ever sees a snapshot;
//! the turn engine applies whatever it returns.

use crate::board::{absolute_cell, is_safe_cell, TokenPosition, Zone, LAST_MAIN, TRACK_CELLS};
use crate::core::{BotConfig, GameRng, MatchState, Move, SeatId};

// =============================================================================
// Bot Policy
// =============================================================================

/// Picks one of the legal moves for an automated seat.
pub trait BotPolicy: Send + Sync {
    /// Choose a move from `moves`, all legal for `state.current` and `dice`.
    ///
    /// Returns `None` only when `moves` is empty.
    fn choose_move(
        &self,
        state: &MatchState,
        moves: &[Move],
        dice: u8,
        rng: &mut GameRng,
    ) -> Option<Move>;
}

/// Uniform random policy.
///
/// Selects uniformly from legal moves.
#[derive(Clone, Debug, Default)]
pub struct UniformBot;

impl BotPolicy for UniformBot {
    fn choose_move(
        &self,
        _state: &MatchState,
        moves: &[Move],
        _dice: u8,
        rng: &mut GameRng,
    ) -> Option<Move> {
        rng.choose(moves).cloned()
    }
}

/// Fixed-priority policy.
///
/// In order: capture, finish a token, deploy on a six, then advance the
/// move with the best score (destination minus a penalty for landing
/// within reach of an opponent). Ties inside a tier are broken uniformly.
#[derive(Clone, Debug, Default)]
pub struct HeuristicBot {
    config: BotConfig,
}

impl HeuristicBot {
    #[must_use]
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Advance score of a move: its destination, less the risk penalty.
    #[must_use]
    pub fn score(&self, state: &MatchState, mv: &Move) -> i32 {
        let base = i32::from(mv.to.raw());
        if threatened(state, state.current, mv.to, self.config.risk_window) {
            base - self.config.risk_penalty
        } else {
            base
        }
    }
}

impl BotPolicy for HeuristicBot {
    fn choose_move(
        &self,
        state: &MatchState,
        moves: &[Move],
        dice: u8,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let tiers: [fn(&Move) -> bool; 2] = [Move::is_capture, |m| m.enters_finish];
        for tier in tiers {
            if let Some(mv) = pick_where(moves, tier, rng) {
                return Some(mv);
            }
        }

        if dice == 6 {
            if let Some(mv) = pick_where(moves, Move::is_deploy, rng) {
                return Some(mv);
            }
        }

        let best = moves.iter().map(|m| self.score(state, m)).max()?;
        let top: Vec<&Move> = moves
            .iter()
            .filter(|m| self.score(state, m) == best)
            .collect();
        rng.choose(&top).map(|m| (*m).clone())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Uniform pick among the moves matching `pred`.
fn pick_where(moves: &[Move], pred: impl Fn(&Move) -> bool, rng: &mut GameRng) -> Option<Move> {
    let matching: Vec<&Move> = moves.iter().filter(|&m| pred(m)).collect();
    rng.choose(&matching).map(|m| (*m).clone())
}

/// Whether an opponent token could land on `to` with a roll of at most
/// `window`. Safe cells, the stretch and opponents who would turn into
/// their own stretch first are not threats.
#[must_use]
pub fn threatened(state: &MatchState, mover: SeatId, to: TokenPosition, window: u8) -> bool {
    if window == 0 || to.zone() != Zone::Main {
        return false;
    }
    let color = state.player(mover).color;
    let Some(cell) = absolute_cell(color, to) else {
        return false;
    };
    if is_safe_cell(cell) {
        return false;
    }

    state
        .players()
        .iter()
        .filter(|p| p.seat != mover)
        .flat_map(|p| p.tokens.iter().map(move |&t| (p.color, t)))
        .filter_map(|(c, t)| absolute_cell(c, t).map(|at| (t, at)))
        .any(|(t, at)| {
            let gap = (cell + TRACK_CELLS - at) % TRACK_CELLS;
            gap >= 1 && gap <= window && t.raw() + gap as i8 <= LAST_MAIN
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::core::{MatchStatus, PlayerIdentity};
    use crate::rules::legal_moves;

    fn pos(raw: i8) -> TokenPosition {
        TokenPosition::new(raw).unwrap()
    }

    fn bot_vs_human() -> MatchState {
        let mut state = MatchState::new("BOTS01", 2, GameRng::new(11));
        state.add_player(PlayerIdentity::automated(SeatId::new(0)), Color::Red).unwrap();
        state.add_player(PlayerIdentity::new(9), Color::Blue).unwrap();
        state.status = MatchStatus::Active;
        state
    }

    fn set(state: &mut MatchState, seat: u8, tokens: [i8; 4]) {
        state.player_mut(SeatId::new(seat)).tokens = tokens.map(pos);
    }

    fn choose(state: &MatchState, dice: u8) -> Move {
        let moves = legal_moves(state, state.current, dice);
        let mut rng = GameRng::new(3);
        HeuristicBot::default()
            .choose_move(state, &moves, dice, &mut rng)
            .unwrap()
    }

    #[test]
    fn test_empty_moves() {
        let state = bot_vs_human();
        let mut rng = GameRng::new(1);
        assert!(HeuristicBot::default().choose_move(&state, &[], 3, &mut rng).is_none());
        assert!(UniformBot.choose_move(&state, &[], 3, &mut rng).is_none());
    }

    #[test]
    fn test_capture_beats_finish() {
        let mut state = bot_vs_human();
        // Token 0: 52 -> 57 finishes. Token 1: 20 -> 25 hits Blue at 12 (abs 25).
        set(&mut state, 0, [52, 20, -1, -1]);
        set(&mut state, 1, [12, -1, -1, -1]);

        let mv = choose(&state, 5);
        assert_eq!(mv.token, 1);
        assert!(mv.is_capture());
    }

    #[test]
    fn test_finish_beats_deploy() {
        let mut state = bot_vs_human();
        set(&mut state, 0, [51, -1, -1, -1]);

        let mv = choose(&state, 6);
        assert_eq!(mv.token, 0);
        assert!(mv.enters_finish);
    }

    #[test]
    fn test_deploy_on_six() {
        let mut state = bot_vs_human();
        set(&mut state, 0, [30, -1, 57, 57]);

        let mv = choose(&state, 6);
        assert!(mv.is_deploy());
    }

    #[test]
    fn test_advance_most_advanced() {
        let mut state = bot_vs_human();
        set(&mut state, 0, [3, 30, 10, -1]);

        let mv = choose(&state, 2);
        assert_eq!(mv.token, 1);
        assert_eq!(mv.to, pos(32));
    }

    #[test]
    fn test_risk_avoidance_changes_choice() {
        let mut state = bot_vs_human();
        // Token 1 would land on abs 32 with Blue sitting 3 behind at abs 29 (rel 16).
        // Token 0 would land on abs 28, behind every Blue token.
        set(&mut state, 0, [26, 30, -1, -1]);
        set(&mut state, 1, [16, -1, -1, -1]);

        let mv = choose(&state, 2);
        assert_eq!(mv.token, 0);

        let reckless = HeuristicBot::new(BotConfig::reckless());
        let moves = legal_moves(&state, state.current, 2);
        let mv = reckless
            .choose_move(&state, &moves, 2, &mut GameRng::new(3))
            .unwrap();
        assert_eq!(mv.token, 1);
    }

    #[test]
    fn test_threat_ignores_safe_and_turning_opponents() {
        let mut state = bot_vs_human();
        // abs 21 is a star cell.
        set(&mut state, 1, [5, -1, -1, -1]);
        assert!(!threatened(&state, SeatId::new(0), pos(21), 6));

        // Blue at rel 48 (abs 9) turns into its stretch after abs 11.
        set(&mut state, 1, [48, -1, -1, -1]);
        assert!(!threatened(&state, SeatId::new(0), pos(12), 6));

        // Blue at rel 46 (abs 7) can still reach abs 11.
        set(&mut state, 1, [46, -1, -1, -1]);
        assert!(threatened(&state, SeatId::new(0), pos(11), 6));
        assert!(!threatened(&state, SeatId::new(0), pos(11), 3));
    }

    #[test]
    fn test_uniform_picks_legal() {
        let mut state = bot_vs_human();
        set(&mut state, 0, [3, 30, 10, -1]);
        let moves = legal_moves(&state, state.current, 4);

        let mut rng = GameRng::new(8);
        for _ in 0..20 {
            let mv = UniformBot.choose_move(&state, &moves, 4, &mut rng).unwrap();
            assert!(moves.contains(&mv));
        }
    }
}
