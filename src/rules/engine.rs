//! Turn engine: the only code that advances a match.
//!
//! ## Turn cycle
//!
//! ```text
//! AwaitingRoll --roll--> AwaitingMove --apply_move--> AwaitingRoll (six)
//!      |                                         \--> next seat
//!      \--roll without legal moves--> next seat
//! ```
//!
//! After any call that leaves an automated seat current, the engine plays
//! automated seats itself until a human seat is up or the match ends.
//!
//! ## Implementation Notes
//!
//! - Every operation validates before it mutates, so a rejected call leaves
//!   the match exactly as it was. `AutoPlayRunaway` is the exception: it
//!   surfaces after the caller's own action has been applied, and a seat
//!   that tripped the six-streak guard has already had its turn passed.
//! - The automated loop is bounded: a seat that keeps rolling sixes past
//!   `max_auto_replays`, or a chain that never reaches a human seat, is
//!   reported as [`EngineError::AutoPlayRunaway`].

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::moves::{legal_moves, MoveList};
use crate::bots::{BotPolicy, HeuristicBot};
use crate::board::TokenPosition;
use crate::core::{
    EngineConfig, EngineError, EngineResult, MatchState, MatchStatus, Move, PlayerIdentity, SeatId,
    DIE_FACES, MIN_PLAYERS,
};

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub seat: SeatId,
    pub dice: u8,
    /// Legal moves for this roll; empty when the turn was passed.
    pub moves: MoveList,
    /// Automated turns played after a forced pass.
    pub auto_turns: Vec<AutoTurn>,
}

impl RollOutcome {
    /// No legal move existed and the turn moved on.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Result of applying a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub seat: SeatId,
    pub applied: Move,
    /// Same seat rolls again.
    pub extra_turn: bool,
    /// Set when this move won the match.
    pub winner: Option<PlayerIdentity>,
    /// Automated turns played after this move handed the turn on.
    pub auto_turns: Vec<AutoTurn>,
}

/// One roll played by an automated seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoTurn {
    pub seat: SeatId,
    pub identity: PlayerIdentity,
    pub dice: u8,
    /// `None` when the roll had no legal move.
    pub applied: Option<Move>,
    pub extra_turn: bool,
    pub winner: Option<PlayerIdentity>,
}

/// What applying a move did, before any automated follow-up.
struct Applied {
    extra_turn: bool,
    winner: Option<PlayerIdentity>,
}

/// Drives matches: rolls, moves, captures, turn order, victory, bots.
#[derive(Clone, Debug)]
pub struct TurnEngine<P: BotPolicy = HeuristicBot> {
    policy: P,
    max_auto_replays: u32,
}

impl TurnEngine<HeuristicBot> {
    /// Engine with the heuristic bot tuned from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_policy(HeuristicBot::new(config.bot.clone()), config)
    }
}

impl Default for TurnEngine<HeuristicBot> {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl<P: BotPolicy> TurnEngine<P> {
    #[must_use]
    pub fn with_policy(policy: P, config: &EngineConfig) -> Self {
        Self {
            policy,
            max_auto_replays: config.max_auto_replays,
        }
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // === Lifecycle ===

    /// Move a forming match to [`MatchStatus::Active`] with the first seat
    /// to roll, then play any automated seats that come first.
    pub fn begin(&self, state: &mut MatchState) -> EngineResult<Vec<AutoTurn>> {
        match state.status {
            MatchStatus::Forming => {}
            MatchStatus::Active => return Err(EngineError::AlreadyStarted),
            MatchStatus::Finished => return Err(EngineError::GameAlreadyFinished),
        }
        if state.player_count() < MIN_PLAYERS {
            return Err(EngineError::NeedAtLeastTwoPlayers);
        }

        state.status = MatchStatus::Active;
        state.current = SeatId::new(0);
        state.dice = 0;
        state.pending_moves.clear();
        state.turn_number = 1;
        state.sequence = 0;
        state.consecutive_sixes = 0;
        info!(
            "match {} started with {} seats",
            state.code,
            state.player_count()
        );

        self.play_automated_turns(state)
    }

    // === Rolling ===

    /// Roll the match's die for `actor`.
    pub fn roll(&self, state: &mut MatchState, actor: PlayerIdentity) -> EngineResult<RollOutcome> {
        check_can_roll(state, actor)?;
        let dice = state.rng.roll_die();
        self.roll_checked(state, dice)
    }

    /// Roll with an externally supplied die value.
    pub fn roll_with(
        &self,
        state: &mut MatchState,
        actor: PlayerIdentity,
        dice: u8,
    ) -> EngineResult<RollOutcome> {
        check_can_roll(state, actor)?;
        if !(1..=DIE_FACES).contains(&dice) {
            return Err(EngineError::InvalidDice(dice));
        }
        self.roll_checked(state, dice)
    }

    fn roll_checked(&self, state: &mut MatchState, dice: u8) -> EngineResult<RollOutcome> {
        let seat = state.current;
        let moves = record_roll(state, dice);

        let auto_turns = if moves.is_empty() {
            self.play_automated_turns(state)?
        } else {
            Vec::new()
        };

        Ok(RollOutcome {
            seat,
            dice,
            moves,
            auto_turns,
        })
    }

    // === Moving ===

    /// Apply the pending roll to one of `actor`'s tokens.
    pub fn apply_move(
        &self,
        state: &mut MatchState,
        actor: PlayerIdentity,
        token: usize,
    ) -> EngineResult<MoveOutcome> {
        check_in_play(state, actor)?;
        if state.dice == 0 {
            return Err(EngineError::NoPendingRoll);
        }
        let mv = state
            .pending_moves
            .iter()
            .find(|m| m.token == token)
            .cloned()
            .ok_or(EngineError::InvalidMove(token))?;

        let seat = state.current;
        let applied = execute(state, mv.clone());
        let auto_turns = if applied.extra_turn || applied.winner.is_some() {
            Vec::new()
        } else {
            self.play_automated_turns(state)?
        };

        Ok(MoveOutcome {
            seat,
            applied: mv,
            extra_turn: applied.extra_turn,
            winner: applied.winner,
            auto_turns,
        })
    }

    // === Automated seats ===

    /// Play automated seats until a human seat is current or the match
    /// ends. Does nothing when a human seat is already up.
    pub fn play_automated_turns(&self, state: &mut MatchState) -> EngineResult<Vec<AutoTurn>> {
        let ceiling = state.player_count() * (self.max_auto_replays as usize + 1);
        let mut turns = Vec::new();

        while let Some(turn) = self.step_automated(state)? {
            turns.push(turn);
            if turns.len() >= ceiling && self.automated_to_act(state) {
                warn!(
                    "match {}: {} automated rolls without reaching a human seat",
                    state.code,
                    turns.len()
                );
                return Err(EngineError::AutoPlayRunaway(turns.len() as u32));
            }
        }

        Ok(turns)
    }

    /// Play a single automated roll (and move, if any) for the current
    /// seat. `None` when the current seat is human or the match is over.
    pub fn step_automated(&self, state: &mut MatchState) -> EngineResult<Option<AutoTurn>> {
        if !self.automated_to_act(state) {
            return Ok(None);
        }
        if state.consecutive_sixes > self.max_auto_replays {
            let streak = state.consecutive_sixes;
            warn!(
                "match {}: {} rolled {} sixes in a row; passing its turn",
                state.code,
                state.current_player().identity,
                streak
            );
            // The runaway seat loses the rest of its turn so play can resume.
            advance_turn(state, false);
            return Err(EngineError::AutoPlayRunaway(streak));
        }

        let seat = state.current;
        let identity = state.current_player().identity;
        let dice = if state.dice == 0 {
            let dice = state.rng.roll_die();
            record_roll(state, dice);
            dice
        } else {
            state.dice
        };

        if state.pending_moves.is_empty() {
            return Ok(Some(AutoTurn {
                seat,
                identity,
                dice,
                applied: None,
                extra_turn: false,
                winner: None,
            }));
        }

        let moves = state.pending_moves.clone();
        let mut rng = state.rng.clone();
        let choice = self.policy.choose_move(state, &moves, dice, &mut rng);
        state.rng = rng;

        let mv = match choice {
            Some(mv) if moves.contains(&mv) => mv,
            _ => {
                warn!("match {}: policy returned no legal move for {}", state.code, identity);
                moves[0].clone()
            }
        };

        let applied = execute(state, mv.clone());
        Ok(Some(AutoTurn {
            seat,
            identity,
            dice,
            applied: Some(mv),
            extra_turn: applied.extra_turn,
            winner: applied.winner,
        }))
    }

    fn automated_to_act(&self, state: &MatchState) -> bool {
        state.is_active() && state.current_player().automated
    }
}

// =============================================================================
// State transitions
// =============================================================================

/// Common checks for any in-turn action.
fn check_in_play(state: &MatchState, actor: PlayerIdentity) -> EngineResult<()> {
    match state.status {
        MatchStatus::Forming => return Err(EngineError::MatchNotActive),
        MatchStatus::Finished => return Err(EngineError::GameAlreadyFinished),
        MatchStatus::Active => {}
    }
    if !state.is_participant(actor) {
        return Err(EngineError::NotAParticipant(actor));
    }
    if !state.is_current(actor) {
        return Err(EngineError::OutOfTurn(actor));
    }
    Ok(())
}

fn check_can_roll(state: &MatchState, actor: PlayerIdentity) -> EngineResult<()> {
    check_in_play(state, actor)?;
    if state.dice != 0 {
        return Err(EngineError::RollAlreadyPending);
    }
    Ok(())
}

/// Store a validated roll and its legal moves; pass the turn if there are
/// none. Returns the legal moves.
fn record_roll(state: &mut MatchState, dice: u8) -> MoveList {
    state.dice = dice;
    if dice == DIE_FACES {
        state.consecutive_sixes += 1;
    } else {
        state.consecutive_sixes = 0;
    }

    let moves = legal_moves(state, state.current, dice);
    debug!(
        "match {}: {} rolled {} ({} legal moves)",
        state.code,
        state.current_player().identity,
        dice,
        moves.len()
    );

    if moves.is_empty() {
        state.record(None);
        advance_turn(state, false);
    } else {
        state.pending_moves = moves.clone();
    }
    moves
}

/// Apply a legal move: move the token, send victims home, check victory,
/// hand the turn on.
fn execute(state: &mut MatchState, mv: Move) -> Applied {
    let seat = state.current;
    state.player_mut(seat).tokens[mv.token] = mv.to;
    for capture in &mv.captures {
        state.player_mut(capture.seat).tokens[capture.token] = TokenPosition::HOME;
        debug!(
            "match {}: {} captured {} token {} at {}",
            state.code,
            state.player(seat).identity,
            state.player(capture.seat).identity,
            capture.token,
            capture.from
        );
    }
    debug!(
        "match {}: {} moved token {} {} -> {}",
        state.code,
        state.player(seat).identity,
        mv.token,
        mv.from,
        mv.to
    );
    state.record(Some(mv));

    if state.player(seat).has_won() {
        let winner = state.player(seat).identity;
        state.status = MatchStatus::Finished;
        state.winner = Some(winner);
        state.dice = 0;
        state.pending_moves.clear();
        info!("match {} won by {}", state.code, winner);
        return Applied {
            extra_turn: false,
            winner: Some(winner),
        };
    }

    let extra_turn = advance_turn(state, true);
    Applied {
        extra_turn,
        winner: None,
    }
}

/// Clear the roll and pick who goes next. A six followed by a move keeps
/// the turn; anything else, including a pass on a six, moves it on.
/// Returns whether the same seat rolls again.
fn advance_turn(state: &mut MatchState, moved: bool) -> bool {
    let replay = moved && state.dice == DIE_FACES;
    state.dice = 0;
    state.pending_moves.clear();

    if !replay {
        state.current = state.current.next(state.player_count());
        state.turn_number += 1;
        state.sequence = 0;
        state.consecutive_sixes = 0;
    }
    replay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::core::{GameRng, TurnPhase};

    const ALICE: PlayerIdentity = PlayerIdentity::new(1);
    const BOB: PlayerIdentity = PlayerIdentity::new(2);

    fn pos(raw: i8) -> TokenPosition {
        TokenPosition::new(raw).unwrap()
    }

    fn started(ids: &[PlayerIdentity]) -> (TurnEngine, MatchState) {
        let engine = TurnEngine::default();
        let mut state = MatchState::new("ENGINE", ids.len(), GameRng::new(21));
        for (id, color) in ids.iter().zip(Color::ALL) {
            state.add_player(*id, color).unwrap();
        }
        engine.begin(&mut state).unwrap();
        (engine, state)
    }

    fn set(state: &mut MatchState, seat: u8, tokens: [i8; 4]) {
        state.player_mut(SeatId::new(seat)).tokens = tokens.map(pos);
    }

    #[test]
    fn test_begin() {
        let (_, state) = started(&[ALICE, BOB]);
        assert_eq!(state.status, MatchStatus::Active);
        assert_eq!(state.current, SeatId::new(0));
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.phase(), Some(TurnPhase::AwaitingRoll));
    }

    #[test]
    fn test_begin_needs_two() {
        let engine = TurnEngine::default();
        let mut state = MatchState::new("SOLO01", 2, GameRng::new(1));
        state.add_player(ALICE, Color::Red).unwrap();

        assert_eq!(engine.begin(&mut state), Err(EngineError::NeedAtLeastTwoPlayers));
        assert_eq!(state.status, MatchStatus::Forming);
    }

    #[test]
    fn test_roll_before_start() {
        let engine = TurnEngine::default();
        let mut state = MatchState::new("EARLY1", 2, GameRng::new(1));
        state.add_player(ALICE, Color::Red).unwrap();

        assert_eq!(engine.roll(&mut state, ALICE), Err(EngineError::MatchNotActive));
    }

    #[test]
    fn test_roll_validation() {
        let (engine, mut state) = started(&[ALICE, BOB]);

        assert_eq!(engine.roll(&mut state, BOB), Err(EngineError::OutOfTurn(BOB)));
        let stranger = PlayerIdentity::new(99);
        assert_eq!(
            engine.roll(&mut state, stranger),
            Err(EngineError::NotAParticipant(stranger))
        );
        assert_eq!(engine.roll_with(&mut state, ALICE, 0), Err(EngineError::InvalidDice(0)));
        assert_eq!(engine.roll_with(&mut state, ALICE, 7), Err(EngineError::InvalidDice(7)));

        engine.roll_with(&mut state, ALICE, 6).unwrap();
        assert_eq!(engine.roll(&mut state, ALICE), Err(EngineError::RollAlreadyPending));
    }

    #[test]
    fn test_home_roll_three_passes() {
        let (engine, mut state) = started(&[ALICE, BOB]);
        let before = state.players().to_vec();

        let outcome = engine.roll_with(&mut state, ALICE, 3).unwrap();

        assert!(outcome.passed());
        assert_eq!(outcome.dice, 3);
        assert_eq!(state.current, SeatId::new(1));
        assert_eq!(state.dice, 0);
        assert_eq!(state.players(), before.as_slice());
        assert!(state.history.back().unwrap().is_pass());
    }

    #[test]
    fn test_pass_on_six_does_not_replay() {
        let (engine, mut state) = started(&[ALICE, BOB]);
        set(&mut state, 0, [55, 56, 57, 57]);

        let outcome = engine.roll_with(&mut state, ALICE, 6).unwrap();
        assert!(outcome.passed());
        assert_eq!(state.current, SeatId::new(1));
    }

    #[test]
    fn test_deploy_on_six_and_replay() {
        let (engine, mut state) = started(&[ALICE, BOB]);

        let roll = engine.roll_with(&mut state, ALICE, 6).unwrap();
        assert_eq!(roll.moves.len(), 4);
        assert_eq!(state.phase(), Some(TurnPhase::AwaitingMove));

        let outcome = engine.apply_move(&mut state, ALICE, 2).unwrap();
        assert!(outcome.extra_turn);
        assert_eq!(outcome.applied.from, TokenPosition::HOME);
        assert_eq!(state.player(SeatId::new(0)).token(2), TokenPosition::ENTRY);
        assert_eq!(state.current, SeatId::new(0));
        assert_eq!(state.dice, 0);

        // A fresh roll is allowed right away.
        engine.roll_with(&mut state, ALICE, 2).unwrap();
    }

    #[test]
    fn test_apply_move_validation() {
        let (engine, mut state) = started(&[ALICE, BOB]);
        set(&mut state, 0, [10, -1, -1, -1]);

        assert_eq!(engine.apply_move(&mut state, ALICE, 0), Err(EngineError::NoPendingRoll));

        engine.roll_with(&mut state, ALICE, 4).unwrap();
        let snapshot = state.clone();

        assert_eq!(engine.apply_move(&mut state, ALICE, 1), Err(EngineError::InvalidMove(1)));
        assert_eq!(engine.apply_move(&mut state, ALICE, 9), Err(EngineError::InvalidMove(9)));
        assert_eq!(engine.apply_move(&mut state, BOB, 0), Err(EngineError::OutOfTurn(BOB)));
        assert_eq!(state, snapshot);

        let outcome = engine.apply_move(&mut state, ALICE, 0).unwrap();
        assert!(!outcome.extra_turn);
        assert_eq!(state.player(SeatId::new(0)).token(0), pos(14));
        assert_eq!(state.current, SeatId::new(1));
    }

    #[test]
    fn test_capture_sends_victim_home() {
        let (engine, mut state) = started(&[ALICE, BOB]);
        set(&mut state, 0, [20, -1, -1, -1]);
        set(&mut state, 1, [10, 30, -1, -1]);

        let roll = engine.roll_with(&mut state, ALICE, 3).unwrap();
        assert!(roll.moves[0].is_capture());

        engine.apply_move(&mut state, ALICE, 0).unwrap();
        assert_eq!(state.player(SeatId::new(0)).token(0), pos(23));
        assert_eq!(state.player(SeatId::new(1)).token(0), TokenPosition::HOME);
        assert_eq!(state.player(SeatId::new(1)).token(1), pos(30));
    }

    #[test]
    fn test_victory_is_terminal() {
        let (engine, mut state) = started(&[ALICE, BOB]);
        set(&mut state, 0, [56, 57, 57, 57]);

        engine.roll_with(&mut state, ALICE, 1).unwrap();
        let outcome = engine.apply_move(&mut state, ALICE, 0).unwrap();

        assert_eq!(outcome.winner, Some(ALICE));
        assert!(!outcome.extra_turn);
        assert_eq!(state.status, MatchStatus::Finished);
        assert_eq!(state.winner, Some(ALICE));

        let frozen = state.clone();
        assert_eq!(engine.roll(&mut state, ALICE), Err(EngineError::GameAlreadyFinished));
        assert_eq!(engine.roll(&mut state, BOB), Err(EngineError::GameAlreadyFinished));
        assert_eq!(
            engine.apply_move(&mut state, ALICE, 0),
            Err(EngineError::GameAlreadyFinished)
        );
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_win_on_six_ends_without_replay() {
        let (engine, mut state) = started(&[ALICE, BOB]);
        set(&mut state, 0, [51, 57, 57, 57]);

        engine.roll_with(&mut state, ALICE, 6).unwrap();
        let outcome = engine.apply_move(&mut state, ALICE, 0).unwrap();

        assert!(!outcome.extra_turn);
        assert_eq!(outcome.winner, Some(ALICE));
    }

    #[test]
    fn test_bot_turn_resolved_before_return() {
        let bot = PlayerIdentity::automated(SeatId::new(1));
        let (engine, mut state) = started(&[ALICE, bot]);
        set(&mut state, 0, [10, -1, -1, -1]);

        let outcome = engine
            .roll_with(&mut state, ALICE, 2)
            .and_then(|_| engine.apply_move(&mut state, ALICE, 0))
            .unwrap();

        assert!(!outcome.auto_turns.is_empty());
        assert!(outcome.auto_turns.iter().all(|t| t.identity == bot));
        assert!(state.is_finished() || state.current == SeatId::new(0));
        assert_eq!(state.dice, 0);
    }

    #[test]
    fn test_bot_first_seat_plays_on_begin() {
        let bot = PlayerIdentity::automated(SeatId::new(0));
        let engine = TurnEngine::default();
        let mut state = MatchState::new("BOTFST", 2, GameRng::new(4));
        state.add_player(bot, Color::Red).unwrap();
        state.add_player(ALICE, Color::Blue).unwrap();

        let turns = engine.begin(&mut state).unwrap();
        assert!(!turns.is_empty());
        assert_eq!(state.current, SeatId::new(1));
    }

    #[test]
    fn test_runaway_guard() {
        let bot = PlayerIdentity::automated(SeatId::new(1));
        let config = EngineConfig::default().with_max_auto_replays(2);
        let engine = TurnEngine::new(&config);
        let mut state = MatchState::new("RUNAWY", 2, GameRng::new(4));
        state.add_player(ALICE, Color::Red).unwrap();
        state.add_player(bot, Color::Blue).unwrap();
        engine.begin(&mut state).unwrap();

        // Hand the turn to the bot with a six streak already on the counter.
        state.current = SeatId::new(1);
        state.consecutive_sixes = 3;

        let err = engine.play_automated_turns(&mut state).unwrap_err();
        assert_eq!(err, EngineError::AutoPlayRunaway(3));
        assert!(err.is_internal_fault());

        // The fault passed the bot's turn; the match carries on.
        assert_eq!(state.status, MatchStatus::Active);
        assert_eq!(state.current, SeatId::new(0));
        assert_eq!(state.consecutive_sixes, 0);
        assert_eq!(state.phase(), Some(TurnPhase::AwaitingRoll));
        assert_eq!(engine.play_automated_turns(&mut state), Ok(Vec::new()));
        engine.roll(&mut state, ALICE).unwrap();
    }

    #[test]
    fn test_streak_at_limit_still_plays() {
        let bot = PlayerIdentity::automated(SeatId::new(1));
        let config = EngineConfig::default().with_max_auto_replays(2);
        let engine = TurnEngine::new(&config);
        let mut state = MatchState::new("LIMIT2", 2, GameRng::new(4));
        state.add_player(ALICE, Color::Red).unwrap();
        state.add_player(bot, Color::Blue).unwrap();
        engine.begin(&mut state).unwrap();

        state.current = SeatId::new(1);
        state.consecutive_sixes = 2;

        let turn = engine.step_automated(&mut state).unwrap().unwrap();
        assert_eq!(turn.identity, bot);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_chain_without_human_hits_ceiling() {
        let engine = TurnEngine::default();
        let mut state = MatchState::new("ALLBOT", 4, GameRng::new(12));
        for (seat, color) in Color::ALL.into_iter().enumerate() {
            state
                .add_player(PlayerIdentity::automated(SeatId::new(seat as u8)), color)
                .unwrap();
        }

        // Four seats, sixteen replays each: 4 * 17 rolls without a human.
        let err = engine.begin(&mut state).unwrap_err();
        assert_eq!(err, EngineError::AutoPlayRunaway(68));
        assert!(err.is_internal_fault());
        assert_eq!(state.status, MatchStatus::Active);
        assert_eq!(state.history.len(), 68);

        // Bot-only matches are driven one step at a time from here.
        assert!(engine.step_automated(&mut state).unwrap().is_some());
        assert_eq!(state.history.len(), 69);
    }

    #[test]
    fn test_history_sequence() {
        let (engine, mut state) = started(&[ALICE, BOB]);

        engine.roll_with(&mut state, ALICE, 6).unwrap();
        engine.apply_move(&mut state, ALICE, 0).unwrap();
        engine.roll_with(&mut state, ALICE, 4).unwrap();
        engine.apply_move(&mut state, ALICE, 0).unwrap();

        let records: Vec<_> = state.history.iter().cloned().collect();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].turn, records[0].sequence), (1, 0));
        assert_eq!((records[1].turn, records[1].sequence), (1, 1));
        assert_eq!(state.turn_number, 2);
    }
}
