//! Pure round and session transitions.
//!
//! These are the four calls a presentation layer drives a game with,
//! plus [`evaluate`] and [`advance_turn`]. None of them mutate their
//! inputs; each returns a fresh value.

use super::rules::evaluate;
use super::{Board, InvalidMove, Outcome, Player, Position, RoundState, SessionStats};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board and outcome produced by [`apply_move`], with the square marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveResult {
    position: Position,
    board: Board,
    outcome: Outcome,
}

/// Places `current_player`'s mark at `index` (0-8) on a copy of `board`.
///
/// The round is judged from `board` itself: if it already holds a win or
/// is full, the move is rejected with [`InvalidMove::RoundOver`]. Turn
/// switching and stats are left to the caller.
#[instrument(skip(board))]
pub fn apply_move(
    board: &Board,
    current_player: Player,
    index: usize,
) -> Result<MoveResult, InvalidMove> {
    let position = Position::from_index(index).ok_or(InvalidMove::OutOfBounds(index))?;

    if evaluate(board).is_terminal() {
        return Err(InvalidMove::RoundOver);
    }

    if !board.is_empty(position) {
        return Err(InvalidMove::SquareOccupied(position));
    }

    let board = board.with_mark(position, current_player);
    let outcome = evaluate(&board);
    debug!(player = ?current_player, %position, %outcome, "Applied move");

    Ok(MoveResult {
        position,
        board,
        outcome,
    })
}

/// Returns the player who moves next.
pub fn advance_turn(current_player: Player) -> Player {
    current_player.opponent()
}

/// Returns `stats` with `outcome` tallied.
///
/// See [`SessionStats::record`].
#[instrument]
pub fn record_outcome(stats: &SessionStats, outcome: &Outcome) -> SessionStats {
    stats.record(outcome)
}

/// Empty board, X to move, round in progress.
#[instrument]
pub fn reset_round() -> RoundState {
    RoundState::new()
}

/// Zeroed session statistics.
#[instrument]
pub fn reset_stats() -> SessionStats {
    SessionStats::new()
}
