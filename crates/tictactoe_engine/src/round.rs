//! A single round as one immutable value.
//!
//! Board, player to move, and outcome always change together, so a
//! round can never be observed with a new board and a stale outcome.

use super::engine::{advance_turn, apply_move};
use super::invariants::{InvariantSet, RoundInvariants};
use super::{Board, InvalidMove, Move, Outcome, Player, Position, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Board, turn, and outcome of the round being played.
///
/// While the round is in progress `current_player` is the player to move.
/// Once it ends, `current_player` stays on the player who made the last
/// move, which for a win is the winner.
///
/// Deserialization runs [`RoundState::verify`], so a round read from JSON
/// satisfies the same invariants as one built by [`RoundState::play`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(try_from = "RawRoundState")]
pub struct RoundState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

/// Wire form of [`RoundState`], checked before it becomes one.
#[derive(Deserialize)]
struct RawRoundState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl TryFrom<RawRoundState> for RoundState {
    type Error = InvalidMove;

    fn try_from(raw: RawRoundState) -> Result<Self, Self::Error> {
        let round = Self {
            board: raw.board,
            current_player: raw.current_player,
            outcome: raw.outcome,
            history: raw.history,
        };
        round.verify()?;
        Ok(round)
    }
}

impl RoundState {
    /// Empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Returns the next round state; `self` is left untouched. The turn
    /// passes to the opponent only if the round is still in progress.
    /// Round invariants are re-checked in debug builds.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn play(&self, index: usize) -> Result<Self, InvalidMove> {
        if self.outcome.is_terminal() {
            debug!(outcome = %self.outcome, "Rejecting move after round end");
            return Err(InvalidMove::RoundOver);
        }

        let result = apply_move(&self.board, self.current_player, index)?;
        let outcome = *result.outcome();

        let mut history = self.history.clone();
        history.push(Move::new(self.current_player, *result.position()));

        let current_player = if outcome.is_terminal() {
            self.current_player
        } else {
            advance_turn(self.current_player)
        };

        let next = Self {
            board: *result.board(),
            current_player,
            outcome,
            history,
        };

        #[cfg(debug_assertions)]
        next.verify()?;

        if outcome.is_terminal() {
            info!(%outcome, moves = next.history.len(), "Round finished");
        }

        Ok(next)
    }

    /// Checks every round invariant.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), InvalidMove> {
        <RoundInvariants as InvariantSet<RoundState>>::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvalidMove::InvariantViolation(descriptions)
        })
    }

    /// Positions still open for a move. Empty once the round has ended.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.outcome.is_terminal() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// The line to highlight, if the round was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.outcome.winning_line()
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }

    /// One-line status for the screen header.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Next Turn: {:?}", self.current_player),
            Outcome::Win(player, _) => format!("Winner: {:?}", player),
            Outcome::Draw => "It's a Tie!".to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(
        board: Board,
        current_player: Player,
        history: Vec<Move>,
    ) -> Self {
        Self {
            outcome: super::rules::evaluate(&board),
            board,
            current_player,
            history,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
