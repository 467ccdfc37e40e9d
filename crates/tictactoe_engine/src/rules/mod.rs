//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from round
//! bookkeeping so they can be reused by the engine and the invariants.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// Scans [`LINES`] in order and reports the first completed line as a
/// win. A full board without a completed line is a draw; anything else
/// is still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Win(player, line);
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line.positions() {
                board = board.with_mark(pos, Player::O);
            }
            assert_eq!(evaluate(&board), Outcome::Win(Player::O, line));
        }
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X O X / O X O / X O X: both diagonals complete on the last move.
        let mut board = Board::new();
        for (index, pos) in Position::ALL.iter().enumerate() {
            let player = if index % 2 == 0 { Player::X } else { Player::O };
            board = board.with_mark(*pos, player);
        }
        assert_eq!(evaluate(&board), Outcome::Win(Player::X, LINES[6]));
    }
}
