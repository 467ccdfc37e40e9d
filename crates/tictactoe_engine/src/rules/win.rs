//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square, WinningLine};
use tracing::instrument;

/// The 8 winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine::new([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine::new([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine::new([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine::new([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line in [`LINES`] order.
/// When a board completes several lines at once, only the earliest one
/// is reported.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| (player, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let (player, line) = check_winner(&board).expect("winner");
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_earliest_line_reported() {
        // Top row and left column both complete; the row comes first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_winner(&board), Some((Player::X, LINES[0])));
    }
}
