//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Outcome, Player, Position, Square};
    use super::super::evaluate;
    use super::*;

    fn board_from(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, mark) in squares.iter_mut().zip(marks.chars()) {
            *square = match mark {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        let board = board_from("XOXOXOOXO");
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / O X O
        let board = board_from("XXXOOXOXO");
        assert!(is_full(&board));
        assert!(evaluate(&board).winner().is_some());
    }
}
