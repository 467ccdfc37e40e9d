//! Round outcomes and winning lines.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Three positions that form a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    pub(crate) const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions, in ascending index order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices, in ascending order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// State of a round after the latest move.
///
/// `InProgress` is the only non-terminal state. Once a round reaches
/// `Win` or `Draw` it accepts no further moves until it is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(Player, WinningLine),
    /// The board filled without a completed line.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player, _) => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win(_, line) => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player, _) => write!(f, "Player {:?} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
