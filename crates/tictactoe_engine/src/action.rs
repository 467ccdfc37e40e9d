//! Moves and move rejection.
//!
//! A move is a domain event: a player placing a mark at a position.
//! It can be validated against a board before anything changes.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.position.label())
    }
}

/// Why a move was rejected.
///
/// A rejected move never changes any state. Presentation layers normally
/// avoid these by checking the outcome and cell before calling in, and
/// [`GameSnapshot::press`](crate::GameSnapshot::press) downgrades them to
/// an ignored press.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index does not name a square (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round has already ended.
    #[display("Round is already over")]
    RoundOver,

    /// A round invariant failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for InvalidMove {}
