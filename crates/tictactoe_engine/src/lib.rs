//! Pure tic-tac-toe game logic for a single-screen game UI.
//!
//! The crate owns the rules and state of a local two-player game; drawing
//! the board, animating the winning line, and showing the stats panel are
//! left to whatever presentation layer sits on top.
//!
//! # Architecture
//!
//! - **Engine**: pure transitions ([`apply_move`], [`advance_turn`],
//!   [`record_outcome`], [`reset_round`], [`reset_stats`])
//! - **Round**: board, turn, and outcome bundled as one value ([`RoundState`])
//! - **Snapshot**: round plus session stats ([`GameSnapshot`])
//! - **Invariants**: properties every round satisfies, checked in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSnapshot, Outcome, Player};
//!
//! let mut snap = GameSnapshot::default();
//! for index in [0, 1, 3, 2, 6] {
//!     snap = snap.play(index)?;
//! }
//!
//! assert_eq!(snap.round().outcome().winner(), Some(Player::X));
//! assert_eq!(*snap.stats().games_played(), 1);
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
pub mod invariants;
mod outcome;
mod position;
mod round;
pub mod rules;
mod snapshot;
mod stats;
mod types;

pub use action::{InvalidMove, Move};
pub use config::{ConfigError, SessionConfig};
pub use engine::{MoveResult, advance_turn, apply_move, record_outcome, reset_round, reset_stats};
pub use outcome::{Outcome, WinningLine};
pub use position::Position;
pub use round::RoundState;
pub use rules::evaluate;
pub use snapshot::{GameSnapshot, PressResult};
pub use stats::{SessionStats, Wins};
pub use types::{Board, Player, Square};
