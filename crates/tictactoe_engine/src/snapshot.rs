//! Whole-screen game state as a single immutable value.
//!
//! A presentation layer keeps one [`GameSnapshot`], swaps it for the value
//! returned by each call, and re-renders. Stats are updated in the same
//! step that ends a round, so a finished round is tallied exactly once.

use super::engine::{record_outcome, reset_round, reset_stats};
use super::{InvalidMove, RoundState, SessionConfig, SessionStats};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What happened to a board press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressResult {
    /// The move was applied.
    Applied,
    /// The press was ignored and the snapshot is unchanged.
    Ignored(InvalidMove),
}

impl PressResult {
    /// True if the press changed nothing.
    pub fn is_ignored(&self) -> bool {
        matches!(self, PressResult::Ignored(_))
    }
}

/// Current round, session stats, and the settings they run under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    round: RoundState,
    stats: SessionStats,
    config: SessionConfig,
}

impl GameSnapshot {
    /// Fresh round and zeroed stats.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            round: reset_round(),
            stats: reset_stats(),
            config,
        }
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// When the move ends the round the outcome is recorded into the stats,
    /// unless stat tracking is disabled.
    #[instrument(skip(self))]
    pub fn play(&self, index: usize) -> Result<Self, InvalidMove> {
        let round = self.round.play(index)?;

        let stats = if round.outcome().is_terminal() && self.config.track_stats {
            record_outcome(&self.stats, round.outcome())
        } else {
            self.stats
        };

        Ok(Self {
            round,
            stats,
            config: self.config,
        })
    }

    /// Handles a tap on square `index`.
    ///
    /// Stale or repeated taps (occupied square, finished round) are
    /// ignored rather than reported as failures.
    #[instrument(skip(self))]
    pub fn press(&self, index: usize) -> (Self, PressResult) {
        match self.play(index) {
            Ok(next) => (next, PressResult::Applied),
            Err(err) => {
                debug!(%err, "Ignoring press");
                (self.clone(), PressResult::Ignored(err))
            }
        }
    }

    /// Starts a new round, keeping the stats.
    #[instrument(skip(self))]
    pub fn new_round(&self) -> Self {
        info!("Starting new round");
        Self {
            round: reset_round(),
            stats: self.stats,
            config: self.config,
        }
    }

    /// Zeroes the stats, keeping the round.
    #[instrument(skip(self))]
    pub fn clear_stats(&self) -> Self {
        info!(games_played = *self.stats.games_played(), "Clearing session stats");
        Self {
            round: self.round.clone(),
            stats: reset_stats(),
            config: self.config,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn play_all(snapshot: GameSnapshot, indices: &[usize]) -> GameSnapshot {
        indices.iter().fold(snapshot, |snap, &index| {
            snap.play(index).expect("Valid move")
        })
    }

    #[test]
    fn test_win_recorded_once() {
        let snap = play_all(GameSnapshot::default(), &[0, 1, 3, 2, 6]);
        assert_eq!(*snap.stats().games_played(), 1);
        assert_eq!(snap.stats().wins_for(Player::X), 1);

        let (again, result) = snap.press(8);
        assert!(result.is_ignored());
        assert_eq!(again, snap);
    }

    #[test]
    fn test_in_progress_moves_leave_stats() {
        let snap = play_all(GameSnapshot::default(), &[0, 4]);
        assert_eq!(*snap.stats(), SessionStats::default());
    }

    #[test]
    fn test_press_occupied_ignored() {
        let snap = play_all(GameSnapshot::default(), &[4]);
        let (next, result) = snap.press(4);
        assert!(matches!(result, PressResult::Ignored(InvalidMove::SquareOccupied(_))));
        assert_eq!(next, snap);
    }

    #[test]
    fn test_press_applies() {
        let (next, result) = GameSnapshot::default().press(0);
        assert_eq!(result, PressResult::Applied);
        assert_eq!(next.round().history().len(), 1);
    }

    #[test]
    fn test_new_round_keeps_stats() {
        let snap = play_all(GameSnapshot::default(), &[0, 1, 3, 2, 6]).new_round();
        assert_eq!(*snap.round(), RoundState::new());
        assert_eq!(*snap.stats().games_played(), 1);
    }

    #[test]
    fn test_clear_stats_keeps_round() {
        let snap = play_all(GameSnapshot::default(), &[0, 1, 3, 2, 6]);
        let cleared = snap.clear_stats();
        assert_eq!(*cleared.stats(), SessionStats::default());
        assert_eq!(cleared.round(), snap.round());
    }

    #[test]
    fn test_tracking_disabled() {
        let snap = play_all(
            GameSnapshot::new(SessionConfig { track_stats: false }),
            &[0, 1, 3, 2, 6],
        );
        assert!(snap.round().outcome().is_terminal());
        assert_eq!(*snap.stats(), SessionStats::default());
    }
}
