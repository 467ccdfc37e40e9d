//! Session statistics: games played, wins per player, and draws.

use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win counts per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct Wins {
    x: u32,
    o: u32,
}

impl Wins {
    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn increment(self, player: Player) -> Self {
        match player {
            Player::X => Self {
                x: self.x.saturating_add(1),
                ..self
            },
            Player::O => Self {
                o: self.o.saturating_add(1),
                ..self
            },
        }
    }
}

/// Totals accumulated over a session.
///
/// Values are immutable; [`SessionStats::record`] returns an updated copy.
/// A session lasts until stats are explicitly reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct SessionStats {
    games_played: u32,
    wins: Wins,
    draws: u32,
}

impl SessionStats {
    /// Zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns stats with `outcome` tallied.
    ///
    /// `InProgress` leaves the stats unchanged. Call once per finished
    /// round; a second call for the same round counts it twice.
    #[instrument]
    pub fn record(&self, outcome: &Outcome) -> Self {
        let next = match outcome {
            Outcome::InProgress => *self,
            Outcome::Win(player, _) => Self {
                games_played: self.games_played.saturating_add(1),
                wins: self.wins.increment(*player),
                draws: self.draws,
            },
            Outcome::Draw => Self {
                games_played: self.games_played.saturating_add(1),
                wins: self.wins,
                draws: self.draws.saturating_add(1),
            },
        };
        debug!(
            games_played = next.games_played,
            x_wins = next.wins.x,
            o_wins = next.wins.o,
            draws = next.draws,
            "Recorded outcome"
        );
        next
    }

    /// Wins recorded for `player`.
    pub fn wins_for(&self, player: Player) -> u32 {
        self.wins.get(player)
    }

    /// Games `player` lost, which are the games the opponent won.
    pub fn losses_for(&self, player: Player) -> u32 {
        self.wins.get(player.opponent())
    }

    /// Win rate for `player` as a percentage (0.0-100.0).
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            (self.wins_for(player) as f64 / self.games_played as f64) * 100.0
        }
    }
}
