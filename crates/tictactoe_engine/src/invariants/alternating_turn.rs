//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, RoundState};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the round is in
/// progress, the player to move is X exactly when an even number of
/// moves has been made.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundState> for AlternatingTurnInvariant {
    fn holds(round: &RoundState) -> bool {
        let history = round.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if round.outcome().is_terminal() {
            // The last mover stays recorded as current player.
            return history
                .last()
                .is_some_and(|last| last.player == *round.current_player());
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        *round.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
