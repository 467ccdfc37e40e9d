//! Mark balance invariant: X never trails O and leads by at most one.

use super::super::{Player, RoundState};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<RoundState> for MarkBalanceInvariant {
    fn holds(round: &RoundState) -> bool {
        let x = round.board().count(Player::X);
        let o = round.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
