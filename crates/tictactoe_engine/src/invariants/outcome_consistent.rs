//! Outcome consistency invariant: stored outcome and history match the board.

use super::super::rules::evaluate;
use super::super::{Outcome, RoundState, Square};
use super::Invariant;
use std::collections::BTreeSet;

/// Invariant: the stored outcome is what the board evaluates to, each
/// occupied square corresponds to exactly one recorded move, and a
/// finished round ended on its last recorded move.
pub struct OutcomeConsistentInvariant;

impl Invariant<RoundState> for OutcomeConsistentInvariant {
    fn holds(round: &RoundState) -> bool {
        let board = round.board();

        if *round.outcome() != evaluate(board) {
            return false;
        }

        if round.history().len() != board.occupied() {
            return false;
        }

        let distinct: BTreeSet<_> = round.history().iter().map(|mov| mov.position).collect();
        if distinct.len() != round.history().len() {
            return false;
        }

        if !round
            .history()
            .iter()
            .all(|mov| board.get(mov.position) == Square::Occupied(mov.player))
        {
            return false;
        }

        match (round.outcome(), round.history().last()) {
            (Outcome::InProgress, _) => true,
            (_, None) => false,
            (outcome, Some(last)) => {
                if outcome.winner().is_some_and(|winner| winner != last.player) {
                    return false;
                }
                let mut before = *board;
                before.set(last.position, Square::Empty);
                !evaluate(&before).is_terminal()
            }
        }
    }

    fn description() -> &'static str {
        "Outcome and move history agree with the board"
    }
}
