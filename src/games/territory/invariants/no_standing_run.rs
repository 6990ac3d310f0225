//! No-standing-run invariant: every three in a row is eliminated.

use super::super::rules::has_run;
use super::super::{Game, Player};
use super::Invariant;

/// Invariant: neither player has a run of three on the board.
///
/// The mover's runs are all removed when they are detected, and a move
/// never adds markers of the other color, so no run survives a move.
pub struct NoStandingRunInvariant;

impl Invariant<Game> for NoStandingRunInvariant {
    fn holds(game: &Game) -> bool {
        !has_run(game.board(), Player::One) && !has_run(game.board(), Player::Two)
    }

    fn description() -> &'static str {
        "No three-in-a-row is left standing"
    }
}
