//! Territory scoring and end-of-game outcome.

use super::super::{BoardState, Outcome, Player};
use serde::Serialize;
use tracing::instrument;

/// Territory cell counts per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    /// Territory owned by player one.
    pub player_one: usize,
    /// Territory owned by player two.
    pub player_two: usize,
}

impl Score {
    /// Returns the count for `player`.
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player_one, self.player_two)
    }
}

/// Counts territory for both players. Markers on the board don't score.
#[instrument(skip(board))]
pub fn score(board: &BoardState) -> Score {
    Score {
        player_one: board.territory_count(Player::One),
        player_two: board.territory_count(Player::Two),
    }
}

/// Strictly more territory wins; equal counts draw.
#[instrument]
pub fn outcome(score: Score) -> Outcome {
    use std::cmp::Ordering;

    match score.player_one.cmp(&score.player_two) {
        Ordering::Greater => Outcome::Winner(Player::One),
        Ordering::Less => Outcome::Winner(Player::Two),
        Ordering::Equal => Outcome::Draw,
    }
}
