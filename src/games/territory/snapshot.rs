//! Serializable view of a game for display and JSON output.

use super::game::{Game, GameState};
use super::rules::Score;
use super::{BoardState, Move};
use serde::Serialize;
use tracing::instrument;

/// Everything a presentation layer needs to draw a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Marker and territory grids.
    pub board: BoardState,
    /// Board rendered as text, one line per row.
    pub text: String,
    /// Turn, move count and result.
    pub state: GameState,
    /// Territory per player.
    pub score: Score,
    /// Successful moves in order.
    pub history: Vec<Move>,
}

impl GameSnapshot {
    /// Captures the current state of `game`.
    #[instrument(skip(game), fields(total_moves = game.total_moves()))]
    pub fn capture(game: &Game) -> Self {
        Self {
            board: game.board().clone(),
            text: game.board().to_string(),
            state: game.state(),
            score: game.score(),
            history: game.history().to_vec(),
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self::capture(game)
    }
}
