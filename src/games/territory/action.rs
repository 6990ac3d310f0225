//! First-class action types for the territory game.
//!
//! Moves are domain events, not side effects. They record who placed a
//! marker where and can be validated before they are applied.

use super::{Player, Position};
use serde::Serialize;
use tracing::instrument;

/// A move: a player placing a marker at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the marker goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Reason a move was rejected.
///
/// Every variant except `InvariantViolation` is an ordinary illegal move
/// that callers may ignore; the game state is unchanged in all cases.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move limit has been reached.
    #[display("Game is already over")]
    GameOver,

    /// Coordinates are off the board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A marker already stands on the cell.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The cell is the opponent's territory.
    #[display("Cell {} is opponent territory", _0)]
    OpponentTerritory(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A post-move invariant failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
