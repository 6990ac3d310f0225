//! Game controller: turn order, move counting and end-of-game scoring.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::{Outcome, Phase};
use super::rules::{self, Claim, Score};
use super::{BoardState, Cell, Owner, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Move limit used when none is configured.
pub const DEFAULT_MAX_MOVES: u32 = 50;

/// Read-only view of the controller state for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Player to move next.
    pub current_player: Player,
    /// Successful placements so far.
    pub total_moves: u32,
    /// Placements after which the game ends.
    pub max_moves: u32,
    /// True once the move limit was reached.
    pub game_over: bool,
    /// Final result, set together with `game_over`.
    pub outcome: Option<Outcome>,
    /// Last successful placement, for highlighting.
    pub last_move: Option<Position>,
}

impl GameState {
    /// Placements left before the game ends.
    pub fn remaining_moves(&self) -> u32 {
        self.max_moves.saturating_sub(self.total_moves)
    }
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// The placement.
    pub placed: Move,
    /// Claims in processing order, one per elimination.
    pub claims: Vec<Claim>,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
}

impl MoveReport {
    /// Number of markers removed, counting overlapping runs once per run.
    pub fn eliminations(&self) -> usize {
        self.claims.len()
    }
}

/// Territory game engine.
///
/// A self-contained value: independent games can coexist, and every
/// mutation goes through [`Game::make_move`] or [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: BoardState,
    pub(crate) current_player: Player,
    pub(crate) total_moves: u32,
    pub(crate) max_moves: u32,
    pub(crate) phase: Phase,
    pub(crate) last_move: Option<Position>,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game that ends after `max_moves` placements.
    ///
    /// # Panics
    ///
    /// Panics if `max_moves` is zero.
    #[instrument]
    pub fn new(max_moves: u32) -> Self {
        assert!(max_moves > 0, "max_moves must be at least 1");
        Self {
            board: BoardState::new(),
            current_player: Player::One,
            total_moves: 0,
            max_moves,
            phase: Phase::InProgress,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `positions` in order, alternating players.
    ///
    /// # Errors
    ///
    /// Returns the error of the first illegal move.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(max_moves: u32, positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new(max_moves);
        for &position in positions {
            game.play(Move::new(game.current_player, position))?;
        }
        Ok(game)
    }

    /// Places a marker for the current player at `(row, col)`.
    ///
    /// On success the marker is placed, every run of three of the mover's
    /// color is eliminated and converted to territory, the move is counted
    /// and the turn passes. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds`, `GameOver`, `CellOccupied` or
    /// `OpponentTerritory` for illegal moves.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveReport, MoveError> {
        let position = Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(Move::new(self.current_player, position))
    }

    /// Applies a fully specified move.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition, or `InvariantViolation` if a
    /// debug-build postcondition fails. The game is unchanged on error.
    #[instrument(skip(self), fields(mov = %action))]
    pub fn play(&mut self, action: Move) -> Result<MoveReport, MoveError> {
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        let report = next.apply(action);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        *self = next;
        Ok(report)
    }

    /// Applies a move that already passed its preconditions.
    fn apply(&mut self, action: Move) -> MoveReport {
        let player = action.player;

        self.board.place(action.position, player);
        self.last_move = Some(action.position);
        self.history.push(action);

        // Detect on the post-placement board, then process in scan order
        let eliminations = rules::detect_eliminations(&self.board, player);
        let claims: Vec<Claim> = eliminations
            .iter()
            .map(|run| rules::claim(&mut self.board, run, player))
            .collect();
        if !claims.is_empty() {
            debug!(count = claims.len(), "Eliminations processed");
        }

        self.total_moves += 1;
        self.current_player = player.opponent();

        let outcome = if self.total_moves >= self.max_moves {
            let score = self.score();
            let outcome = rules::outcome(score);
            info!(%score, %outcome, "Game over");
            self.phase = Phase::GameOver(outcome);
            Some(outcome)
        } else {
            None
        };

        MoveReport {
            placed: action,
            claims,
            outcome,
        }
    }

    /// Starts over with an empty board, keeping the move limit.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Game reset");
        *self = Self::new(self.max_moves);
    }

    /// Marker at `(row, col)`, or `None` off the board.
    pub fn occupant(&self, row: usize, col: usize) -> Option<Cell> {
        Position::new(row, col).map(|pos| self.board.occupant(pos))
    }

    /// Territory owner of `(row, col)`, or `None` off the board.
    pub fn territory_owner(&self, row: usize, col: usize) -> Option<Owner> {
        Position::new(row, col).map(|pos| self.board.owner(pos))
    }

    /// Territory counts for both players.
    pub fn score(&self) -> Score {
        rules::score(&self.board)
    }

    /// Snapshot of turn, move count and result.
    pub fn state(&self) -> GameState {
        GameState {
            current_player: self.current_player,
            total_moves: self.total_moves,
            max_moves: self.max_moves,
            game_over: self.phase.is_over(),
            outcome: self.phase.outcome(),
            last_move: self.last_move,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of successful placements.
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    /// Returns the move limit.
    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the successful moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MOVES)
    }
}
