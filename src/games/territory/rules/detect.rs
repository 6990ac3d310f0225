//! Three-in-a-row detection.

use super::super::{BoardState, Player, Position};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Length of a run that triggers an elimination.
pub const RUN_LENGTH: usize = 3;

/// Axis of an elimination run.
///
/// Declaration order is the order in which directions are tested at each
/// start cell. Changing it changes which overlapping run is processed
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Same row, increasing column.
    Horizontal,
    /// Same column, increasing row.
    Vertical,
    /// Row and column both increase (↘).
    DiagonalDown,
    /// Row increases, column decreases (↗ read from the far end).
    DiagonalUp,
}

impl Direction {
    /// Step `(d_row, d_col)` from a run's start cell toward its end cell.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// A detected run of three same-colored markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Elimination {
    /// Axis of the run.
    pub direction: Direction,
    /// First cell of the run in scan order.
    pub start: Position,
    /// Last cell of the run.
    pub end: Position,
}

impl Elimination {
    /// Builds the run starting at `start`, or `None` if it would leave the board.
    pub fn from_start(direction: Direction, start: Position) -> Option<Self> {
        let (d_row, d_col) = direction.step();
        let span = (RUN_LENGTH - 1) as isize;
        let end = start.offset(d_row * span, d_col * span)?;
        Some(Self {
            direction,
            start,
            end,
        })
    }

    /// The three cells of the run, from start to end.
    pub fn cells(&self) -> [Position; RUN_LENGTH] {
        let (d_row, d_col) = self.direction.step();
        let mut cells = [self.start; RUN_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate().skip(1) {
            let i = i as isize;
            // from_start checked the far end, so every intermediate cell exists
            *cell = self.start.offset(d_row * i, d_col * i).unwrap_or(self.end);
        }
        cells
    }
}

impl std::fmt::Display for Elimination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.direction, self.start, self.end)
    }
}

/// Finds every run of three `player` markers on the board.
///
/// Start cells are scanned row-major and, at each start cell, directions
/// are tested in [`Direction`] order. Runs longer than three produce one
/// overlapping event per start cell. The board is only read, so every
/// event reflects the same snapshot.
#[instrument(skip(board))]
pub fn detect_eliminations(board: &BoardState, player: Player) -> Vec<Elimination> {
    let mut found = Vec::new();

    for start in Position::all() {
        if !board.occupant(start).is(player) {
            continue;
        }
        for direction in Direction::iter() {
            let Some(run) = Elimination::from_start(direction, start) else {
                continue;
            };
            if run.cells().iter().all(|&cell| board.occupant(cell).is(player)) {
                debug!(%run, "Three in a row");
                found.push(run);
            }
        }
    }

    found
}

/// Returns true if `player` has any standing run of three.
pub fn has_run(board: &BoardState, player: Player) -> bool {
    !detect_eliminations(board, player).is_empty()
}
