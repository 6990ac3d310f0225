//! Core domain types for the territory game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player one (moves first).
    One,
    /// Player two.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player's number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Marker occupancy of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker.
    #[default]
    Empty,
    /// A marker of the given player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if this cell holds a marker of `player`.
    pub fn is(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// Territory ownership of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Owner {
    /// Nobody owns the cell.
    #[default]
    Unclaimed,
    /// The cell is territory of the given player.
    Owned(Player),
}

impl Owner {
    /// Returns true if the cell is territory of `player`.
    pub fn is(self, player: Player) -> bool {
        self == Owner::Owned(player)
    }
}

/// A cell coordinate that is always inside the board.
///
/// The only way to build a `Position` is through [`Position::new`] or
/// [`Position::offset`], both of which reject out-of-range coordinates,
/// so board accessors taking a `Position` never index out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The centre cell.
    pub fn center() -> Self {
        Self {
            row: (BOARD_SIZE / 2) as u8,
            col: (BOARD_SIZE / 2) as u8,
        }
    }

    /// Row index (0-based, top to bottom).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-based, left to right).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Moves by a signed step, or `None` when the step leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }

    /// Parses `"row,col"`, returning `None` for malformed or off-board input.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let (row, col) = s.trim().split_once(',')?;
        let row = row.trim().parse::<usize>().ok()?;
        let col = col.trim().parse::<usize>().ok()?;
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
