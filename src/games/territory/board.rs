//! Board storage: marker occupancy and territory ownership grids.

use super::types::{Cell, Owner, Player, Position, BOARD_SIZE};
use serde::Serialize;
use tracing::instrument;

/// Marker and territory grids for a 9x9 board.
///
/// The two grids are independent: a cell can hold a marker and be
/// territory at the same time, and removing a marker never touches
/// territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardState {
    /// Marker occupancy, row-major.
    markers: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Territory ownership, row-major.
    territory: [[Owner; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardState {
    /// Creates an empty board with no territory.
    #[instrument]
    pub fn new() -> Self {
        Self {
            markers: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            territory: [[Owner::Unclaimed; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns the marker at `pos`.
    pub fn occupant(&self, pos: Position) -> Cell {
        self.markers[pos.row()][pos.col()]
    }

    /// Checks if no marker stands at `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.occupant(pos) == Cell::Empty
    }

    /// Places a marker for `player`. The cell must be empty.
    pub fn place(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "place() on occupied cell {pos}");
        self.markers[pos.row()][pos.col()] = Cell::Occupied(player);
    }

    /// Removes whatever marker stands at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.markers[pos.row()][pos.col()] = Cell::Empty;
    }

    /// Returns the territory owner of `pos`.
    pub fn owner(&self, pos: Position) -> Owner {
        self.territory[pos.row()][pos.col()]
    }

    /// Marks `pos` as territory of `player`.
    pub fn claim(&mut self, pos: Position, player: Player) {
        self.territory[pos.row()][pos.col()] = Owner::Owned(player);
    }

    /// Counts territory cells owned by `player`.
    #[instrument(skip(self))]
    pub fn territory_count(&self, player: Player) -> usize {
        self.territory
            .iter()
            .flatten()
            .filter(|owner| owner.is(player))
            .count()
    }

    /// Counts markers of `player` on the board.
    pub fn marker_count(&self, player: Player) -> usize {
        self.markers
            .iter()
            .flatten()
            .filter(|cell| cell.is(player))
            .count()
    }

    /// Returns the marker grid.
    pub fn markers(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.markers
    }

    /// Returns the territory grid.
    pub fn territory(&self) -> &[[Owner; BOARD_SIZE]; BOARD_SIZE] {
        &self.territory
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one line per row: `X`/`O` for markers, `x`/`o` for empty
/// territory, `.` for empty unclaimed cells.
impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match (self.markers[row][col], self.territory[row][col]) {
                    (Cell::Occupied(Player::One), _) => 'X',
                    (Cell::Occupied(Player::Two), _) => 'O',
                    (Cell::Empty, Owner::Owned(Player::One)) => 'x',
                    (Cell::Empty, Owner::Owned(Player::Two)) => 'o',
                    (Cell::Empty, Owner::Unclaimed) => '.',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert!(Position::all().all(|p| board.is_empty(p)));
        assert!(Position::all().all(|p| board.owner(p) == Owner::Unclaimed));
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = BoardState::new();
        board.place(pos(4, 4), Player::Two);
        assert_eq!(board.occupant(pos(4, 4)), Cell::Occupied(Player::Two));
        assert_eq!(board.marker_count(Player::Two), 1);

        board.clear(pos(4, 4));
        assert!(board.is_empty(pos(4, 4)));

        // Clearing an empty cell is a no-op
        board.clear(pos(4, 4));
        assert!(board.is_empty(pos(4, 4)));
    }

    #[test]
    fn test_claim_is_independent_of_markers() {
        let mut board = BoardState::new();
        board.place(pos(0, 0), Player::One);
        board.claim(pos(0, 0), Player::One);
        board.clear(pos(0, 0));

        assert_eq!(board.owner(pos(0, 0)), Owner::Owned(Player::One));
        assert_eq!(board.territory_count(Player::One), 1);
        assert_eq!(board.territory_count(Player::Two), 0);
    }

    #[test]
    fn test_display() {
        let mut board = BoardState::new();
        board.place(pos(0, 0), Player::One);
        board.place(pos(0, 1), Player::Two);
        board.claim(pos(0, 2), Player::One);
        board.claim(pos(0, 3), Player::Two);

        let text = board.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "X O x o . . . . .");
        assert_eq!(text.lines().count(), BOARD_SIZE);
    }
}
