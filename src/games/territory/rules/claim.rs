//! Territory claiming for a single elimination.

use super::super::{BoardState, Player, Position};
use super::detect::Elimination;
use serde::Serialize;
use tracing::{debug, instrument};

/// Cells affected by one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    /// The elimination that triggered the claim.
    pub elimination: Elimination,
    /// Every cell set to the mover's territory, run cells first, then the
    /// backward walk, then the forward walk. Cells the mover already owned
    /// are included.
    pub claimed: Vec<Position>,
}

/// Removes the run's markers and claims territory along its axis.
///
/// The three run cells are claimed and emptied first. Expansion then walks
/// outward from both ends of the run, one cell at a time, claiming each cell
/// until it reaches the board edge or a cell holding an opponent marker. The
/// opponent marker itself is never claimed or removed.
///
/// Expansion reads the board as left by earlier claims of the same move, so
/// for overlapping runs the second claim sees the first run already removed.
#[instrument(skip(board), fields(run = %elimination))]
pub fn claim(board: &mut BoardState, elimination: &Elimination, player: Player) -> Claim {
    let opponent = player.opponent();
    let mut claimed = Vec::new();

    for cell in elimination.cells() {
        board.claim(cell, player);
        board.clear(cell);
        claimed.push(cell);
    }

    let (d_row, d_col) = elimination.direction.step();
    let walks = [
        (elimination.start, -d_row, -d_col),
        (elimination.end, d_row, d_col),
    ];

    for (from, d_row, d_col) in walks {
        let mut next = from.offset(d_row, d_col);
        while let Some(cell) = next {
            if board.occupant(cell).is(opponent) {
                debug!(blocked_at = %cell, "Expansion stopped by opponent marker");
                break;
            }
            board.claim(cell, player);
            claimed.push(cell);
            next = cell.offset(d_row, d_col);
        }
    }

    debug!(cells = claimed.len(), "Territory claimed");
    Claim {
        elimination: *elimination,
        claimed,
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Owner};
    use super::super::detect::{detect_eliminations, Direction};
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn run(direction: Direction, row: usize, col: usize) -> Elimination {
        Elimination::from_start(direction, pos(row, col)).unwrap()
    }

    #[test]
    fn test_unblocked_row_claims_whole_row() {
        let mut board = BoardState::new();
        for col in 0..3 {
            board.place(pos(0, col), Player::One);
        }

        let claim = claim(&mut board, &run(Direction::Horizontal, 0, 0), Player::One);

        assert_eq!(claim.claimed.len(), 9);
        for col in 0..9 {
            assert!(board.owner(pos(0, col)).is(Player::One));
        }
        for col in 0..3 {
            assert!(board.is_empty(pos(0, col)));
        }
        // Nothing outside the row
        assert_eq!(board.territory_count(Player::One), 9);
    }

    #[test]
    fn test_opponent_marker_blocks_expansion() {
        let mut board = BoardState::new();
        for col in 3..6 {
            board.place(pos(4, col), Player::One);
        }
        board.place(pos(4, 1), Player::Two);
        board.place(pos(4, 7), Player::Two);

        claim(&mut board, &run(Direction::Horizontal, 4, 3), Player::One);

        assert_eq!(board.owner(pos(4, 0)), Owner::Unclaimed);
        assert_eq!(board.owner(pos(4, 1)), Owner::Unclaimed);
        assert!(board.owner(pos(4, 2)).is(Player::One));
        assert!(board.owner(pos(4, 6)).is(Player::One));
        assert_eq!(board.owner(pos(4, 7)), Owner::Unclaimed);
        assert_eq!(board.owner(pos(4, 8)), Owner::Unclaimed);

        // Opponent markers survive
        assert_eq!(board.occupant(pos(4, 1)), Cell::Occupied(Player::Two));
        assert_eq!(board.occupant(pos(4, 7)), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_adjacent_opponent_blocks_immediately() {
        let mut board = BoardState::new();
        for row in 2..5 {
            board.place(pos(row, 6), Player::Two);
        }
        board.place(pos(1, 6), Player::One);
        board.place(pos(5, 6), Player::One);

        let claim = claim(&mut board, &run(Direction::Vertical, 2, 6), Player::Two);

        assert_eq!(claim.claimed, vec![pos(2, 6), pos(3, 6), pos(4, 6)]);
        assert_eq!(board.territory_count(Player::Two), 3);
    }

    #[test]
    fn test_own_markers_do_not_block() {
        let mut board = BoardState::new();
        for col in 0..3 {
            board.place(pos(8, col), Player::One);
        }
        board.place(pos(8, 5), Player::One);

        claim(&mut board, &run(Direction::Horizontal, 8, 0), Player::One);

        assert!(board.owner(pos(8, 8)).is(Player::One));
        // The marker outside the run stays
        assert!(board.occupant(pos(8, 5)).is(Player::One));
    }

    #[test]
    fn test_diagonal_down_walks_both_ways() {
        let mut board = BoardState::new();
        for i in 3..6 {
            board.place(pos(i, i), Player::One);
        }
        board.place(pos(8, 8), Player::Two);

        claim(&mut board, &run(Direction::DiagonalDown, 3, 3), Player::One);

        for i in 0..8 {
            assert!(board.owner(pos(i, i)).is(Player::One), "({i}, {i})");
        }
        assert_eq!(board.owner(pos(8, 8)), Owner::Unclaimed);
        assert_eq!(board.territory_count(Player::One), 8);
    }

    #[test]
    fn test_diagonal_up_walks_up_right_and_down_left() {
        let mut board = BoardState::new();
        // Run (3,5) (4,4) (5,3)
        board.place(pos(3, 5), Player::Two);
        board.place(pos(4, 4), Player::Two);
        board.place(pos(5, 3), Player::Two);
        board.place(pos(1, 7), Player::One);

        claim(&mut board, &run(Direction::DiagonalUp, 3, 5), Player::Two);

        assert!(board.owner(pos(2, 6)).is(Player::Two));
        assert_eq!(board.owner(pos(1, 7)), Owner::Unclaimed);
        assert_eq!(board.owner(pos(0, 8)), Owner::Unclaimed);
        for (row, col) in [(6, 2), (7, 1), (8, 0)] {
            assert!(board.owner(pos(row, col)).is(Player::Two));
        }
    }

    #[test]
    fn test_claim_overwrites_empty_opponent_territory() {
        let mut board = BoardState::new();
        board.claim(pos(0, 7), Player::Two);
        for col in 0..3 {
            board.place(pos(0, col), Player::One);
        }

        claim(&mut board, &run(Direction::Horizontal, 0, 0), Player::One);

        assert!(board.owner(pos(0, 7)).is(Player::One));
    }

    #[test]
    fn test_overlapping_runs_processed_in_order() {
        let mut board = BoardState::new();
        for col in 0..4 {
            board.place(pos(3, col), Player::One);
        }
        board.place(pos(3, 6), Player::Two);

        let runs = detect_eliminations(&board, Player::One);
        assert_eq!(runs.len(), 2);

        let first = claim(&mut board, &runs[0], Player::One);
        // First claim walks over the still-standing (3,3) marker
        assert!(first.claimed.contains(&pos(3, 3)));
        assert!(board.occupant(pos(3, 3)).is(Player::One));

        let second = claim(&mut board, &runs[1], Player::One);
        assert_eq!(&second.claimed[..3], &[pos(3, 1), pos(3, 2), pos(3, 3)]);

        for col in 0..4 {
            assert!(board.is_empty(pos(3, col)));
        }
        for col in 0..6 {
            assert!(board.owner(pos(3, col)).is(Player::One));
        }
        assert_eq!(board.owner(pos(3, 6)), Owner::Unclaimed);
    }
}
