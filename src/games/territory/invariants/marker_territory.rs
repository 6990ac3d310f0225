//! Marker/territory invariant: no marker sits in enemy territory.

use super::super::{Cell, Game, Owner, Position};
use super::Invariant;

/// Invariant: a cell holding a marker is never the territory of the
/// marker owner's opponent.
///
/// Placement onto opponent territory is illegal, and claim expansion
/// stops at opponent markers, so the combination can't arise.
pub struct MarkerTerritoryInvariant;

impl Invariant<Game> for MarkerTerritoryInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        Position::all().all(|pos| match board.occupant(pos) {
            Cell::Empty => true,
            Cell::Occupied(player) => board.owner(pos) != Owner::Owned(player.opponent()),
        })
    }

    fn description() -> &'static str {
        "No marker stands in its opponent's territory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::territory::Player;

    #[test]
    fn test_new_game_holds() {
        assert!(MarkerTerritoryInvariant::holds(&Game::default()));
    }

    #[test]
    fn test_marker_in_own_territory_holds() {
        let mut game = Game::default();
        let pos = Position::new(2, 2).unwrap();
        game.board.claim(pos, Player::One);
        game.board.place(pos, Player::One);
        assert!(MarkerTerritoryInvariant::holds(&game));
    }

    #[test]
    fn test_marker_in_enemy_territory_violates() {
        let mut game = Game::default();
        let pos = Position::new(2, 2).unwrap();
        game.board.claim(pos, Player::Two);
        game.board.place(pos, Player::One);
        assert!(!MarkerTerritoryInvariant::holds(&game));
    }
}
