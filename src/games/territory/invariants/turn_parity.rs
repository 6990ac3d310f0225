//! Turn parity invariant: turn order, move count and phase agree.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: players alternate starting with player one, the move count
/// matches the history, and the game is over exactly when the limit is hit.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        let total = game.total_moves();

        let expected_player = if total % 2 == 0 { Player::One } else { Player::Two };
        if game.current_player() != expected_player {
            return false;
        }

        if game.history().len() != total as usize || total > game.max_moves() {
            return false;
        }

        let alternates = game
            .history()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == if i % 2 == 0 { Player::One } else { Player::Two });

        alternates && game.phase().is_over() == (total >= game.max_moves())
    }

    fn description() -> &'static str {
        "Players alternate and the move count matches history and phase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_a_short_game() {
        let mut game = Game::new(4);
        for (row, col) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            game.make_move(row, col).expect("legal move");
            assert!(TurnParityInvariant::holds(&game));
        }
        assert!(game.phase().is_over());
    }

    #[test]
    fn test_skipped_turn_violates() {
        let mut game = Game::default();
        game.make_move(0, 0).expect("legal move");
        game.current_player = Player::One;
        assert!(!TurnParityInvariant::holds(&game));
    }

    #[test]
    fn test_uncounted_move_violates() {
        let mut game = Game::default();
        game.make_move(0, 0).expect("legal move");
        game.total_moves = 2;
        game.current_player = Player::One;
        assert!(!TurnParityInvariant::holds(&game));
    }
}
