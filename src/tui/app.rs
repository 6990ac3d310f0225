//! Application state and logic.

use super::input::{move_cursor, Action};
use crossterm::event::KeyCode;
use strictly_territory::{Game, GameConfig, Position, Score};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application for the configured game.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: config.new_game(),
            cursor: Position::center(),
            status_message: "Player 1 to move".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match Action::from_key(key) {
            Some(Action::Move(step)) => self.cursor = move_cursor(self.cursor, step),
            Some(Action::Place) => self.place_at_cursor(),
            Some(Action::Restart) => self.restart(),
            Some(Action::Quit) => {
                info!("User quit");
                self.should_quit = true;
            }
            None => {}
        }
    }

    /// Places a marker at the cursor. Illegal moves only update the status.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub fn place_at_cursor(&mut self) {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        match self.game.make_move(row, col) {
            Ok(report) => {
                debug!(eliminations = report.eliminations(), "Move applied to UI state");
                self.status_message = match (report.outcome, report.eliminations()) {
                    (Some(outcome), _) => format!(
                        "Game over: {} ({}). Press 'r' to restart or 'q' to quit.",
                        outcome,
                        self.game.score()
                    ),
                    (None, 0) => format!("{} played {}", report.placed.player, report.placed.position),
                    (None, n) => format!(
                        "{} played {} and cleared {} run{}",
                        report.placed.player,
                        report.placed.position,
                        n,
                        if n == 1 { "" } else { "s" }
                    ),
                };
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.status_message = e.to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = "Game restarted. Player 1 to move.".to_string();
    }

    /// Territory, remaining moves and turn as one line.
    pub fn summary(&self) -> String {
        let state = self.game.state();
        let Score {
            player_one,
            player_two,
        } = self.game.score();
        if state.game_over {
            format!(
                "Player 1: {} | Player 2: {} | Game over",
                player_one, player_two
            )
        } else {
            format!(
                "Player 1: {} | Player 2: {} | Moves left: {} | Turn: {}",
                player_one,
                player_two,
                state.remaining_moves(),
                state.current_player
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_territory::{Cell, Player};

    fn app() -> App {
        App::new(&GameConfig::default())
    }

    #[test]
    fn test_cursor_starts_in_centre() {
        assert_eq!(app().cursor(), Position::new(4, 4).unwrap());
    }

    #[test]
    fn test_place_and_reject() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().occupant(4, 4),
            Some(Cell::Occupied(Player::One))
        );

        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.game().total_moves(), 1);
        assert!(app.status_message().contains("occupied"));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().total_moves(), 0);
        assert!(!app.should_quit());

        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_summary_counts_down() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.summary(),
            "Player 1: 0 | Player 2: 0 | Moves left: 49 | Turn: Player 2"
        );
    }
}
