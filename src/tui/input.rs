//! Key bindings and cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_territory::Position;

/// One-cell cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Move(Step),
    /// Place a marker at the cursor.
    Place,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

impl Action {
    /// Maps a key to its action. Arrow keys and `hjkl` move the cursor.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Step::Up)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Step::Down)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Step::Left)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Step::Right)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Moves the cursor one cell. Stays put at the board edge.
pub fn move_cursor(cursor: Position, step: Step) -> Position {
    let (d_row, d_col) = match step {
        Step::Up => (-1, 0),
        Step::Down => (1, 0),
        Step::Left => (0, -1),
        Step::Right => (0, 1),
    };
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}
