//! Strictly Territory library - rules engine for a 9x9 territory game
//!
//! Two players alternate placing markers. A run of three of one player's
//! markers is removed and becomes that player's territory, which spreads
//! along the run's axis until it meets an opponent marker or the edge.
//! After a fixed number of moves the larger territory wins.
//!
//! # Architecture
//!
//! - **Games**: board, rules, game controller, contracts and invariants
//! - **Config**: TOML game settings
//!
//! # Example
//!
//! ```
//! use strictly_territory::{Game, Player};
//!
//! let mut game = Game::default();
//! for (row, col) in [(0, 0), (8, 8), (0, 1), (8, 7), (0, 2)] {
//!     game.make_move(row, col)?;
//! }
//! assert_eq!(game.score().of(Player::One), 9);
//! # Ok::<(), strictly_territory::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use games::territory::{
    BoardState, Cell, Claim, DEFAULT_MAX_MOVES, Direction, Elimination, Game, GameSnapshot,
    GameState, Move, MoveError, MoveReport, Outcome, Owner, Phase, Player, Position, Score,
    BOARD_SIZE,
};

// Crate-level exports - Rules, contracts and invariants
pub use games::territory::{contracts, invariants, rules};
