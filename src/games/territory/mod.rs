//! Two-player territory game on a 9x9 board.
//!
//! Players alternate placing markers. Three of a player's markers in a row
//! (horizontal, vertical or diagonal) are removed and turned into that
//! player's territory, which then spreads along the run's axis until it
//! meets an opponent marker or the board edge. After a fixed number of
//! moves the player with more territory wins.
//!
//! # Architecture
//!
//! - **Types**: positions, players, cell contents
//! - **Board**: marker and territory grids
//! - **Rules**: detection, claiming and scoring as pure functions
//! - **Game**: the controller that sequences a move
//! - **Contracts/Invariants**: move validation and post-move checks

mod action;
mod board;
pub mod contracts;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use board::BoardState;
pub use game::{DEFAULT_MAX_MOVES, Game, GameState, MoveReport};
pub use phases::{Outcome, Phase};
pub use rules::{Claim, Direction, Elimination, Score};
pub use snapshot::GameSnapshot;
pub use types::{BOARD_SIZE, Cell, Owner, Player, Position};
