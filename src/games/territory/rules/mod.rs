//! Game rules for the territory game.
//!
//! Pure functions over [`BoardState`](super::BoardState): run detection,
//! territory claiming and scoring. The game controller composes them; they
//! hold no state of their own.

pub mod claim;
pub mod detect;
pub mod score;

pub use claim::{claim, Claim};
pub use detect::{detect_eliminations, has_run, Direction, Elimination, RUN_LENGTH};
pub use score::{outcome, score, Score};
