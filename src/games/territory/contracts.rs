//! Contract-based validation for territory moves.
//!
//! Contracts pair preconditions, checked before a move is applied, with
//! postconditions that must hold on the resulting state: {P} move {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TerritoryInvariants};
use super::{Game, Owner};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move limit has not been reached.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is over.
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.phase().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move is made by the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player != game.current_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: no marker stands on the target cell.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto occupied cells.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Precondition: the target cell is not the opponent's territory.
///
/// Unclaimed cells and the mover's own territory are both allowed.
pub struct NotOpponentTerritory;

impl NotOpponentTerritory {
    /// Rejects moves into the opponent's territory.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().owner(mov.position) == Owner::Owned(mov.player.opponent()) {
            Err(MoveError::OpponentTerritory(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every check a legal move must pass.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        NotOpponentTerritory::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
/// Postconditions: every invariant in [`TerritoryInvariants`].
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        TerritoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
