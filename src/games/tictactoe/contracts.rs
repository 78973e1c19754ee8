//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::Position;
use super::error::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules;
use super::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The active board must not have a winner yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects moves once a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match rules::check_winner(game.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The target square on the active board must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto occupied squares.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
///
/// The mover is never checked: it is fixed by the active history index.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(position, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - No winner on the active board
/// - Square must be empty
///
/// Postconditions:
/// - All timeline invariants hold
/// - The new snapshot is the last one and directly follows the old active one
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, position: &Position) -> Result<(), MoveError> {
        LegalMove::check(*position, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::BrokenTimeline(descriptions)
        })?;

        if after.current() != before.current() + 1 || after.history().len() != after.current() + 1 {
            warn!("Move did not truncate and append");
            return Err(MoveError::BrokenTimeline(
                "new snapshot must follow the active one".to_string(),
            ));
        }

        Ok(())
    }
}
