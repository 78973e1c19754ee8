//! Why a move request left the timeline untouched.

use super::Position;

/// Reason `GameState::try_apply_move` refused a cell.
///
/// `GameState::apply_move` swallows these and returns the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The active snapshot already holds a completed line.
    #[display("Game is already over")]
    GameOver,

    /// The active snapshot already has a mark on this square.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// The requested cell is not one of 0-8.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The appended snapshot left the history inconsistent.
    #[display("Timeline corrupted: {}", _0)]
    BrokenTimeline(String),
}

impl std::error::Error for MoveError {}
