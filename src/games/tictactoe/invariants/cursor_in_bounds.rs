//! Cursor invariant: the active position always names a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current` indexes into a non-empty history.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current() < game.history().len()
    }

    fn description() -> &'static str {
        "Current position points at a recorded snapshot"
    }
}
