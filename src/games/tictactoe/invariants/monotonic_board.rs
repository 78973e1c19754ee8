//! Monotonic board invariant: squares once filled are never cleared.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: along the timeline, an occupied square keeps its mark.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            Position::ALL.iter().all(|&pos| match pair[0].board().get(pos) {
                Square::Empty => true,
                filled => pair[1].board().get(pos) == filled,
            })
        })
    }

    fn description() -> &'static str {
        "Board squares never revert or change owner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_of_moves_holds() {
        let game = GameState::replay(&[4, 0, 8, 2]).expect("valid replay");
        assert!(MonotonicBoardInvariant::holds(&game));
    }
}
