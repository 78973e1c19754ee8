//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark added by snapshot `i` belongs to X when `i` is odd and to O
/// when `i` is even, so X always moves first.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().skip(1).all(|(i, entry)| {
            let expected = Player::to_move_at(i - 1);
            entry
                .last_move()
                .and_then(|pos| entry.board().get(pos).player())
                == Some(expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::new();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternation_survives_rewrite() {
        let game = GameState::replay(&[0, 4, 8])
            .expect("valid replay")
            .jump_to(2)
            .apply_move(5);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }
}
