//! History consistency invariant: each snapshot is one move after the last.

use super::super::{GameState, HistoryEntry, Position};
use super::Invariant;

/// Invariant: snapshot `i` has exactly `i` marks, and its recorded move is
/// the only square that differs from snapshot `i - 1`.
///
/// The initial snapshot records no move.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    fn follows(prev: &HistoryEntry, next: &HistoryEntry) -> bool {
        let Some(moved) = next.last_move() else {
            return false;
        };

        Position::ALL.iter().all(|&pos| {
            let changed = prev.board().get(pos) != next.board().get(pos);
            changed == (pos == moved)
        })
    }
}

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.last_move().is_some() {
            return false;
        }

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(i, entry)| entry.board().occupied_count() == i);

        counts_match
            && history
                .windows(2)
                .all(|pair| Self::follows(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly the recorded move to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::new();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[0, 4, 2, 6]).expect("valid replay");
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_full_game_holds() {
        let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("valid replay");
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 10);
    }
}
