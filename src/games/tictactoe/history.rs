//! Board snapshots recorded along the game timeline.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// One immutable snapshot in the game history.
///
/// The initial entry holds the empty board and no move; every later
/// entry records the position that was marked to produce its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn after_move(board: Board, position: Position) -> Self {
        Self {
            board,
            last_move: Some(position),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position marked to produce this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Label for navigating to this entry, given its index in history.
    pub fn describe(&self, move_number: usize) -> String {
        match self.last_move {
            Some(pos) if move_number > 0 => {
                format!("Go to move #{} ({}, {})", move_number, pos.column(), pos.row())
            }
            _ => "Go to game start".to_string(),
        }
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_initial_entry_describes_game_start() {
        let entry = HistoryEntry::initial();
        assert_eq!(entry.last_move(), None);
        assert_eq!(entry.describe(0), "Go to game start");
    }

    #[test]
    fn test_move_entry_uses_column_then_row() {
        let board = Board::new().with_mark(Position::MiddleRight, Player::X);
        let entry = HistoryEntry::after_move(board, Position::MiddleRight);
        // Cell 5: column 3, row 2.
        assert_eq!(entry.describe(1), "Go to move #1 (3, 2)");
    }
}
