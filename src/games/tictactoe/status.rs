//! Derived game status.

use super::rules::{self, WinLine};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the game at a given snapshot.
///
/// Never stored: always recomputed from the board and the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// A player completed a line.
    Won(WinLine),
    /// Board is full with no winner.
    Drawn,
}

impl GameStatus {
    /// Derives the status of `board` with `next` to move.
    #[instrument(skip(board))]
    pub fn derive(board: &Board, next: Player) -> Self {
        if let Some(win) = rules::evaluate(board) {
            GameStatus::Won(win)
        } else if rules::is_full(board) {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns true when no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.win_line().map(|win| win.player())
    }

    /// Returns the winning line if there is one.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won(win) => Some(*win),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player()),
            GameStatus::Drawn => write!(f, "Draw!"),
        }
    }
}
