//! Game state manager: history, current position and display order.
//!
//! `GameState` is a plain value. Every command takes a state and returns
//! the next one; rejected commands return the state unchanged.

use super::contracts::{Contract, MoveContract};
use super::error::MoveError;
use super::history::HistoryEntry;
use super::status::GameStatus;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order in which history entries are listed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }
}

/// Complete game state: snapshot history plus the active position.
///
/// Invariant: `current < history.len()` and `history` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current: usize,
    sort_order: SortOrder,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new game listing history in `sort_order`.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current: 0,
            sort_order,
        }
    }

    /// Rebuilds a game by playing `cells` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first rejection encountered.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        cells
            .iter()
            .try_fold(Self::new(), |game, &cell| game.try_apply_move(cell))
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the active snapshot.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Display order of the history list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The active snapshot.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current]
    }

    /// The board of the active snapshot.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player to move from the active snapshot.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.current)
    }

    /// Status derived from the active snapshot.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn current_status(&self) -> GameStatus {
        GameStatus::derive(self.current_board(), self.to_move())
    }

    /// Navigation label for the history entry at `index`.
    pub fn describe_move(&self, index: usize) -> Option<String> {
        self.history.get(index).map(|entry| entry.describe(index))
    }

    /// History indices in the selected display order.
    pub fn ordered_indices(&self) -> Vec<usize> {
        let indices = 0..self.history.len();
        match self.sort_order {
            SortOrder::Ascending => indices.collect(),
            SortOrder::Descending => indices.rev().collect(),
        }
    }

    /// Places the next player's mark at `cell`, reporting why a move is refused.
    ///
    /// Everything after the active snapshot is discarded before the new
    /// snapshot is appended.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfBounds` if `cell` is not 0-8
    /// - `MoveError::GameOver` if the active board already has a winner
    /// - `MoveError::SquareOccupied` if the cell is taken
    /// - `MoveError::BrokenTimeline` in debug builds, if the new history
    ///   breaks an invariant
    #[instrument(skip(self), fields(current = self.current))]
    pub fn try_apply_move(&self, cell: usize) -> Result<Self, MoveError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        MoveContract::pre(self, &position)?;

        let board = self.current_board().with_mark(position, self.to_move());

        let mut history = self.history[..=self.current].to_vec();
        history.push(HistoryEntry::after_move(board, position));
        let current = history.len() - 1;

        let next = Self {
            history,
            current,
            sort_order: self.sort_order,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(current = next.current, "Move applied");
        Ok(next)
    }

    /// Places the next player's mark at `cell`.
    ///
    /// Rejected moves leave the state unchanged.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn apply_move(self, cell: usize) -> Self {
        match self.try_apply_move(cell) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Move rejected");
                self
            }
        }
    }

    /// Makes the snapshot at `target` active without touching history.
    ///
    /// Out-of-range targets leave the state unchanged.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn jump_to(mut self, target: usize) -> Self {
        if target < self.history.len() {
            debug!("Jumped");
            self.current = target;
        } else {
            debug!("Jump target out of range");
        }
        self
    }

    /// Flips the display order of the history list.
    #[instrument(skip(self), fields(order = %self.sort_order))]
    pub fn toggle_sort_direction(mut self) -> Self {
        self.sort_order = self.sort_order.toggled();
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
