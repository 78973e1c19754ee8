//! Display state handed to the presentation layer.

use super::state::GameState;
use super::{Board, Position};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// Index into the history.
    index: usize,
    /// Navigation label.
    description: String,
    /// Whether this entry is the active snapshot.
    is_current: bool,
}

/// Everything needed to render one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Active board.
    board: Board,
    /// Status line.
    status: String,
    /// History list in the selected order.
    moves: Vec<MoveEntry>,
    /// Label of the sort toggle control.
    sort_label: String,
    /// Cell indices (0-8) of the winning line, empty while undecided.
    winning_squares: Vec<usize>,
}

impl GameView {
    /// Builds the view of `game`'s active snapshot.
    #[instrument(skip(game), fields(current = game.current()))]
    pub fn of(game: &GameState) -> Self {
        let status = game.current_status();

        let moves = game
            .ordered_indices()
            .into_iter()
            .map(|index| MoveEntry {
                index,
                description: game.history()[index].describe(index),
                is_current: index == game.current(),
            })
            .collect();

        Self {
            board: *game.current_board(),
            status: status.to_string(),
            moves,
            sort_label: game.sort_order().toggle_label().to_string(),
            winning_squares: status
                .win_line()
                .map(|win| win.indices().to_vec())
                .unwrap_or_default(),
        }
    }

    /// Whether `pos` should be highlighted as part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_squares.contains(&pos.to_index())
    }

    /// Plain-text rendering: status, board, sort control and history list.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push_str("\n\n");
        out.push_str(&self.board.display());
        out.push_str("\n\n[");
        out.push_str(&self.sort_label);
        out.push_str("]\n");
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {}. {}\n", marker, entry.index, entry.description));
        }
        out
    }
}
