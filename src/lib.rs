//! Tic-tac-toe timeline library - game logic with move history and time-travel
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation of a board snapshot
//! - **GameState**: snapshot history, active position and list order,
//!   threaded through commands by value
//! - **GameView**: everything a front end needs to draw one frame
//! - **Config**: TOML session settings
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, GameView};
//!
//! let game = GameState::new()
//!     .apply_move(0)
//!     .apply_move(4)
//!     .apply_move(1)
//!     .jump_to(1)
//!     .apply_move(5);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(GameView::of(&game).status(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Command, CommandParseError, Contract, GameState, GameStatus, GameView, HistoryEntry,
    LegalMove, MoveContract, MoveEntry, MoveError, NoWinnerYet, Player, Position, SortOrder,
    Square, SquareIsEmpty, WinLine, check_winner, evaluate, invariants, rules,
};
