//! Tic-tac-toe with a navigable move history.

mod command;
mod contracts;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod status;
mod types;
mod view;

pub use command::{Command, CommandParseError};
pub use contracts::{Contract, LegalMove, MoveContract, NoWinnerYet, SquareIsEmpty};
pub use error::MoveError;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{WinLine, check_winner, evaluate};
pub use state::{GameState, SortOrder};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
