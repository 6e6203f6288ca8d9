pub mod analysis;
pub mod board;
pub mod history;
pub mod movegen;
pub mod pieces;
pub mod square;
pub mod state;

pub use analysis::{Analysis, Check, PinTable, analyze};
pub use board::{Board, Move};
pub use history::MoveHistory;
pub use pieces::{Cell, Color, Piece};
pub use square::{Direction, Square};
pub use state::{GameState, GameStatus};
