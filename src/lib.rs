//! Gomoku engine with Ninuki-renju capture rules
//!
//! A rules engine and AI for the capture variant of Gomoku:
//! - 19x19 board by default, 15x15 supported
//! - Five in a row wins (overlines count)
//! - Pair capture: the X-O-O-X pattern lifts the O-O pair, two stones a pair
//! - Capture win: ten captured stones
//! - Double-three forbidden for both players, unless the move captures
//! - A five that can still be captured does not win outright: the opponent
//!   is forced to break it or the line is confirmed next move
//!
//! # Architecture
//!
//! - [`board`]: grid, stones, and coordinates
//! - [`rules`]: captures, alignments, and the double-three ban
//! - [`game`]: full game state and the move pipeline
//! - [`eval`]: position scoring
//! - [`search`]: alpha-beta move search
//!
//! # Quick Start
//!
//! ```
//! use ninuki::{find_best_move, new_game, BoardSize, Stone};
//!
//! let mut game = new_game(BoardSize::Nineteen);
//! game.process_move(9, 9)?;
//! game.process_move(9, 10)?;
//!
//! // Black asks the engine for a move.
//! if let Some(pos) = find_best_move(&game, 1, Stone::Black) {
//!     game.process_move(usize::from(pos.row), usize::from(pos.col))?;
//! }
//! assert_eq!(game.current_player(), Stone::White);
//! # Ok::<(), ninuki::MoveError>(())
//! ```

pub mod board;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSize, OutOfBoundsError, Pos, Stone};
pub use eval::{evaluate, PatternScore};
pub use game::{
    GameState, MoveError, MoveOutcome, MoveReason, SpecialKind, SpecialWindow, CAPTURE_WIN_COUNT,
};
pub use search::{
    find_best_move, find_best_move_parallel, find_best_move_with_stats, SearchReport,
};

/// Create a fresh game on an empty board. Black moves first.
#[must_use]
pub fn new_game(size: BoardSize) -> GameState {
    GameState::new(size)
}
