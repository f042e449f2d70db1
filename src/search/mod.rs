//! Move search
//!
//! Fixed-depth alpha-beta over full game states. Candidates follow the
//! rules engine: forced replies first, then cells near existing stones.

pub mod alphabeta;

pub use alphabeta::{
    find_best_move, find_best_move_parallel, find_best_move_with_stats, SearchReport, WIN_SCORE,
};
