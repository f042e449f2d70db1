//! Game rules for Gomoku with the Ninuki-renju capture variant
//!
//! This module implements the rule set:
//! - Capture rules (pair capture)
//! - Alignment detection (5-in-a-row)
//! - Forbidden moves (double-three)

pub mod capture;
pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use capture::{
    capture_completions_on_line, captured_positions, execute_captures, find_capture_anywhere,
    find_capture_on_line, MAX_CAPTURED,
};
pub use forbidden::{count_open_threes, is_double_three};
pub use win::{find_alignment, is_line_intact, MAX_LINE};
