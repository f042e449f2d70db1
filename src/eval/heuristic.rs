//! Heuristic evaluation of game states
//!
//! Scores a position for the minimax search from run patterns (twos through
//! fives, open ends weighted up), the capture counters, and center control.
//!
//! The score is antisymmetric by construction:
//! `evaluate(state, color) == -evaluate(state, color.opponent())`.

use crate::board::{Board, Pos, Stone};
use crate::game::{GameState, CAPTURE_WIN_COUNT};

use super::patterns::PatternScore;

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// Evaluate the position from the perspective of `color`.
///
/// Positive favors `color`, negative favors the opponent. A side holding
/// the capture win scores `PatternScore::FIVE` outright; a five on the
/// board reaches the same weight through the run scan.
#[must_use]
pub fn evaluate(state: &GameState, color: Stone) -> i32 {
    let opponent = color.opponent();

    if state.captures(color) >= CAPTURE_WIN_COUNT {
        return PatternScore::FIVE;
    }
    if state.captures(opponent) >= CAPTURE_WIN_COUNT {
        return -PatternScore::FIVE;
    }

    side_score(state, color) - side_score(state, opponent)
}

/// One side's total: run patterns, captured stones, center control.
fn side_score(state: &GameState, color: Stone) -> i32 {
    let board = state.board();
    let mut score = 0;

    for pos in board.stones(color) {
        for &(dr, dc) in &DIRECTIONS {
            score += run_score(board, pos, dr, dc, color);
        }
        score += center_score(board, pos);
    }

    score + state.captures(color) as i32 * PatternScore::CAPTURE_STONE
}

/// Score the run through `pos` along one axis.
///
/// Only the first stone of a run scores it, so each segment is counted
/// exactly once. Length and the two flanking cells pick the pattern weight.
fn run_score(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let row = i32::from(pos.row);
    let col = i32::from(pos.col);

    let prev_r = row - dr;
    let prev_c = col - dc;
    let start_open = if board.in_bounds(prev_r, prev_c) {
        let prev = board.at(Pos::new(prev_r as u8, prev_c as u8));
        if prev == color {
            // Not the start of this run.
            return 0;
        }
        prev == Stone::Empty
    } else {
        false
    };

    let mut len = 1;
    let mut r = row + dr;
    let mut c = col + dc;
    while board.in_bounds(r, c) && board.at(Pos::new(r as u8, c as u8)) == color {
        len += 1;
        r += dr;
        c += dc;
    }
    let end_open = board.in_bounds(r, c) && board.at(Pos::new(r as u8, c as u8)) == Stone::Empty;

    let open_ends = u32::from(start_open) + u32::from(end_open);
    match (len, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}

/// Center-proximity bonus for one stone (Manhattan distance).
fn center_score(board: &Board, pos: Pos) -> i32 {
    let center = (board.side() / 2) as i32;
    let dist = (i32::from(pos.row) - center).abs() + (i32::from(pos.col) - center).abs();
    (2 * center - dist) * PatternScore::POSITION_WEIGHT
}
