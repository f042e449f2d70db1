//! Pair-capture rules (Ninuki-renju)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone and O is
//! an opponent stone. Exactly two bracketed stones are taken; brackets of one
//! or three opponent stones never capture.

use arrayvec::ArrayVec;

use crate::board::{Board, Pos, Stone};

/// Direction vectors for capture checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// Upper bound on stones captured by one placement: 8 half-directions, one
/// pair each.
pub const MAX_CAPTURED: usize = 16;

/// Find the positions captured by placing `stone` at `pos`.
///
/// All 8 half-directions are examined; several may capture from the same
/// placement. The returned list holds whole pairs, so its length is always
/// even.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Position where the stone is being placed
/// * `stone` - Color of the stone being placed
pub fn captured_positions(board: &Board, pos: Pos, stone: Stone) -> ArrayVec<Pos, MAX_CAPTURED> {
    let mut captured = ArrayVec::new();
    let opponent = stone.opponent();

    for &(dr, dc) in &DIRECTIONS {
        for sign in [-1i32, 1i32] {
            let dr = dr * sign;
            let dc = dc * sign;

            // Pattern: placed(pos) - opp(+1) - opp(+2) - own(+3)
            let r1 = i32::from(pos.row) + dr;
            let c1 = i32::from(pos.col) + dc;
            let r2 = i32::from(pos.row) + dr * 2;
            let c2 = i32::from(pos.col) + dc * 2;
            let r3 = i32::from(pos.row) + dr * 3;
            let c3 = i32::from(pos.col) + dc * 3;

            // The farthest cell bounds the whole ray
            if !board.in_bounds(r3, c3) {
                continue;
            }

            let pos1 = Pos::new(r1 as u8, c1 as u8);
            let pos2 = Pos::new(r2 as u8, c2 as u8);
            let pos3 = Pos::new(r3 as u8, c3 as u8);

            if board.at(pos1) == opponent
                && board.at(pos2) == opponent
                && board.at(pos3) == stone
            {
                captured.push(pos1);
                captured.push(pos2);
            }
        }
    }

    captured
}

/// Remove every stone captured by placing `stone` at `pos`.
///
/// Returns the removed positions; the caller credits the mover's capture
/// counter (two per pair).
pub fn execute_captures(
    board: &mut Board,
    pos: Pos,
    stone: Stone,
) -> ArrayVec<Pos, MAX_CAPTURED> {
    let captured = captured_positions(board, pos, stone);
    for &cap_pos in &captured {
        board.remove_stone(cap_pos);
    }
    captured
}

/// Find a capture available to `mover` anywhere on the board.
///
/// Scans every stone of `mover`'s color for the pattern
/// `mover - opp - opp - empty` along the 8 half-directions and returns the
/// first empty completion cell. Pure query, no mutation.
#[must_use]
pub fn find_capture_anywhere(board: &Board, mover: Stone) -> Option<Pos> {
    let opponent = mover.opponent();

    for anchor in board.stones(mover) {
        for &(dr, dc) in &DIRECTIONS {
            for sign in [-1i32, 1i32] {
                if let Some(completion) =
                    half_direction_capture(board, anchor, dr * sign, dc * sign, opponent)
                {
                    return Some(completion);
                }
            }
        }
    }

    None
}

/// Find every empty cell completing a capture whose bracketed pair touches
/// `line`.
///
/// The result is sorted and deduplicated; it feeds the forced-move list when
/// a five-in-a-row is contested.
#[must_use]
pub fn capture_completions_on_line(board: &Board, mover: Stone, line: &[Pos]) -> Vec<Pos> {
    let opponent = mover.opponent();
    let mut completions = Vec::new();

    for anchor in board.stones(mover) {
        for &(dr, dc) in &DIRECTIONS {
            for sign in [-1i32, 1i32] {
                let dr = dr * sign;
                let dc = dc * sign;
                let Some(completion) = half_direction_capture(board, anchor, dr, dc, opponent)
                else {
                    continue;
                };

                let mid1 = Pos::new(
                    (i32::from(anchor.row) + dr) as u8,
                    (i32::from(anchor.col) + dc) as u8,
                );
                let mid2 = Pos::new(
                    (i32::from(anchor.row) + dr * 2) as u8,
                    (i32::from(anchor.col) + dc * 2) as u8,
                );
                if line.contains(&mid1) || line.contains(&mid2) {
                    completions.push(completion);
                }
            }
        }
    }

    completions.sort_unstable();
    completions.dedup();
    completions
}

/// Find a capture for `mover` whose bracketed pair touches `line`.
///
/// Pure query used to decide whether a fresh five-in-a-row is contestable.
#[must_use]
pub fn find_capture_on_line(board: &Board, mover: Stone, line: &[Pos]) -> Option<Pos> {
    capture_completions_on_line(board, mover, line).into_iter().next()
}

/// Test `anchor - opp - opp - empty` along one half-direction, returning the
/// empty completion cell on a match. Callers iterate the mover's stones, so
/// the anchor's color is already known.
fn half_direction_capture(
    board: &Board,
    anchor: Pos,
    dr: i32,
    dc: i32,
    opponent: Stone,
) -> Option<Pos> {
    let r3 = i32::from(anchor.row) + dr * 3;
    let c3 = i32::from(anchor.col) + dc * 3;
    if !board.in_bounds(r3, c3) {
        return None;
    }

    let pos1 = Pos::new(
        (i32::from(anchor.row) + dr) as u8,
        (i32::from(anchor.col) + dc) as u8,
    );
    let pos2 = Pos::new(
        (i32::from(anchor.row) + dr * 2) as u8,
        (i32::from(anchor.col) + dc * 2) as u8,
    );
    let pos3 = Pos::new(r3 as u8, c3 as u8);

    if board.at(pos1) == opponent && board.at(pos2) == opponent && board.at(pos3) == Stone::Empty {
        Some(pos3)
    } else {
        None
    }
}
