//! Double-three detection
//!
//! A placement completing an open three in two or more axis directions at
//! once is forbidden. Capturing moves are exempt; that precedence is
//! sequenced by the move pipeline, this module only recognizes the patterns.

use arrayvec::ArrayVec;

use crate::board::{Board, Pos, Stone};

/// Direction vectors (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// Open-three shapes (1 = mover's stone, 0 = empty)
///
/// The solid three plus both single-gap variants; each extends to an
/// unblocked four when either open flank is filled.
const OPEN_THREE_SHAPES: [&[u8]; 3] = [
    &[0, 1, 1, 1, 0],
    &[0, 1, 1, 0, 1, 0],
    &[0, 1, 0, 1, 1, 0],
];

/// Cells examined around a placement per axis: 4 each side plus the placed
/// cell, clipped at the edges.
const WINDOW_REACH: i32 = 4;

/// Count the axis directions in which placing `stone` at `pos` completed an
/// open three. Exits early at 2, the forbidden threshold.
///
/// The stone must already sit on the board at `pos`.
#[must_use]
pub fn count_open_threes(board: &Board, pos: Pos, stone: Stone) -> u32 {
    debug_assert_eq!(board.at(pos), stone);
    let mut threes = 0;

    for &(dr, dc) in &DIRECTIONS {
        let (window, placed_idx) = direction_window(board, pos, dr, dc);
        if matches_open_three(&window, placed_idx, stone) {
            threes += 1;
            if threes >= 2 {
                return threes;
            }
        }
    }

    threes
}

/// Check whether the placement at `pos` is a forbidden double-three.
#[inline]
#[must_use]
pub fn is_double_three(board: &Board, pos: Pos, stone: Stone) -> bool {
    count_open_threes(board, pos, stone) >= 2
}

/// Collect the cells along one axis through `pos`, geometrically ordered,
/// and the placed cell's index within the window.
fn direction_window(board: &Board, pos: Pos, dr: i32, dc: i32) -> (ArrayVec<Stone, 9>, usize) {
    let row = i32::from(pos.row);
    let col = i32::from(pos.col);

    let mut backward = ArrayVec::<Stone, 4>::new();
    for i in 1..=WINDOW_REACH {
        let r = row - i * dr;
        let c = col - i * dc;
        if !board.in_bounds(r, c) {
            break;
        }
        backward.push(board.at(Pos::new(r as u8, c as u8)));
    }

    let mut window = ArrayVec::<Stone, 9>::new();
    let placed_idx = backward.len();
    for &cell in backward.iter().rev() {
        window.push(cell);
    }
    window.push(board.at(pos));
    for i in 1..=WINDOW_REACH {
        let r = row + i * dr;
        let c = col + i * dc;
        if !board.in_bounds(r, c) {
            break;
        }
        window.push(board.at(Pos::new(r as u8, c as u8)));
    }

    (window, placed_idx)
}

/// Slide each shape across the ±2 window around the placed index and test
/// for a match. A shape can only match with the placed stone inside it, so
/// the slide bounds keep the check anchored to this move.
fn matches_open_three(window: &[Stone], placed_idx: usize, stone: Stone) -> bool {
    let len = window.len() as i32;

    for shape in OPEN_THREE_SHAPES {
        let shape_len = shape.len() as i32;
        for offset in -2..=2i32 {
            let start = placed_idx as i32 - 2 + offset;
            if start < 0 || start + shape_len > len {
                continue;
            }
            let start = start as usize;
            let matched = shape.iter().enumerate().all(|(k, &want)| {
                let expected = if want == 1 { stone } else { Stone::Empty };
                window[start + k] == expected
            });
            if matched {
                return true;
            }
        }
    }

    false
}
