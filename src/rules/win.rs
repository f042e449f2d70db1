//! Alignment detection
//!
//! Five or more contiguous stones win, subject to the endgame checks the
//! game layer runs on top: a contested line opens a break-line window
//! instead of ending the game outright.

use arrayvec::ArrayVec;

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// A contiguous run through one stone spans at most 4 + 1 + 4 cells.
pub const MAX_LINE: usize = 9;

/// Find an alignment of five or more stones through `pos`.
///
/// Checks the 4 axes and returns the full contiguous run of the first axis
/// reaching five, cells in geometric order. The stone must already sit on
/// the board at `pos`.
#[must_use]
pub fn find_alignment(board: &Board, pos: Pos, stone: Stone) -> Option<ArrayVec<Pos, MAX_LINE>> {
    debug_assert_eq!(board.at(pos), stone);
    let row = i32::from(pos.row);
    let col = i32::from(pos.col);

    for &(dr, dc) in &DIRECTIONS {
        let mut backward = ArrayVec::<Pos, 4>::new();
        for i in 1..=4 {
            let r = row - i * dr;
            let c = col - i * dc;
            if !board.in_bounds(r, c) {
                break;
            }
            let prev = Pos::new(r as u8, c as u8);
            if board.at(prev) != stone {
                break;
            }
            backward.push(prev);
        }

        let mut forward = ArrayVec::<Pos, 4>::new();
        for i in 1..=4 {
            let r = row + i * dr;
            let c = col + i * dc;
            if !board.in_bounds(r, c) {
                break;
            }
            let next = Pos::new(r as u8, c as u8);
            if board.at(next) != stone {
                break;
            }
            forward.push(next);
        }

        if backward.len() + 1 + forward.len() >= 5 {
            let mut line = ArrayVec::new();
            for &cell in backward.iter().rev() {
                line.push(cell);
            }
            line.push(pos);
            for &cell in &forward {
                line.push(cell);
            }
            return Some(line);
        }
    }

    None
}

/// Check whether every cell of `line` still holds `stone`.
///
/// Used when a break-line window closes: a capture on the reply may have
/// punched a hole in the aligned run.
#[inline]
#[must_use]
pub fn is_line_intact(board: &Board, line: &[Pos], stone: Stone) -> bool {
    line.iter().all(|&pos| board.at(pos) == stone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board19() -> Board {
        Board::new(BoardSize::Nineteen)
    }

    #[test]
    fn test_horizontal_alignment() {
        let mut board = board19();
        for i in 5..10 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        let line = find_alignment(&board, Pos::new(9, 7), Stone::Black)
            .expect("five in a row must be found");
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(9, 5));
        assert_eq!(line[4], Pos::new(9, 9));
    }

    #[test]
    fn test_vertical_alignment() {
        let mut board = board19();
        for i in 3..8 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        assert!(find_alignment(&board, Pos::new(7, 9), Stone::White).is_some());
    }

    #[test]
    fn test_diagonal_alignment() {
        let mut board = board19();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 4 + i), Stone::Black);
        }
        let line = find_alignment(&board, Pos::new(4, 4), Stone::Black)
            .expect("diagonal five must be found");
        assert_eq!(line[0], Pos::new(4, 4));
        assert_eq!(line[4], Pos::new(8, 8));
    }

    #[test]
    fn test_anti_diagonal_alignment() {
        let mut board = board19();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert!(find_alignment(&board, Pos::new(6, 6), Stone::White).is_some());
    }

    #[test]
    fn test_four_is_not_alignment() {
        let mut board = board19();
        for i in 5..9 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(find_alignment(&board, Pos::new(9, 6), Stone::Black).is_none());
    }

    #[test]
    fn test_overline_counts() {
        let mut board = board19();
        for i in 5..11 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        let line = find_alignment(&board, Pos::new(9, 8), Stone::Black)
            .expect("six in a row must be found");
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_alignment_found_from_end_cell() {
        let mut board = board19();
        for i in 5..10 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        let line = find_alignment(&board, Pos::new(9, 9), Stone::Black)
            .expect("run must be found from its last cell");
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_alignment_at_board_edge() {
        let mut board = board19();
        for i in 0..5 {
            board.place_stone(Pos::new(18, i), Stone::Black);
        }
        assert!(find_alignment(&board, Pos::new(18, 0), Stone::Black).is_some());
    }

    #[test]
    fn test_opponent_run_not_attributed() {
        let mut board = board19();
        for i in 5..10 {
            board.place_stone(Pos::new(9, i), Stone::White);
        }
        // A lone Black stone next to the White run aligns nothing
        board.place_stone(Pos::new(9, 4), Stone::Black);
        assert!(find_alignment(&board, Pos::new(9, 7), Stone::White).is_some());
        assert!(find_alignment(&board, Pos::new(9, 4), Stone::Black).is_none());
    }

    #[test]
    fn test_line_intact_and_broken() {
        let mut board = board19();
        let line: Vec<Pos> = (5..10).map(|i| Pos::new(9, i)).collect();
        for &pos in &line {
            board.place_stone(pos, Stone::Black);
        }
        assert!(is_line_intact(&board, &line, Stone::Black));

        board.remove_stone(Pos::new(9, 7));
        assert!(!is_line_intact(&board, &line, Stone::Black));
    }

    #[test]
    fn test_alignment_on_fifteen_board() {
        let mut board = Board::new(BoardSize::Fifteen);
        for i in 10..15 {
            board.place_stone(Pos::new(i as u8, 14), Stone::White);
        }
        assert!(find_alignment(&board, Pos::new(14, 14), Stone::White).is_some());
    }
}
