//! Playing grid with bounds-checked access

use std::fmt;

use super::{BoardSize, Pos, Stone};

/// A coordinate outside the grid was used
///
/// This is a caller bug, never a game outcome: every legal interaction stays
/// inside `0..side` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position ({row}, {col}) is outside the board")]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
}

/// Square grid of stones, side length fixed at construction
///
/// The grid owns its cells exclusively; cloning produces an independent deep
/// copy, which is what search and dry-run validation rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Stone>,
}

impl Board {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size.cell_count()],
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length in cells
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Check signed coordinates against the grid, for scan arithmetic that
    /// probes past the edges
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let side = self.side() as i32;
        row >= 0 && row < side && col >= 0 && col < side
    }

    /// Get stone at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Stone, OutOfBoundsError> {
        if row >= self.side() || col >= self.side() {
            return Err(OutOfBoundsError { row, col });
        }
        Ok(self.cells[row * self.side() + col])
    }

    /// Set the cell at (row, col)
    pub fn set(&mut self, row: usize, col: usize, stone: Stone) -> Result<(), OutOfBoundsError> {
        if row >= self.side() || col >= self.side() {
            return Err(OutOfBoundsError { row, col });
        }
        let idx = row * self.side() + col;
        self.cells[idx] = stone;
        Ok(())
    }

    /// Get stone at a validated position
    #[inline]
    pub(crate) fn at(&self, pos: Pos) -> Stone {
        debug_assert!(self.in_bounds(i32::from(pos.row), i32::from(pos.col)));
        self.cells[pos.row as usize * self.side() + pos.col as usize]
    }

    /// Check if a validated position is empty
    #[inline]
    pub(crate) fn is_empty(&self, pos: Pos) -> bool {
        self.at(pos) == Stone::Empty
    }

    /// Place a stone (no rule processing; use `GameState::process_move` for
    /// game moves)
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.in_bounds(i32::from(pos.row), i32::from(pos.col)));
        let idx = pos.row as usize * self.side() + pos.col as usize;
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Iterate the positions holding a given color
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, &cell)| cell == stone)
            .map(move |(idx, _)| Pos::new((idx / side) as u8, (idx % side) as u8))
    }

    /// Total stones on board
    #[must_use]
    pub fn stone_count(&self) -> u32 {
        self.cells.iter().filter(|&&cell| cell != Stone::Empty).count() as u32
    }

    /// Check if board is empty
    #[must_use]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Stone::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.side() {
            write!(f, "{col:<3}")?;
        }
        writeln!(f)?;
        for row in 0..self.side() {
            write!(f, "{row:<3}")?;
            for col in 0..self.side() {
                let mark = match self.cells[row * self.side() + col] {
                    Stone::Black => 'B',
                    Stone::White => 'W',
                    Stone::Empty => '.',
                };
                write!(f, "{mark}  ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(BoardSize::Nineteen);
        assert!(board.is_board_empty());
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.side(), 19);
    }

    #[test]
    fn test_get_set_in_bounds_never_fail() {
        let mut board = Board::new(BoardSize::Fifteen);
        for row in 0..15 {
            for col in 0..15 {
                assert_eq!(board.get(row, col), Ok(Stone::Empty));
                assert_eq!(board.set(row, col, Stone::Black), Ok(()));
                assert_eq!(board.get(row, col), Ok(Stone::Black));
            }
        }
    }

    #[test]
    fn test_get_set_out_of_bounds_fail() {
        let mut board = Board::new(BoardSize::Fifteen);
        assert_eq!(
            board.get(15, 0),
            Err(OutOfBoundsError { row: 15, col: 0 })
        );
        assert_eq!(
            board.get(0, 99),
            Err(OutOfBoundsError { row: 0, col: 99 })
        );
        assert!(board.set(15, 15, Stone::White).is_err());
        // A rejected set leaves the grid untouched
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_in_bounds_signed() {
        let board = Board::new(BoardSize::Nineteen);
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(18, 18));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, -1));
        assert!(!board.in_bounds(19, 0));
        assert!(!board.in_bounds(0, 19));
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new(BoardSize::Nineteen);
        let pos = Pos::new(9, 9);
        board.place_stone(pos, Stone::Black);
        assert_eq!(board.at(pos), Stone::Black);
        assert!(!board.is_empty(pos));

        board.remove_stone(pos);
        assert_eq!(board.at(pos), Stone::Empty);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_stones_iteration() {
        let mut board = Board::new(BoardSize::Nineteen);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(9, 9), Stone::Black);
        board.place_stone(Pos::new(18, 18), Stone::White);

        let black: Vec<Pos> = board.stones(Stone::Black).collect();
        assert_eq!(black, vec![Pos::new(0, 0), Pos::new(9, 9)]);
        let white: Vec<Pos> = board.stones(Stone::White).collect();
        assert_eq!(white, vec![Pos::new(18, 18)]);
        assert_eq!(board.stone_count(), 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut board = Board::new(BoardSize::Fifteen);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let copy = board.clone();

        board.place_stone(Pos::new(7, 8), Stone::White);
        assert_eq!(copy.at(Pos::new(7, 8)), Stone::Empty);
        assert_eq!(copy.at(Pos::new(7, 7)), Stone::Black);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(BoardSize::Fifteen);
        board.place_stone(Pos::new(0, 1), Stone::Black);
        board.place_stone(Pos::new(1, 0), Stone::White);
        let rendered = board.to_string();
        assert!(rendered.contains('B'));
        assert!(rendered.contains('W'));
        assert!(rendered.lines().count() >= 16);
    }
}
