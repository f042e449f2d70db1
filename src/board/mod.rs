//! Board representation: stones, coordinates, and the playing grid

pub mod grid;

// Re-exports
pub use grid::{Board, OutOfBoundsError};

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    #[must_use]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for Black and White, false for Empty
    #[inline]
    #[must_use]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

/// Supported board side lengths
///
/// The grid is square and its size is fixed at construction; these two
/// configurations are the only ones the rules cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSize {
    Fifteen,
    Nineteen,
}

impl BoardSize {
    /// Side length in cells (15 or 19)
    #[inline]
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Fifteen => 15,
            BoardSize::Nineteen => 19,
        }
    }

    /// Total number of cells on the grid
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Stone::Black.opponent(), Stone::White);
        assert_eq!(Stone::White.opponent(), Stone::Black);
        assert_eq!(Stone::Empty.opponent(), Stone::Empty);
    }

    #[test]
    fn test_board_size() {
        assert_eq!(BoardSize::Fifteen.side(), 15);
        assert_eq!(BoardSize::Nineteen.side(), 19);
        assert_eq!(BoardSize::Fifteen.cell_count(), 225);
        assert_eq!(BoardSize::Nineteen.cell_count(), 361);
    }

    #[test]
    fn test_pos_ordering() {
        // Row-major order, used to keep forced-move lists deterministic
        assert!(Pos::new(0, 18) < Pos::new(1, 0));
        assert!(Pos::new(4, 2) < Pos::new(4, 3));
    }
}
