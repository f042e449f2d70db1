//! Game state and the move pipeline
//!
//! `GameState` owns the board, the capture counters, the forced-move list,
//! and the special-window bookkeeping. `process_move` is the single mutating
//! entry point; a rejected move leaves the state exactly as it was.
//!
//! A game flows through three shapes: normal play, an open special window
//! after a contested five-in-a-row, and the terminal state with a winner.

use arrayvec::ArrayVec;

use crate::board::{Board, BoardSize, OutOfBoundsError, Pos, Stone};
use crate::rules::capture::{capture_completions_on_line, execute_captures, find_capture_anywhere};
use crate::rules::forbidden::is_double_three;
use crate::rules::win::{find_alignment, is_line_intact, MAX_LINE};

/// Captured stones needed to win (5 pairs).
pub const CAPTURE_WIN_COUNT: u32 = 10;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("{_0}")]
    OutOfBounds(OutOfBoundsError),
    #[display("the game is already over")]
    GameOver,
    #[display("a forced capture is pending; the move must be one of the forced cells")]
    ForcedMoveRequired,
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[display("placement would create two open threes at once")]
    DoubleThree,
}

impl From<OutOfBoundsError> for MoveError {
    fn from(err: OutOfBoundsError) -> Self {
        Self::OutOfBounds(err)
    }
}

/// Kind of window opened by a contested five-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SpecialKind {
    /// The opponent can capture a pair out of the aligned line; the reply is
    /// forced to one of those captures.
    BreakLine,
    /// The opponent sits one pair short of the capture win and still has a
    /// capture available; one unrestricted reply to take it.
    PlaySpecial,
}

/// An open endgame window: the aligner waits one reply before winning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialWindow {
    pub kind: SpecialKind,
    /// Player whose five-in-a-row opened the window.
    pub owner: Stone,
    /// The full aligned run, cells in geometric order.
    pub line: ArrayVec<Pos, MAX_LINE>,
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveReason {
    /// Ordinary placement, play continues.
    Played,
    /// Mover reached ten captured stones.
    WinByCaptures,
    /// A five-in-a-row stood, immediately or after the window reply.
    WinByAlignment,
    /// Five-in-a-row is contested; the reply must break the line.
    BreakLineOpened,
    /// Five-in-a-row stands but the opponent may still win by capture.
    PlaySpecialOpened,
    /// The window reply captured a stone out of the aligned line.
    LineBroken,
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub game_over: bool,
    pub winner: Option<Stone>,
    pub reason: MoveReason,
}

/// Complete state of one game.
///
/// Created per game, deep-cloned for search dry-runs. All mutation goes
/// through [`GameState::process_move`].
///
/// # Example
///
/// ```
/// use ninuki::{BoardSize, GameState, Stone};
///
/// let mut game = GameState::new(BoardSize::Nineteen);
/// game.process_move(9, 9).unwrap();
///
/// assert_eq!(game.cell(9, 9).unwrap(), Stone::Black);
/// assert_eq!(game.current_player(), Stone::White);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    /// Opponent stones Black has captured (not Black stones lost).
    black_captured: u32,
    white_captured: u32,
    /// When non-empty, the current player must play one of these cells.
    /// Sorted and deduplicated.
    forced_moves: Vec<Pos>,
    special: Option<SpecialWindow>,
    game_over: bool,
    winner: Option<Stone>,
}

impl GameState {
    /// Create a fresh game on an empty board. Black moves first.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Stone::Black,
            black_captured: 0,
            white_captured: 0,
            forced_moves: Vec::new(),
            special: None,
            game_over: false,
            winner: None,
        }
    }

    /// Play the current player's stone at `(row, col)`.
    ///
    /// The move runs the full pipeline: forced-move check, placement, pair
    /// captures, double-three check, the two win checks, and special-window
    /// handling. On success the turn passes to the opponent unless the game
    /// ended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::ForcedMoveRequired`] if a break-line reply is pending
    ///   and `(row, col)` is not one of the forced cells
    /// - [`MoveError::OutOfBounds`] / [`MoveError::CellOccupied`] for invalid
    ///   targets
    /// - [`MoveError::DoubleThree`] if the placement would create two open
    ///   threes at once without capturing
    ///
    /// A rejected move never changes the state.
    pub fn process_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        if !self.forced_moves.is_empty() {
            let allowed = self
                .forced_moves
                .iter()
                .any(|&p| usize::from(p.row) == row && usize::from(p.col) == col);
            if !allowed {
                return Err(MoveError::ForcedMoveRequired);
            }
        }
        if self.board.get(row, col)? != Stone::Empty {
            return Err(MoveError::CellOccupied { row, col });
        }

        let mover = self.current_player;
        let pos = Pos::new(row as u8, col as u8);
        self.board.place_stone(pos, mover);

        let captured = execute_captures(&mut self.board, pos, mover);
        if captured.is_empty() && is_double_three(&self.board, pos, mover) {
            // Revert the placement; captures pre-empt this check.
            self.board.remove_stone(pos);
            return Err(MoveError::DoubleThree);
        }
        self.add_captures(mover, captured.len() as u32);

        // The move is accepted; the forced list it satisfied is spent.
        self.forced_moves.clear();

        let mut reason = MoveReason::Played;

        if self.captures(mover) >= CAPTURE_WIN_COUNT {
            self.finish(mover);
            reason = MoveReason::WinByCaptures;
        } else if let Some(line) = find_alignment(&self.board, pos, mover) {
            let opponent = mover.opponent();
            if self.captures(opponent) >= CAPTURE_WIN_COUNT - 2
                && find_capture_anywhere(&self.board, opponent).is_some()
            {
                // One more pair wins for the opponent: one free reply.
                self.special = Some(SpecialWindow {
                    kind: SpecialKind::PlaySpecial,
                    owner: mover,
                    line,
                });
                reason = MoveReason::PlaySpecialOpened;
            } else {
                let completions = capture_completions_on_line(&self.board, opponent, &line);
                if completions.is_empty() {
                    self.finish(mover);
                    reason = MoveReason::WinByAlignment;
                } else {
                    // The line can be captured out; the reply must do so.
                    self.special = Some(SpecialWindow {
                        kind: SpecialKind::BreakLine,
                        owner: mover,
                        line,
                    });
                    self.forced_moves = completions;
                    reason = MoveReason::BreakLineOpened;
                }
            }
        }

        // Resolve a window opened by the opponent's previous move, unless
        // this move ended the game or opened a window of its own (a new
        // window replaces the old one).
        if !self.game_over && reason.is_played() {
            if let Some(window) = self.special.clone() {
                if window.owner != mover {
                    match window.kind {
                        SpecialKind::BreakLine => {
                            if is_line_intact(&self.board, &window.line, window.owner) {
                                self.finish(window.owner);
                                reason = MoveReason::WinByAlignment;
                            } else {
                                self.special = None;
                                reason = MoveReason::LineBroken;
                            }
                        }
                        SpecialKind::PlaySpecial => {
                            // The reply did not reach the capture win.
                            self.finish(window.owner);
                            reason = MoveReason::WinByAlignment;
                        }
                    }
                }
            }
        }

        if !self.game_over {
            self.current_player = mover.opponent();
        }

        Ok(MoveOutcome {
            game_over: self.game_over,
            winner: self.winner,
            reason,
        })
    }

    /// Read one cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<Stone, OutOfBoundsError> {
        self.board.get(row, col)
    }

    /// Player to move next. Never `Empty`.
    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Opponent stones `color` has captured so far.
    #[inline]
    #[must_use]
    pub fn captures(&self, color: Stone) -> u32 {
        match color {
            Stone::Black => self.black_captured,
            Stone::White => self.white_captured,
            Stone::Empty => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Winner, once the game is over.
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    /// Cells the current player is restricted to, when non-empty.
    #[must_use]
    pub fn forced_moves(&self) -> &[Pos] {
        &self.forced_moves
    }

    /// The open endgame window, if a contested five is waiting on a reply.
    #[must_use]
    pub fn special(&self) -> Option<&SpecialWindow> {
        self.special.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn add_captures(&mut self, color: Stone, count: u32) {
        match color {
            Stone::Black => self.black_captured += count,
            Stone::White => self.white_captured += count,
            Stone::Empty => {}
        }
    }

    fn finish(&mut self, winner: Stone) {
        self.game_over = true;
        self.winner = Some(winner);
        self.special = None;
    }
}

#[cfg(test)]
impl GameState {
    /// Place a stone directly, bypassing the pipeline. Test setup only.
    pub(crate) fn place_direct(&mut self, row: u8, col: u8, stone: Stone) {
        self.board.place_stone(Pos::new(row, col), stone);
    }

    pub(crate) fn set_current_player(&mut self, stone: Stone) {
        self.current_player = stone;
    }

    pub(crate) fn set_captures(&mut self, color: Stone, count: u32) {
        match color {
            Stone::Black => self.black_captured = count,
            Stone::White => self.white_captured = count,
            Stone::Empty => {}
        }
    }
}
