//! Fixed-depth alpha-beta search over the move pipeline
//!
//! Minimax with alpha-beta pruning. Every node clones the game state and
//! applies a candidate through `process_move`, so forced replies, capture
//! bookkeeping, and the special windows flow through the search exactly as
//! they do in play; rejected moves are skipped, never scored.
//!
//! # Example
//!
//! ```
//! use ninuki::{new_game, BoardSize, Stone};
//! use ninuki::search::find_best_move;
//!
//! let game = new_game(BoardSize::Nineteen);
//! let best = find_best_move(&game, 1, Stone::Black);
//! assert!(best.is_some());
//! ```

use std::thread;
use std::time::Instant;

use rand::Rng;

use crate::board::{Pos, Stone};
use crate::eval::evaluate;
use crate::game::GameState;

/// Base score for a decided game; terminal nodes add the remaining depth so
/// the search prefers the faster win and the later loss.
pub const WIN_SCORE: i32 = 1_000_000;

/// Alpha-beta bounds (scores stay far below this).
const INF: i32 = i32::MAX;

/// Result of a root search with accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Best move found, if any legal move exists
    pub best: Option<Pos>,
    /// Score of the best move from the searched color's perspective
    pub score: i32,
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Wall-clock time spent
    pub elapsed_ms: u64,
}

/// Find the best move for `color`, searching `depth` plies.
///
/// Returns `None` when the game is over or no legal move exists. Ties at
/// the root are broken uniformly at random.
#[must_use]
pub fn find_best_move(state: &GameState, depth: u32, color: Stone) -> Option<Pos> {
    find_best_move_with_stats(state, depth, color).best
}

/// Like [`find_best_move`], with node and timing accounting.
#[must_use]
pub fn find_best_move_with_stats(state: &GameState, depth: u32, color: Stone) -> SearchReport {
    let start = Instant::now();
    let mut nodes = 0u64;

    let mut report = SearchReport {
        best: None,
        score: 0,
        nodes: 0,
        elapsed_ms: 0,
    };

    if !state.is_game_over() {
        let candidates = candidate_moves(state);
        let scored = score_moves(state, &candidates, depth, color, &mut nodes);
        if let Some((best, score)) = pick_best(&scored) {
            report.best = Some(best);
            report.score = score;
        }
    }

    report.nodes = nodes;
    report.elapsed_ms = start.elapsed().as_millis() as u64;
    report
}

/// Root search split across `workers` threads.
///
/// The candidate list is cut into contiguous chunks, one spawned thread per
/// chunk; each worker owns private clones of the state and scores its chunk
/// exactly like the sequential root loop. Scores are merged and the tie
/// break is the same as [`find_best_move`].
#[must_use]
pub fn find_best_move_parallel(
    state: &GameState,
    depth: u32,
    color: Stone,
    workers: usize,
) -> Option<Pos> {
    if state.is_game_over() {
        return None;
    }
    let candidates = candidate_moves(state);
    if candidates.is_empty() {
        return None;
    }

    let workers = workers.clamp(1, candidates.len());
    let chunk_len = candidates.len().div_ceil(workers);

    let mut handles = Vec::with_capacity(workers);
    for chunk in candidates.chunks(chunk_len) {
        let chunk = chunk.to_vec();
        let state = state.clone();
        handles.push(thread::spawn(move || {
            let mut nodes = 0u64;
            score_moves(&state, &chunk, depth, color, &mut nodes)
        }));
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for handle in handles {
        match handle.join() {
            Ok(part) => scored.extend(part),
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }

    pick_best(&scored).map(|(best, _)| best)
}

/// Score each candidate with a full-width search one ply down.
///
/// Root children keep the full alpha-beta window so equal-best moves stay
/// exactly equal for the tie break.
fn score_moves(
    state: &GameState,
    candidates: &[Pos],
    depth: u32,
    color: Stone,
    nodes: &mut u64,
) -> Vec<(Pos, i32)> {
    let mut scored = Vec::with_capacity(candidates.len());

    for &pos in candidates {
        let mut child = state.clone();
        if child
            .process_move(usize::from(pos.row), usize::from(pos.col))
            .is_err()
        {
            continue;
        }
        let score = alpha_beta(&child, depth.saturating_sub(1), -INF, INF, color, nodes);
        scored.push((pos, score));
    }

    scored
}

fn alpha_beta(
    state: &GameState,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    color: Stone,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if state.is_game_over() {
        return match state.winner() {
            Some(winner) if winner == color => WIN_SCORE + depth as i32,
            Some(_) => -(WIN_SCORE + depth as i32),
            None => 0,
        };
    }
    if depth == 0 {
        return evaluate(state, color);
    }

    let candidates = candidate_moves(state);
    if candidates.is_empty() {
        // Full board with no decision: static score.
        return evaluate(state, color);
    }

    // Derive the side to move from the state rather than depth parity.
    let maximizing = state.current_player() == color;
    let mut best = if maximizing { -INF } else { INF };

    for pos in candidates {
        let mut child = state.clone();
        if child
            .process_move(usize::from(pos.row), usize::from(pos.col))
            .is_err()
        {
            continue;
        }
        let score = alpha_beta(&child, depth - 1, alpha, beta, color, nodes);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    if best == -INF || best == INF {
        // Every candidate was rejected (all double-threes).
        return evaluate(state, color);
    }
    best
}

/// Candidate cells for the side to move.
///
/// Forced moves are the whole candidate set when present. Otherwise empty
/// cells within one step of any stone; on an empty board, every cell.
fn candidate_moves(state: &GameState) -> Vec<Pos> {
    if !state.forced_moves().is_empty() {
        return state.forced_moves().to_vec();
    }

    let board = state.board();
    let side = board.side();

    if board.is_board_empty() {
        let mut all = Vec::with_capacity(side * side);
        for row in 0..side as u8 {
            for col in 0..side as u8 {
                all.push(Pos::new(row, col));
            }
        }
        return all;
    }

    let mut candidates = Vec::new();
    for row in 0..side as i32 {
        for col in 0..side as i32 {
            let pos = Pos::new(row as u8, col as u8);
            if !board.is_empty(pos) {
                continue;
            }
            let near_stone = (-1..=1).any(|dr| {
                (-1..=1).any(|dc| {
                    (dr != 0 || dc != 0)
                        && board.in_bounds(row + dr, col + dc)
                        && !board.is_empty(Pos::new((row + dr) as u8, (col + dc) as u8))
                })
            });
            if near_stone {
                candidates.push(pos);
            }
        }
    }
    candidates
}

/// Highest score wins; equal scores are split uniformly at random.
fn pick_best(scored: &[(Pos, i32)]) -> Option<(Pos, i32)> {
    let top = scored.iter().map(|&(_, score)| score).max()?;
    let ties: Vec<Pos> = scored
        .iter()
        .filter(|&&(_, score)| score == top)
        .map(|&(pos, _)| pos)
        .collect();

    let mut rng = rand::rng();
    let pick = ties[rng.random_range(0..ties.len())];
    Some((pick, top))
}
