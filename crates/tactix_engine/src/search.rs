//! Exhaustive minimax over the full game tree.
//!
//! The tree below any legal position holds at most 9! leaf paths, so
//! the search visits every branch with no pruning and no memoization.
//! Terminal scores are depth-weighted: `10 - depth` for a win and
//! `depth - 10` for a loss, so among winning lines the maximizer takes
//! the fastest one, and when every line loses it holds out longest.

use crate::rules::has_won;
use crate::types::{Board, Player};
use tracing::instrument;

/// Scores a hypothetical position from `ai`'s point of view.
///
/// `depth` counts the plies already played below the evaluation root;
/// `maximizing` says whose turn the position is. Wins for `ai` score
/// `10 - depth`, wins for `opponent` score `depth - 10`, and a full
/// board with no winner scores `0`. Win checks run before the draw
/// check because the filling move can also be the winning one.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, ai: Player, opponent: Player) -> i32 {
    if has_won(board, ai) {
        return 10 - depth;
    }
    if has_won(board, opponent) {
        return depth - 10;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { ai } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        let child = board
            .place(index, mover)
            .expect("available_moves should yield empty cells");
        let score = minimax(&child, depth + 1, !maximizing, ai, opponent);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Returns the strongest move for `ai`, or `None` on a board with no
/// empty cell.
///
/// Candidates are tried in ascending index order and only a strictly
/// better score displaces the current choice, so ties resolve to the
/// lowest index and repeated runs pick the same move. Each candidate is
/// the root of its branch: scoring starts from the opponent's reply at
/// depth zero.
#[instrument(level = "debug", skip(board))]
pub fn best_move(board: &Board, ai: Player) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for index in board.available_moves() {
        let child = board
            .place(index, ai)
            .expect("available_moves should yield empty cells");
        let score = minimax(&child, 0, false, ai, ai.opponent());
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index)
}
