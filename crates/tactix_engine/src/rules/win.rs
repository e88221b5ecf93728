//! Win detection.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// True iff `player` occupies all three cells of any line.
///
/// The check is per-marker and makes no assumption about how the board
/// was reached; on a contrived board both players can satisfy it.
#[instrument(level = "trace")]
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Occupied(player))))
}

/// Returns the winning player, if any.
///
/// X is checked before O; under alternating legal play at most one
/// player can have a completed line.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O].into_iter().find(|&p| has_won(board, p))
}
