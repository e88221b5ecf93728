//! Draw detection.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// True iff the board is full and neither player has won.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
