//! Difficulty-tiered move selection for the computer opponent.

use crate::search::best_move;
use crate::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How strongly the computer plays.
///
/// A pure configuration value consumed per call; the selector keeps no
/// state between calls.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random over the legal moves.
    Easy,
    /// A fresh coin flip each call: half the time Easy, half Hard.
    #[default]
    Medium,
    /// Full minimax search, deterministic.
    Hard,
}

/// Errors from move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectorError {
    /// The board has no empty cell to choose from.
    #[display("no legal moves remain on the board")]
    NoLegalMoves,
}

impl std::error::Error for SelectorError {}

/// Chooses a move for `ai` under the given difficulty tier.
///
/// The RNG is injected so callers can seed it for reproducible play.
///
/// # Errors
///
/// Returns [`SelectorError::NoLegalMoves`] when the board is full or
/// terminal; callers are expected to check the game state first.
#[instrument(level = "debug", skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, SelectorError> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(SelectorError::NoLegalMoves);
    }

    let index = match difficulty {
        Difficulty::Easy => random_move(&moves, rng),
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                random_move(&moves, rng)
            } else {
                best_move(board, ai).expect("board has legal moves")
            }
        }
        Difficulty::Hard => best_move(board, ai).expect("board has legal moves"),
    };

    Ok(index)
}

fn random_move<R: Rng>(moves: &[usize], rng: &mut R) -> usize {
    *moves.choose(rng).expect("candidate list is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let mut board = Board::new();
        for index in [0, 2, 4, 5, 7] {
            board = board.place(index, Player::X).expect("empty cell");
        }
        for index in [1, 3, 6, 8] {
            board = board.place(index, Player::O).expect("empty cell");
        }

        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(
            choose_move(&board, Player::X, Difficulty::Hard, &mut rng),
            Err(SelectorError::NoLegalMoves)
        );
    }

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert!("brutal".parse::<Difficulty>().is_err());
    }
}
