//! Tic-tac-toe decision core.
//!
//! The engine models the 3x3 board as a passive value, detects terminal
//! positions, and picks computer moves with an exhaustive minimax
//! search behind a difficulty-tiered selection policy. Presentation,
//! input handling, and the replay loop belong to the caller; see the
//! `tactix_tui` crate for the terminal front-end.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use tactix_engine::{Difficulty, Game, Player, Status, choose_move};
//!
//! let mut game = Game::new();
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! game.play(4)?; // human X takes the center
//! let reply = choose_move(game.board(), Player::O, Difficulty::Hard, &mut rng)?;
//! assert_eq!(game.play(reply)?, Status::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod game;
mod rules;
mod search;
mod types;

pub use ai::{Difficulty, SelectorError, choose_move};
pub use game::{Game, GameError, Status};
pub use rules::{check_winner, has_won, is_draw};
pub use search::{best_move, minimax};
pub use types::{Board, BoardError, Cell, Player};
