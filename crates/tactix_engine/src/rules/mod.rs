//! Terminal-state detection.
//!
//! Pure functions over a board value. Win checks always run before draw
//! checks: the move that fills the board can also be the winning one.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, has_won};
