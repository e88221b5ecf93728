//! Caller-facing game session.
//!
//! The session owns the live board, validates placements, runs the
//! terminal check after each accepted move, and alternates the mover.
//! A finished session is discarded wholesale on restart; nothing
//! survives across games.

use crate::rules;
use crate::types::{Board, BoardError, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// The given player completed a line.
    Won(Player),
    /// The board filled with no winner.
    Draw,
}

impl Status {
    /// True once a win or draw has occurred.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// Errors from driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The board rejected the placement.
    #[display("{}", _0)]
    Board(BoardError),

    /// The game has already finished.
    #[display("the game is already over")]
    GameOver,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            GameError::GameOver => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

/// A live game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: Status,
    history: Vec<usize>,
}

impl Game {
    /// Starts a fresh game with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Meaningless once the game is over; the value freezes on the
    /// player who made the final move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the session status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// True once a win or draw has occurred.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Applies `index` for the current mover.
    ///
    /// On success the terminal check runs, win before draw, and the
    /// turn passes to the opponent only while the game continues.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] once the session is finished and
    /// [`GameError::Board`] for an out-of-range or occupied index; the
    /// session is unchanged in either case.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Status, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        self.board = self.board.place(index, self.to_move)?;
        self.history.push(index);

        if rules::has_won(&self.board, self.to_move) {
            self.status = Status::Won(self.to_move);
        } else if self.board.is_full() {
            self.status = Status::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
