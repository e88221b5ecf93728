//! Core domain types: players, cells, and the board value.

use serde::{Deserialize, Serialize};

/// Player marker in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's marker.
    Occupied(Player),
}

/// Errors from board-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index lies outside the 3x3 grid.
    #[display("index {} is outside the board (expected 0-8)", _0)]
    InvalidIndex(usize),

    /// The cell already holds a marker.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for BoardError {}

/// 3x3 board in row-major order (indices 0-8).
///
/// The board is a passive value: it validates placements but knows
/// nothing about turn order. Hypothetical positions during search are
/// plain copies, so sibling branches never share a mutable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True iff `index` is on the board and the cell holds no marker.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `player`'s marker at `index`.
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidIndex`] for an index outside 0-8 and
    /// [`BoardError::Occupied`] when the cell already holds a marker.
    pub fn place(&self, index: usize, player: Player) -> Result<Board, BoardError> {
        match self.get(index) {
            None => Err(BoardError::InvalidIndex(index)),
            Some(Cell::Occupied(_)) => Err(BoardError::Occupied(index)),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = Cell::Occupied(player);
                Ok(next)
            }
        }
    }

    /// Indices of all empty cells, in ascending order.
    ///
    /// The ordering is load-bearing: search and move selection iterate
    /// this list directly, so ties between equally scored moves resolve
    /// to the lowest index.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..Self::SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// True iff every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with 1-based hints in empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                let index = row * 3 + col;
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[index] {
                    Cell::Empty => write!(f, " {} ", index + 1)?,
                    Cell::Occupied(player) => write!(f, " {player} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..9).all(|i| board.is_empty(i)));
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_is_pure() {
        let board = Board::new();
        let next = board.place(4, Player::X).expect("empty cell");

        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Some(Cell::Occupied(Player::X)));
        // Only the target cell changed.
        for i in (0..9).filter(|&i| i != 4) {
            assert_eq!(board.get(i), next.get(i));
        }
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            board.place(9, Player::X),
            Err(BoardError::InvalidIndex(9))
        );
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let board = Board::new().place(0, Player::X).expect("empty cell");
        assert_eq!(board.place(0, Player::O), Err(BoardError::Occupied(0)));
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = Board::new()
            .place(5, Player::X)
            .and_then(|b| b.place(1, Player::O))
            .expect("empty cells");
        assert_eq!(board.available_moves(), vec![0, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_display_shows_hints_and_markers() {
        let board = Board::new().place(0, Player::X).expect("empty cell");
        let text = board.to_string();
        assert!(text.contains(" X "));
        assert!(text.contains(" 5 "));
        assert!(!text.contains(" 1 "));
    }
}
