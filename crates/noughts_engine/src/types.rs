//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X, the human. Moves first.
    X,
    /// Player O, the computer opponent.
    O,
}

impl Player {
    /// Returns the opponent player.
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

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: the search works on cheap copies instead of
/// mutating and undoing a shared grid, so a caller's board is always
/// bit-for-bit unchanged after a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns true when a zero-based (row, col) names an empty in-range
    /// square.
    ///
    /// Out-of-range coordinates are an ordinary `false`, not a panic;
    /// callers loop back for new input on an invalid move.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        match Position::from_row_col(row, col) {
            Some(pos) => self.is_empty(pos),
            None => false,
        }
    }

    /// Returns the board with the player's mark placed at the position.
    ///
    /// Precondition: the square is empty. The engine does not re-validate;
    /// use [`Game::make_move`](crate::Game::make_move) for checked moves.
    #[must_use]
    pub fn place(mut self, pos: Position, player: Player) -> Self {
        debug_assert!(self.is_empty(pos));
        self.squares[pos.index()] = Square::Occupied(player);
        self
    }

    /// Checks if no empty square remains.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Number of occupied squares, which equals the number of moves played.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|&&s| s != Square::Empty).count()
    }

    /// Returns all squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
///
/// Always derived from the board by [`status`](crate::status), never
/// stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}
