//! Rule evaluator: line detection, scoring, and the checked move wrapper.

use crate::position::Position;
use crate::types::{Board, GameStatus, Player, Square};
use derive_more::{Display, Error};
use tracing::instrument;

/// Magnitude of a completed line at the board-evaluation level.
///
/// The search shades this by ply depth so quicker wins outrank slower
/// ones.
pub const WIN_SCORE: i32 = 10;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Indexes are row-major board positions.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Returns the player holding a completed line, if any.
///
/// Lines are mutually exclusive on a legal board, so scan order does not
/// affect the result.
pub fn winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for line in &LINES {
        if let Square::Occupied(p) = squares[line[0]] {
            if squares[line[1]] == Square::Occupied(p) && squares[line[2]] == Square::Occupied(p) {
                return Some(p);
            }
        }
    }
    None
}

/// Scores the board from the computer's point of view.
///
/// `+WIN_SCORE` when O has completed any line, `-WIN_SCORE` when X has,
/// `0` otherwise.
pub fn evaluate(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::O) => WIN_SCORE,
        Some(Player::X) => -WIN_SCORE,
        None => 0,
    }
}

/// Checks whether either player has completed a line.
pub fn check_win(board: &Board) -> bool {
    evaluate(board) != 0
}

/// Checks for a draw: a full board with no completed line.
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && !check_win(board)
}

/// Derives the game status from the board.
pub fn status(board: &Board) -> GameStatus {
    if let Some(p) = winner(board) {
        GameStatus::Won(p)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// A rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("coordinates are outside the board")]
    OutOfBounds,
    /// The target square already holds a mark.
    #[display("the square is already occupied")]
    Occupied,
    /// The game has already been won or drawn.
    #[display("the game is already over")]
    Finished,
}

/// Tic-tac-toe game engine: a board plus the side to move.
///
/// Validates moves and alternates turns; the status is recomputed from
/// the board on demand rather than cached.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Derives the current game status from the board.
    pub fn status(&self) -> GameStatus {
        status(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Makes a move for the side to move at the given position.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::Finished);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied);
        }

        self.board = self.board.place(pos, self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Makes a move given zero-based (row, col) coordinates.
    ///
    /// Out-of-range coordinates are rejected as [`MoveError::OutOfBounds`].
    #[instrument(skip(self))]
    pub fn make_move_at(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds)?;
        self.make_move(pos)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
