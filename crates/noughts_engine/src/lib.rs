//! Noughts engine - pure tic-tac-toe game logic
//!
//! This crate holds everything about the game that has nothing to do with
//! a terminal: the board, the rule evaluator, and the minimax search the
//! computer opponent uses to pick its moves.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], and the derived
//!   [`GameStatus`]
//! - **Rules**: line detection, scoring, and the [`Game`] move validator
//! - **Search**: exhaustive minimax with a depth cap supplied by
//!   [`Difficulty`]
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Board, Difficulty, best_move};
//!
//! let board = Board::new();
//! let reply = best_move(&board, Difficulty::Hard.depth_cap());
//! assert!(reply.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod difficulty;
mod position;
mod rules;
mod search;
mod types;

// Crate-level exports - difficulty mapping
pub use difficulty::Difficulty;

// Crate-level exports - board coordinates
pub use position::Position;

// Crate-level exports - rules and game wrapper
pub use rules::{Game, MoveError, WIN_SCORE, check_draw, check_win, evaluate, status, winner};

// Crate-level exports - minimax search
pub use search::{best_move, minimax};

// Crate-level exports - core types
pub use types::{Board, GameStatus, Player, Square};
