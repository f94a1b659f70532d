//! Minimax search for the computer opponent.
//!
//! O is the maximizing side. The search is a plain exhaustive minimax;
//! the tree is at most 9 plies deep, so there is nothing to prune. Each
//! recursion works on a copy of the board, so the caller's board is never
//! touched.

use crate::position::Position;
use crate::rules::{WIN_SCORE, evaluate};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Scores a position by exhaustive lookahead.
///
/// Terminal positions are scored first: a completed O line is worth
/// `WIN_SCORE - depth` and a completed X line `-WIN_SCORE + depth`, so
/// among won lines the quicker win ranks higher and among lost lines the
/// slower loss ranks less negative. A full board with no line is 0.
///
/// A node at `depth >= depth_cap` that is not terminal is treated as a
/// neutral leaf and scored 0. This is the difficulty throttle: low caps
/// give the opponent deliberate near-sightedness. The terminal check runs
/// before the cap check, so immediate wins are seen at any cap.
pub fn minimax(board: &Board, depth: u8, depth_cap: u8, maximizing: bool) -> i32 {
    let score = evaluate(board);
    if score == WIN_SCORE {
        return WIN_SCORE - i32::from(depth);
    }
    if score == -WIN_SCORE {
        return -WIN_SCORE + i32::from(depth);
    }
    if board.is_full() {
        return 0;
    }

    if depth >= depth_cap {
        return 0;
    }

    let mark = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let child = board.place(pos, mark);
        let value = minimax(&child, depth + 1, depth_cap, !maximizing);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Picks the best move for O on the given board.
///
/// Every empty square is tried in row-major order and scored with
/// [`minimax`]; the first square with the strictly highest score wins, so
/// ties resolve deterministically toward the top-left.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board))]
pub fn best_move(board: &Board, depth_cap: u8) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let child = board.place(pos, Player::O);
        let score = minimax(&child, 0, depth_cap, false);
        debug!(position = %pos, score, "candidate scored");
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "search complete");
    }
    best.map(|(pos, _)| pos)
}
