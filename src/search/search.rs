//! Iterative-deepening alpha-beta over the from-White score convention:
//! White maximizes, Black minimizes, and every score (evaluation, mate,
//! draw) reads the same way at every node.

use crate::board::{Color, Position};
use crate::moves::execute::{make_move, undo_move};
use crate::moves::movegen::{generate_legal, in_check};
use crate::moves::types::{MOVE_NONE, Move, MoveList};
use crate::search::eval::evaluate;
use crate::search::tt::{Bound, TranspositionTable};
use tracing::debug;

// MAX_SCORE stays one below i32::MAX so every score has a safe negation.
pub const MAX_SCORE: i32 = i32::MAX - 1;
pub const CHECKMATE: i32 = MAX_SCORE - 1;
pub const WHITE_CHECKMATE: i32 = CHECKMATE;
pub const BLACK_CHECKMATE: i32 = -CHECKMATE;
pub const DRAW: i32 = 0;
pub const STALEMATE: i32 = DRAW;
pub const FIFTY_MOVE_RULE_DRAW: i32 = DRAW;

pub const DEFAULT_MAX_DEPTH: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `MOVE_NONE` on a terminal position.
    pub best_move: Move,
    /// Score from White's perspective.
    pub score: i32,
}

/// Score for the side to move having no legal moves.
fn terminal_score(pos: &Position) -> i32 {
    if in_check(pos, pos.side_to_move()) {
        match pos.side_to_move() {
            Color::White => BLACK_CHECKMATE,
            Color::Black => WHITE_CHECKMATE,
        }
    } else {
        STALEMATE
    }
}

fn alphabeta(
    pos: &mut Position,
    tt: &mut TranspositionTable,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let key = pos.zobrist();
    if let Some(entry) = tt.probe(key)
        && let Some(score) = entry.usable_score(depth, alpha, beta)
    {
        return score;
    }

    if depth == 0 {
        let score = evaluate(pos);
        tt.store(key, MOVE_NONE, score, 0, Bound::Exact);
        return score;
    }

    let mut moves = MoveList::new();
    if generate_legal(pos, &mut moves) == 0 {
        return terminal_score(pos);
    }
    if pos.halfmove_clock() >= 100 {
        return FIFTY_MOVE_RULE_DRAW;
    }

    let maximizing = pos.white_to_move();
    let mut best = if maximizing { -MAX_SCORE } else { MAX_SCORE };
    let mut best_move = MOVE_NONE;

    for &mv in moves.iter() {
        let sp = make_move(pos, mv);
        let score = alphabeta(pos, tt, depth - 1, alpha, beta);
        undo_move(pos, &sp, mv);

        if maximizing {
            if score > best {
                best = score;
                best_move = mv;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                // fail high: the true value is at least `best`
                tt.store(key, mv, best, depth, Bound::Lower);
                return best;
            }
        } else {
            if score < best {
                best = score;
                best_move = mv;
            }
            if best < beta {
                beta = best;
            }
            if beta <= alpha {
                // fail low: the true value is at most `best`
                tt.store(key, mv, best, depth, Bound::Upper);
                return best;
            }
        }
    }

    tt.store(key, best_move, best, depth, Bound::Exact);
    best
}

fn root_search(pos: &mut Position, tt: &mut TranspositionTable, depth: u8) -> SearchResult {
    let mut moves = MoveList::new();
    generate_legal(pos, &mut moves);
    debug_assert!(!moves.is_empty());

    let maximizing = pos.white_to_move();
    let mut best = SearchResult {
        best_move: MOVE_NONE,
        score: if maximizing { -MAX_SCORE } else { MAX_SCORE },
    };

    for &mv in moves.iter() {
        let sp = make_move(pos, mv);
        let score = alphabeta(pos, tt, depth - 1, -MAX_SCORE, MAX_SCORE);
        undo_move(pos, &sp, mv);

        // strict comparison: ties go to the first move found
        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better || best.best_move.is_none() {
            best = SearchResult {
                best_move: mv,
                score,
            };
        }
    }
    best
}

/// Finds the best move by iterative deepening from depth 2 up to
/// `max_depth` (default 5). The position is mutated during the search
/// and restored before returning; the table may be reused across calls
/// within one game.
pub fn search(
    pos: &mut Position,
    tt: &mut TranspositionTable,
    max_depth: Option<u8>,
) -> SearchResult {
    let max_depth = max_depth.unwrap_or(DEFAULT_MAX_DEPTH).max(2);

    let mut moves = MoveList::new();
    if generate_legal(pos, &mut moves) == 0 {
        return SearchResult {
            best_move: MOVE_NONE,
            score: terminal_score(pos),
        };
    }

    let mut result = SearchResult {
        best_move: MOVE_NONE,
        score: DRAW,
    };
    for depth in 2..=max_depth {
        result = root_search(pos, tt, depth);
        debug!(depth, score = result.score, best = %result.best_move, "iteration done");
        if result.score == WHITE_CHECKMATE || result.score == BLACK_CHECKMATE {
            break;
        }
    }
    result
}
