//! Terminal-state classification. The generator only reports a move
//! count; this is the caller-side reading of it.

use crate::board::Position;
use crate::moves::movegen::{generate_legal, in_check};
use crate::moves::types::MoveList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
}

/// Status of the side to move. Mate and stalemate outrank the fifty-move
/// draw: a mating move on the hundredth half-move still ends the game.
pub fn position_status(pos: &Position) -> GameStatus {
    let mut moves = MoveList::new();
    if generate_legal(pos, &mut moves) == 0 {
        return if in_check(pos, pos.side_to_move()) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }
    if pos.halfmove_clock() >= 100 {
        return GameStatus::DrawFiftyMove;
    }
    GameStatus::InPlay
}
