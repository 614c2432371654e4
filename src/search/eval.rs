//! Static evaluation: material plus mobility, as a signed score from
//! White's perspective. Pure and side-effect free; checkmate sentinels
//! live far outside its range.

use crate::board::{Color, PieceKind, Position};
use crate::moves::movegen::attacked_squares;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 295;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 800;

const MATERIAL: [(PieceKind, i32); 5] = [
    (PieceKind::Pawn, PAWN_VALUE),
    (PieceKind::Knight, KNIGHT_VALUE),
    (PieceKind::Bishop, BISHOP_VALUE),
    (PieceKind::Rook, ROOK_VALUE),
    (PieceKind::Queen, QUEEN_VALUE),
];

/// Material imbalance plus one point per attacked square.
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0;
    for (kind, value) in MATERIAL {
        let diff = pos.piece_count(Color::White, kind) as i32
            - pos.piece_count(Color::Black, kind) as i32;
        score += value * diff;
    }

    let white_mobility = attacked_squares(pos, Color::White).count_ones() as i32;
    let black_mobility = attacked_squares(pos, Color::Black).count_ones() as i32;
    score + (white_mobility - black_mobility)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_balanced() {
        assert_eq!(evaluate(&Position::startpos()), 0);
    }

    #[test]
    fn extra_queen_dominates() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let score = evaluate(&pos);
        assert!(score > QUEEN_VALUE / 2, "got {score}");
    }

    #[test]
    fn mirrored_position_negates() {
        let white_up = Position::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
        let black_up = Position::from_fen("2b1k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(evaluate(&white_up), -evaluate(&black_up));
    }

    #[test]
    fn evaluation_has_no_side_effects() {
        let pos = Position::startpos();
        let before = pos.clone();
        evaluate(&pos);
        assert_eq!(pos, before);
    }
}
