//! Long-algebraic move input for drivers: from-square, to-square, and an
//! optional promotion letter ("e2e4", "e7e8q"). Castling arrives as the
//! king's two-file move (e1g1) and en passant as the pawn's diagonal step
//! onto the empty target square; both are recognized against the position
//! and translated into their flagged encodings.

use crate::board::{PieceKind, Position};
use crate::error::MoveParseError;
use crate::moves::movegen::generate_legal;
use crate::moves::types::{Move, MoveList};
use crate::square::Square;

impl Position {
    /// Parses a long-algebraic move string and checks it against the
    /// legal move list. The position is not mutated; an illegal or
    /// malformed string is rejected.
    pub fn move_from_lan(&self, s: &str) -> Result<Move, MoveParseError> {
        if s.len() != 4 && s.len() != 5 {
            return Err(MoveParseError::BadLength(s.len()));
        }
        let from = Square::parse(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;
        let to = Square::parse(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string()))?;
        let promotion = match s.as_bytes().get(4) {
            None => None,
            Some(b'n') => Some(PieceKind::Knight),
            Some(b'b') => Some(PieceKind::Bishop),
            Some(b'r') => Some(PieceKind::Rook),
            Some(b'q') => Some(PieceKind::Queen),
            Some(&c) => return Err(MoveParseError::InvalidPromotion(c as char)),
        };

        let candidate = self.translate(from, to, promotion);
        let mut legal = MoveList::new();
        generate_legal(self, &mut legal);
        match candidate {
            Some(mv) if legal.contains(&mv) => Ok(mv),
            _ => Err(MoveParseError::IllegalMove(s.to_string())),
        }
    }

    /// Builds the flagged move a driver string denotes, without judging
    /// legality. Returns `None` when the string cannot denote any move
    /// kind in this position.
    fn translate(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        let piece = self.piece_at(from);
        if piece.is_empty() {
            return None;
        }
        let kind = piece.kind();

        // a king's two-file move is castling; the flagged move stores the
        // rook's home square in its to-field
        if kind == PieceKind::King && from.file() == 4 && promotion.is_none() {
            match (from, to) {
                (Square::E1, Square::G1) => return Some(Move::castle(Square::E1, Square::H1)),
                (Square::E1, Square::C1) => return Some(Move::castle(Square::E1, Square::A1)),
                (Square::E8, Square::G8) => return Some(Move::castle(Square::E8, Square::H8)),
                (Square::E8, Square::C8) => return Some(Move::castle(Square::E8, Square::A8)),
                _ => {}
            }
        }

        // a pawn stepping diagonally onto the stored target is en passant
        if kind == PieceKind::Pawn
            && to == self.en_passant_target()
            && from.file().abs_diff(to.file()) == 1
            && (to.rank() as i8 - from.rank() as i8).abs() == 1
            && promotion.is_none()
        {
            return Some(Move::enpassant(from, to));
        }

        match promotion {
            Some(kind_to) => {
                if kind != PieceKind::Pawn || !(to.rank() == 7 || to.rank() == 0) {
                    return None;
                }
                Some(Move::promotion(from, to, kind_to))
            }
            None => {
                // a pawn reaching the last rank must name its promotion
                if kind == PieceKind::Pawn && (to.rank() == 7 || to.rank() == 0) {
                    return None;
                }
                Some(Move::new(from, to))
            }
        }
    }
}
