//! The packed move representation and the undo record.

use crate::board::{Piece, PieceKind};
use crate::square::Square;
use arrayvec::ArrayVec;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Upper bound on legal moves in any reachable position.
pub const MAX_MOVES: usize = 256;

/// Fixed-capacity move list sized for the worst case.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A move packed into 16 bits, low to high: to (6), from (6),
/// promotion kind (2), flags (2).
///
/// For a castle the `to` field holds the *rook's home square* (a1/h1/a8/h8),
/// not the king's destination; both destinations derive from a fixed
/// mapping via [`Move::castle_squares`]. Storing the rook square lets
/// make/undo reuse one square-masking path for the king and rook halves of
/// the move, and lets rook captures and castle endings share the rights
/// bookkeeping.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

/// The all-zero move doubles as "no move" (a1-to-a1 is never generated).
pub const MOVE_NONE: Move = Move(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum MoveFlags {
    None = 0,
    EnPassant = 1,
    Promotion = 2,
    Castle = 3,
}

impl Move {
    /// An ordinary move or capture.
    #[inline(always)]
    pub fn new(from: Square, to: Square) -> Move {
        debug_assert!(from.is_some() && to.is_some());
        Move((to.index() as u16) | ((from.index() as u16) << 6))
    }

    /// An en-passant capture onto the target square.
    #[inline(always)]
    pub fn enpassant(from: Square, to: Square) -> Move {
        debug_assert!(
            (from.rank() == 4 && to.rank() == 5) || (from.rank() == 3 && to.rank() == 2),
            "en passant is a rank-5 to rank-6 or rank-4 to rank-3 capture"
        );
        debug_assert!(from.file().abs_diff(to.file()) == 1);
        Move((to.index() as u16) | ((from.index() as u16) << 6) | ((MoveFlags::EnPassant as u16) << 14))
    }

    /// A promotion, optionally capturing, to knight/bishop/rook/queen.
    #[inline(always)]
    pub fn promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        debug_assert!(from.rank() == 6 || from.rank() == 1);
        debug_assert!(to.rank() == 7 || to.rank() == 0);
        debug_assert!((kind as u8) <= PieceKind::Queen as u8);
        Move(
            (to.index() as u16)
                | ((from.index() as u16) << 6)
                | ((kind as u16) << 12)
                | ((MoveFlags::Promotion as u16) << 14),
        )
    }

    /// A castle: `from` is the king's square, `to` the rook's home square.
    #[inline(always)]
    pub fn castle(from: Square, to: Square) -> Move {
        debug_assert!(
            (from == Square::E1 && (to == Square::H1 || to == Square::A1))
                || (from == Square::E8 && (to == Square::H8 || to == Square::A8))
        );
        Move((to.index() as u16) | ((from.index() as u16) << 6) | ((MoveFlags::Castle as u16) << 14))
    }

    #[inline(always)]
    pub fn to(self) -> Square {
        Square::from_index((self.0 & 0x3f) as u8)
    }

    #[inline(always)]
    pub fn from(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3f) as u8)
    }

    #[inline(always)]
    pub fn promotion_kind(self) -> PieceKind {
        debug_assert!(self.is_promotion());
        PieceKind::from_u8(((self.0 >> 12) & 0x3) as u8)
    }

    #[inline(always)]
    pub fn flags(self) -> MoveFlags {
        match self.0 >> 14 {
            0 => MoveFlags::None,
            1 => MoveFlags::EnPassant,
            2 => MoveFlags::Promotion,
            _ => MoveFlags::Castle,
        }
    }

    #[inline(always)]
    pub fn is_enpassant(self) -> bool {
        self.flags() == MoveFlags::EnPassant
    }

    #[inline(always)]
    pub fn is_promotion(self) -> bool {
        self.flags() == MoveFlags::Promotion
    }

    #[inline(always)]
    pub fn is_castle(self) -> bool {
        self.flags() == MoveFlags::Castle
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// King and rook destinations for a castle, keyed on the rook home
    /// square stored in the `to` field.
    #[inline(always)]
    pub fn castle_squares(self) -> (Square, Square) {
        debug_assert!(self.is_castle());
        match self.to() {
            Square::H1 => (Square::G1, Square::F1),
            Square::A1 => (Square::C1, Square::D1),
            Square::H8 => (Square::G8, Square::F8),
            _ => (Square::C8, Square::D8),
        }
    }
}

impl fmt::Display for Move {
    /// Long algebraic: from, to, optional promotion letter. Castles print
    /// as the king's two-file move (e1g1, e1c1, e8g8, e8c8).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle() {
            let (king_to, _) = self.castle_squares();
            return write!(f, "{}{}", self.from(), king_to);
        }
        write!(f, "{}{}", self.from(), self.to())?;
        if self.is_promotion() {
            let letter = match self.promotion_kind() {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                _ => 'q',
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}, {:?})", self.flags())
    }
}

/// Everything `undo_move` needs that the move itself does not encode.
///
/// For a castle, `captured` holds the side's own rook (the piece found on
/// the `to` square) so the castle and capture undo paths stay symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Savepos {
    pub(crate) halfmoves: u16,
    pub(crate) ep_target: Square,
    pub(crate) castle_rights: u8,
    pub(crate) captured: Piece,
}

/// Sink for generated moves; lets callers collect into either the
/// fixed-capacity [`MoveList`] or a plain `Vec`.
pub trait MoveBuffer: Deref<Target = [Move]> + DerefMut {
    fn push(&mut self, mv: Move);
    fn clear(&mut self);
}

impl MoveBuffer for Vec<Move> {
    fn push(&mut self, mv: Move) {
        Vec::push(self, mv);
    }
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<const N: usize> MoveBuffer for ArrayVec<Move, N> {
    fn push(&mut self, mv: Move) {
        ArrayVec::push(self, mv);
    }
    fn clear(&mut self) {
        ArrayVec::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_move_fields() {
        let mv = Move::new(Square::parse("e2").unwrap(), Square::parse("e4").unwrap());
        assert_eq!(mv.from().to_string(), "e2");
        assert_eq!(mv.to().to_string(), "e4");
        assert_eq!(mv.flags(), MoveFlags::None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn promotion_carries_kind() {
        let from = Square::parse("b7").unwrap();
        let to = Square::parse("b8").unwrap();
        for (kind, letter) in [
            (PieceKind::Knight, 'n'),
            (PieceKind::Bishop, 'b'),
            (PieceKind::Rook, 'r'),
            (PieceKind::Queen, 'q'),
        ] {
            let mv = Move::promotion(from, to, kind);
            assert!(mv.is_promotion());
            assert_eq!(mv.promotion_kind(), kind);
            assert_eq!(mv.to_string(), format!("b7b8{letter}"));
        }
    }

    #[test]
    fn castle_stores_rook_square_but_prints_king_move() {
        let short = Move::castle(Square::E1, Square::H1);
        assert_eq!(short.to(), Square::H1);
        assert_eq!(short.castle_squares(), (Square::G1, Square::F1));
        assert_eq!(short.to_string(), "e1g1");

        let long = Move::castle(Square::E8, Square::A8);
        assert_eq!(long.castle_squares(), (Square::C8, Square::D8));
        assert_eq!(long.to_string(), "e8c8");
    }

    #[test]
    fn enpassant_flagged() {
        let mv = Move::enpassant(Square::parse("e5").unwrap(), Square::parse("d6").unwrap());
        assert!(mv.is_enpassant());
        assert!(!mv.is_promotion());
        assert_eq!(mv.to_string(), "e5d6");
    }

    #[test]
    fn move_none_is_all_zero() {
        assert!(MOVE_NONE.is_none());
        assert_eq!(MOVE_NONE, Move(0));
        assert!(!Move::new(Square::E1, Square::G1).is_none());
    }
}
