//! FEN glyph <-> piece lookup tables.

use super::{Color, Piece, PieceKind};

pub(super) const CHAR_TO_PIECE: [Option<Piece>; 128] = {
    let mut table: [Option<Piece>; 128] = [None; 128];

    // Uppercase = White
    table['N' as usize] = Some(Piece::new(Color::White, PieceKind::Knight));
    table['B' as usize] = Some(Piece::new(Color::White, PieceKind::Bishop));
    table['R' as usize] = Some(Piece::new(Color::White, PieceKind::Rook));
    table['Q' as usize] = Some(Piece::new(Color::White, PieceKind::Queen));
    table['P' as usize] = Some(Piece::new(Color::White, PieceKind::Pawn));
    table['K' as usize] = Some(Piece::new(Color::White, PieceKind::King));

    // Lowercase = Black
    table['n' as usize] = Some(Piece::new(Color::Black, PieceKind::Knight));
    table['b' as usize] = Some(Piece::new(Color::Black, PieceKind::Bishop));
    table['r' as usize] = Some(Piece::new(Color::Black, PieceKind::Rook));
    table['q' as usize] = Some(Piece::new(Color::Black, PieceKind::Queen));
    table['p' as usize] = Some(Piece::new(Color::Black, PieceKind::Pawn));
    table['k' as usize] = Some(Piece::new(Color::Black, PieceKind::King));

    table
};

/// Indexed by `Piece::key_index()`.
pub(super) const PIECE_TO_CHAR: [char; 12] =
    ['N', 'n', 'B', 'b', 'R', 'r', 'Q', 'q', 'P', 'p', 'K', 'k'];

pub(super) fn piece_from_char(c: char) -> Option<Piece> {
    if c.is_ascii() { CHAR_TO_PIECE[c as usize] } else { None }
}

pub(super) fn piece_to_char(pc: Piece) -> char {
    PIECE_TO_CHAR[pc.key_index()]
}
