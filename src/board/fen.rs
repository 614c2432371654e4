//! FEN construction and printing. Parsing never leaves a half-built
//! position visible: errors discard the scratch value.

use super::fen_tables::{piece_from_char, piece_to_char};
use super::{CASTLE_BK, CASTLE_BQ, CASTLE_NONE, CASTLE_WK, CASTLE_WQ};
use super::{Color, Piece, PieceKind, Position};
use crate::error::FenError;
use crate::square::Square;

impl Position {
    /// Builds a position from a FEN string: placement, side to move,
    /// castling rights, en-passant target, then an optional half-move
    /// clock (default 0) and full-move number (default 1).
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut pos = Position::new_empty();
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or(FenError::UnexpectedEnd)?;
        parse_placement(&mut pos, placement)?;
        if pos.kings[0].is_none() || pos.kings[1].is_none() {
            return Err(FenError::BadKingCount);
        }

        pos.stm = match fields.next().ok_or(FenError::UnexpectedEnd)? {
            "w" | "W" => Color::White,
            "b" | "B" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        };

        let castling = fields.next().ok_or(FenError::UnexpectedEnd)?;
        pos.castle_rights = parse_castling(&pos, castling)?;

        let ep = fields.next().ok_or(FenError::UnexpectedEnd)?;
        pos.ep_target = parse_ep_target(ep)?;

        pos.halfmoves = match fields.next() {
            None => 0,
            Some(s) => s
                .parse()
                .map_err(|_| FenError::InvalidClock(s.to_string()))?,
        };
        pos.fullmoves = match fields.next() {
            None => 1,
            Some(s) => s
                .parse()
                .map_err(|_| FenError::InvalidClock(s.to_string()))?,
        };

        pos.hash = pos.compute_zobrist_full();
        pos.debug_validate();
        Ok(pos)
    }

    /// Canonical six-field FEN.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(80);

        for rank in (0..8u8).rev() {
            let mut empties = 0;
            for file in 0..8u8 {
                let pc = self.piece_at(Square::new(file, rank));
                if pc.is_empty() {
                    empties += 1;
                    continue;
                }
                if empties > 0 {
                    out.push((b'0' + empties) as char);
                    empties = 0;
                }
                out.push(piece_to_char(pc));
            }
            if empties > 0 {
                out.push((b'0' + empties) as char);
            }
            if rank != 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.white_to_move() { 'w' } else { 'b' });
        out.push(' ');

        if self.castle_rights == CASTLE_NONE {
            out.push('-');
        } else {
            for (bit, c) in [
                (CASTLE_WK, 'K'),
                (CASTLE_WQ, 'Q'),
                (CASTLE_BK, 'k'),
                (CASTLE_BQ, 'q'),
            ] {
                if self.castle_rights & bit != 0 {
                    out.push(c);
                }
            }
        }

        out.push(' ');
        out.push_str(&self.ep_target.to_string());
        out.push(' ');
        out.push_str(&self.halfmoves.to_string());
        out.push(' ');
        out.push_str(&self.fullmoves.to_string());
        out
    }

    /// A rank-by-rank board diagram with the FEN tail fields, for the
    /// driver's `d` command.
    pub fn dump_ascii(&self) -> String {
        let mut out = String::with_capacity(200);
        for rank in (0..8u8).rev() {
            out.push('|');
            for file in 0..8u8 {
                let pc = self.piece_at(Square::new(file, rank));
                out.push(if pc.is_empty() { ' ' } else { piece_to_char(pc) });
                out.push('|');
            }
            out.push('\n');
        }
        let fen = self.to_fen();
        let tail = fen.split_once(' ').map(|(_, t)| t).unwrap_or("");
        out.push_str(tail);
        out.push('\n');
        out
    }
}

fn parse_placement(pos: &mut Position, placement: &str) -> Result<(), FenError> {
    let mut ranks = placement.split('/');
    for rank in (0..8u8).rev() {
        let desc = ranks.next().ok_or(FenError::BadRankCount)?;
        let mut file = 0u8;
        for c in desc.chars() {
            if let Some(skip) = c.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(FenError::InvalidPiece(c));
                }
                file += skip as u8;
            } else {
                let pc = piece_from_char(c).ok_or(FenError::InvalidPiece(c))?;
                if file > 7 {
                    return Err(FenError::BadRankWidth(rank + 1));
                }
                if pc.kind() == PieceKind::Pawn && (rank == 0 || rank == 7) {
                    return Err(FenError::InvalidPiece(c));
                }
                place(pos, pc, Square::new(file, rank))?;
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::BadRankWidth(rank + 1));
        }
    }
    if ranks.next().is_some() {
        return Err(FenError::BadRankCount);
    }
    Ok(())
}

fn place(pos: &mut Position, pc: Piece, sq: Square) -> Result<(), FenError> {
    let color = pc.color();
    if pc.kind() == PieceKind::King {
        if pos.kings[color.idx()].is_some() {
            return Err(FenError::BadKingCount);
        }
        pos.kings[color.idx()] = sq;
    } else {
        pos.boards[pc.board_index()] |= sq.mask();
    }
    pos.sides[color.idx()] |= sq.mask();
    pos.sq2pc[sq.index() as usize] = pc;
    Ok(())
}

fn parse_castling(pos: &Position, field: &str) -> Result<u8, FenError> {
    if field == "-" {
        return Ok(CASTLE_NONE);
    }
    let mut rights = CASTLE_NONE;
    for c in field.chars() {
        rights |= match c {
            'K' => CASTLE_WK,
            'Q' => CASTLE_WQ,
            'k' => CASTLE_BK,
            'q' => CASTLE_BQ,
            _ => return Err(FenError::InvalidCastling(c)),
        };
    }
    // Normalize away rights whose king or rook is not on its home square,
    // so the rights invariant holds from the first move on.
    if pos.piece_at(Square::E1) != Piece::WHITE_KING {
        rights &= !(CASTLE_WK | CASTLE_WQ);
    }
    if pos.piece_at(Square::H1) != Piece::WHITE_ROOK {
        rights &= !CASTLE_WK;
    }
    if pos.piece_at(Square::A1) != Piece::WHITE_ROOK {
        rights &= !CASTLE_WQ;
    }
    if pos.piece_at(Square::E8) != Piece::BLACK_KING {
        rights &= !(CASTLE_BK | CASTLE_BQ);
    }
    if pos.piece_at(Square::H8) != Piece::BLACK_ROOK {
        rights &= !CASTLE_BK;
    }
    if pos.piece_at(Square::A8) != Piece::BLACK_ROOK {
        rights &= !CASTLE_BQ;
    }
    Ok(rights)
}

fn parse_ep_target(field: &str) -> Result<Square, FenError> {
    if field == "-" {
        return Ok(Square::NONE);
    }
    let sq = Square::parse(field).ok_or_else(|| FenError::InvalidEnPassant(field.to_string()))?;
    if sq.rank() != 2 && sq.rank() != 5 {
        return Err(FenError::InvalidEnPassant(field.to_string()));
    }
    Ok(sq)
}
