//! Applying and reverting moves. These two functions are the only code
//! that mutates a [`Position`] after construction; every redundant
//! representation (piece boards, side boards, square map, king squares,
//! rights, en-passant target, clocks, hash) is kept consistent here and
//! nowhere else.

use crate::board::{Color, Piece, PieceKind, Position, rights_of, rook_home_right};
use crate::hash::zobrist::{xor_castling_delta, zobrist_keys};
use crate::moves::types::{Move, MoveFlags, Savepos};
use crate::square::Square;

#[inline(always)]
fn ep_capture_square(side: Color, to: Square) -> Square {
    // the captured pawn stands one rank behind the target square
    match side {
        Color::White => Square::from_index(to.index() - 8),
        Color::Black => Square::from_index(to.index() + 8),
    }
}

#[inline(always)]
fn is_double_push(side: Color, from: Square, to: Square) -> bool {
    match side {
        Color::White => from.rank() == 1 && to.rank() == 3,
        Color::Black => from.rank() == 6 && to.rank() == 4,
    }
}

/// Applies `mv` and returns the record `undo_move` needs to revert it.
/// `mv` must be legal for the current side to move.
pub fn make_move(pos: &mut Position, mv: Move) -> Savepos {
    pos.debug_validate();

    let side = pos.stm;
    let contra = side.opposite();
    let from = mv.from();
    let to = mv.to();
    let piece = pos.piece_at(from);
    let captured = pos.piece_at(to);
    let flags = mv.flags();
    let kind = piece.kind();
    let keys = zobrist_keys();

    debug_assert!(!piece.is_empty(), "no piece to move on {from}");
    debug_assert_eq!(piece.color(), side);
    debug_assert!(
        captured.is_empty() || captured.kind() != PieceKind::King,
        "a king can never be captured"
    );
    debug_assert!(
        captured.is_empty() || captured.color() == contra || mv.is_castle(),
        "only a castle touches an own piece on the to-square"
    );

    let sp = Savepos {
        halfmoves: pos.halfmoves,
        ep_target: pos.ep_target,
        castle_rights: pos.castle_rights,
        captured,
    };

    // side-to-move term: present while White is to move, so flipping the
    // mover always toggles it
    pos.hash ^= keys.side_to_move;
    if pos.ep_target.is_some() {
        pos.hash ^= keys.ep_file[pos.ep_target.file() as usize];
    }

    let old_rights = pos.castle_rights;
    let mut new_ep = Square::NONE;

    match flags {
        MoveFlags::None => {
            if kind == PieceKind::King {
                pos.kings[side.idx()] = to;
                pos.castle_rights &= !rights_of(side);
            } else {
                pos.boards[piece.board_index()] ^= from.mask() | to.mask();
            }
            pos.sq2pc[from.index() as usize] = Piece::EMPTY;
            pos.sq2pc[to.index() as usize] = piece;
            pos.sides[side.idx()] ^= from.mask() | to.mask();
            pos.hash ^= keys.piece[piece.key_index()][from.index() as usize];
            pos.hash ^= keys.piece[piece.key_index()][to.index() as usize];

            if !captured.is_empty() {
                pos.boards[captured.board_index()] &= !to.mask();
                pos.sides[contra.idx()] &= !to.mask();
                pos.castle_rights &= !rook_home_right(to);
                pos.hash ^= keys.piece[captured.key_index()][to.index() as usize];
            } else if kind == PieceKind::Pawn && is_double_push(side, from, to) {
                // the skipped square becomes the en-passant target
                new_ep = match side {
                    Color::White => Square::from_index(from.index() + 8),
                    Color::Black => Square::from_index(from.index() - 8),
                };
            }

            if kind == PieceKind::Rook {
                pos.castle_rights &= !rook_home_right(from);
            }
        }
        MoveFlags::EnPassant => {
            debug_assert_eq!(kind, PieceKind::Pawn);
            debug_assert!(captured.is_empty());
            let capsq = ep_capture_square(side, to);
            let victim = Piece::new(contra, PieceKind::Pawn);

            pos.boards[piece.board_index()] ^= from.mask() | to.mask();
            pos.boards[victim.board_index()] &= !capsq.mask();
            pos.sq2pc[from.index() as usize] = Piece::EMPTY;
            pos.sq2pc[to.index() as usize] = piece;
            pos.sq2pc[capsq.index() as usize] = Piece::EMPTY;
            pos.sides[side.idx()] ^= from.mask() | to.mask();
            pos.sides[contra.idx()] &= !capsq.mask();

            pos.hash ^= keys.piece[piece.key_index()][from.index() as usize];
            pos.hash ^= keys.piece[piece.key_index()][to.index() as usize];
            pos.hash ^= keys.piece[victim.key_index()][capsq.index() as usize];
        }
        MoveFlags::Promotion => {
            debug_assert_eq!(kind, PieceKind::Pawn);
            let promoted = Piece::new(side, mv.promotion_kind());

            pos.boards[piece.board_index()] &= !from.mask();
            pos.boards[promoted.board_index()] |= to.mask();
            pos.sq2pc[from.index() as usize] = Piece::EMPTY;
            pos.sq2pc[to.index() as usize] = promoted;
            pos.sides[side.idx()] ^= from.mask() | to.mask();

            pos.hash ^= keys.piece[piece.key_index()][from.index() as usize];
            pos.hash ^= keys.piece[promoted.key_index()][to.index() as usize];

            if !captured.is_empty() {
                pos.boards[captured.board_index()] &= !to.mask();
                pos.sides[contra.idx()] &= !to.mask();
                pos.castle_rights &= !rook_home_right(to);
                pos.hash ^= keys.piece[captured.key_index()][to.index() as usize];
            }
        }
        MoveFlags::Castle => {
            debug_assert_eq!(kind, PieceKind::King);
            debug_assert_eq!(captured, Piece::new(side, PieceKind::Rook));
            let rook = captured;
            let (king_to, rook_to) = mv.castle_squares();

            pos.kings[side.idx()] = king_to;
            // `to` is the rook's home square, so one mask pair moves it
            pos.boards[rook.board_index()] ^= to.mask() | rook_to.mask();
            pos.sq2pc[from.index() as usize] = Piece::EMPTY;
            pos.sq2pc[to.index() as usize] = Piece::EMPTY;
            pos.sq2pc[king_to.index() as usize] = piece;
            pos.sq2pc[rook_to.index() as usize] = rook;
            pos.sides[side.idx()] &= !(from.mask() | to.mask());
            pos.sides[side.idx()] |= king_to.mask() | rook_to.mask();
            pos.castle_rights &= !rights_of(side);

            pos.hash ^= keys.piece[piece.key_index()][from.index() as usize];
            pos.hash ^= keys.piece[piece.key_index()][king_to.index() as usize];
            pos.hash ^= keys.piece[rook.key_index()][to.index() as usize];
            pos.hash ^= keys.piece[rook.key_index()][rook_to.index() as usize];
        }
    }

    pos.ep_target = new_ep;
    if new_ep.is_some() {
        pos.hash ^= keys.ep_file[new_ep.file() as usize];
    }
    if pos.castle_rights != old_rights {
        xor_castling_delta(&mut pos.hash, keys, old_rights, pos.castle_rights);
    }

    if kind == PieceKind::Pawn || (!captured.is_empty() && flags != MoveFlags::Castle) {
        pos.halfmoves = 0;
    } else {
        pos.halfmoves += 1;
    }
    if side == Color::Black {
        pos.fullmoves += 1;
    }
    pos.stm = contra;

    pos.debug_validate();
    sp
}

/// Reverts `mv`, restoring the exact pre-move position, hash included.
pub fn undo_move(pos: &mut Position, sp: &Savepos, mv: Move) {
    pos.debug_validate();

    let contra = pos.stm;
    let side = contra.opposite();
    let from = mv.from();
    let to = mv.to();
    let flags = mv.flags();
    let keys = zobrist_keys();

    pos.hash ^= keys.side_to_move;
    if pos.ep_target.is_some() {
        pos.hash ^= keys.ep_file[pos.ep_target.file() as usize];
    }
    if pos.castle_rights != sp.castle_rights {
        xor_castling_delta(&mut pos.hash, keys, pos.castle_rights, sp.castle_rights);
        pos.castle_rights = sp.castle_rights;
    }
    pos.halfmoves = sp.halfmoves;
    if side == Color::Black {
        pos.fullmoves -= 1;
    }
    pos.stm = side;

    match flags {
        MoveFlags::None => {
            let piece = pos.piece_at(to);
            if piece.kind() == PieceKind::King {
                pos.kings[side.idx()] = from;
            } else {
                pos.boards[piece.board_index()] ^= from.mask() | to.mask();
            }
            pos.sq2pc[from.index() as usize] = piece;
            pos.sq2pc[to.index() as usize] = sp.captured;
            pos.sides[side.idx()] ^= from.mask() | to.mask();
            pos.hash ^= keys.piece[piece.key_index()][to.index() as usize];
            pos.hash ^= keys.piece[piece.key_index()][from.index() as usize];

            if !sp.captured.is_empty() {
                pos.boards[sp.captured.board_index()] |= to.mask();
                pos.sides[contra.idx()] |= to.mask();
                pos.hash ^= keys.piece[sp.captured.key_index()][to.index() as usize];
            }
        }
        MoveFlags::EnPassant => {
            let piece = Piece::new(side, PieceKind::Pawn);
            let victim = Piece::new(contra, PieceKind::Pawn);
            let capsq = ep_capture_square(side, to);

            pos.boards[piece.board_index()] ^= from.mask() | to.mask();
            pos.boards[victim.board_index()] |= capsq.mask();
            pos.sq2pc[from.index() as usize] = piece;
            pos.sq2pc[to.index() as usize] = Piece::EMPTY;
            pos.sq2pc[capsq.index() as usize] = victim;
            pos.sides[side.idx()] ^= from.mask() | to.mask();
            pos.sides[contra.idx()] |= capsq.mask();

            pos.hash ^= keys.piece[piece.key_index()][to.index() as usize];
            pos.hash ^= keys.piece[piece.key_index()][from.index() as usize];
            pos.hash ^= keys.piece[victim.key_index()][capsq.index() as usize];
        }
        MoveFlags::Promotion => {
            let pawn = Piece::new(side, PieceKind::Pawn);
            let promoted = Piece::new(side, mv.promotion_kind());

            pos.boards[pawn.board_index()] |= from.mask();
            pos.boards[promoted.board_index()] &= !to.mask();
            pos.sq2pc[from.index() as usize] = pawn;
            pos.sq2pc[to.index() as usize] = sp.captured;
            pos.sides[side.idx()] ^= from.mask() | to.mask();

            pos.hash ^= keys.piece[promoted.key_index()][to.index() as usize];
            pos.hash ^= keys.piece[pawn.key_index()][from.index() as usize];

            if !sp.captured.is_empty() {
                pos.boards[sp.captured.board_index()] |= to.mask();
                pos.sides[contra.idx()] |= to.mask();
                pos.hash ^= keys.piece[sp.captured.key_index()][to.index() as usize];
            }
        }
        MoveFlags::Castle => {
            let king = Piece::new(side, PieceKind::King);
            let rook = Piece::new(side, PieceKind::Rook);
            let (king_to, rook_to) = mv.castle_squares();

            pos.kings[side.idx()] = from;
            pos.boards[rook.board_index()] ^= rook_to.mask() | to.mask();
            pos.sq2pc[from.index() as usize] = king;
            pos.sq2pc[to.index() as usize] = rook;
            pos.sq2pc[king_to.index() as usize] = Piece::EMPTY;
            pos.sq2pc[rook_to.index() as usize] = Piece::EMPTY;
            pos.sides[side.idx()] |= from.mask() | to.mask();
            pos.sides[side.idx()] &= !(king_to.mask() | rook_to.mask());

            pos.hash ^= keys.piece[king.key_index()][king_to.index() as usize];
            pos.hash ^= keys.piece[king.key_index()][from.index() as usize];
            pos.hash ^= keys.piece[rook.key_index()][rook_to.index() as usize];
            pos.hash ^= keys.piece[rook.key_index()][to.index() as usize];
        }
    }

    pos.ep_target = sp.ep_target;
    if pos.ep_target.is_some() {
        pos.hash ^= keys.ep_file[pos.ep_target.file() as usize];
    }

    pos.debug_validate();
}
