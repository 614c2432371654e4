//! Zobrist key material: 12 x 64 piece-square terms, one side-to-move
//! term (folded in while White is to move), four castling-right terms,
//! and eight en-passant file terms.
//!
//! Keys are drawn from a fixed-seed RNG so every build hashes identically,
//! and regenerated values are rejected until the whole set is pairwise
//! distinct.

use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

const ZOBRIST_SEED: u64 = 0xD6E8_FEB8_6659_FD93;

pub struct ZobristKeys {
    /// Indexed by `Piece::key_index()` then square.
    pub piece: [[u64; 64]; 12],
    pub side_to_move: u64,
    /// One key per right, in `CASTLE_RIGHT_BITS` order (WK, WQ, BK, BQ).
    pub castling: [u64; 4],
    /// Files a..h.
    pub ep_file: [u64; 8],
}

/// Process-wide keys, generated on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_keys(StdRng::seed_from_u64(ZOBRIST_SEED)))
}

/// XORs the per-right terms for every right that differs between `old`
/// and `new` rights masks.
#[inline]
pub fn xor_castling_delta(hash: &mut u64, keys: &ZobristKeys, old: u8, new: u8) {
    let delta = old ^ new;
    for (i, bit) in crate::board::CASTLE_RIGHT_BITS.iter().enumerate() {
        if delta & bit != 0 {
            *hash ^= keys.castling[i];
        }
    }
}

fn generate_keys(mut rng: StdRng) -> ZobristKeys {
    let mut seen = HashSet::with_capacity(12 * 64 + 13);
    let mut fresh = |rng: &mut StdRng| loop {
        let v = rng.next_u64();
        // zero is reserved for "no key"; duplicates would alias positions
        if v != 0 && seen.insert(v) {
            return v;
        }
    };

    let mut keys = ZobristKeys {
        piece: [[0; 64]; 12],
        side_to_move: 0,
        castling: [0; 4],
        ep_file: [0; 8],
    };

    for piece in keys.piece.iter_mut() {
        for slot in piece.iter_mut() {
            *slot = fresh(&mut rng);
        }
    }
    keys.side_to_move = fresh(&mut rng);
    for slot in keys.castling.iter_mut() {
        *slot = fresh(&mut rng);
    }
    for slot in keys.ep_file.iter_mut() {
        *slot = fresh(&mut rng);
    }

    keys
}
