//! Perft: counts legal leaf nodes at a fixed depth. The move generator's
//! correctness oracle; the canonical positions in `tests/perft_tests.rs`
//! must match to the last digit.

use crate::board::Position;
use crate::moves::execute::{make_move, undo_move};
use crate::moves::movegen::generate_legal;
use crate::moves::types::{Move, MoveList};
use tracing::{debug, instrument};

/// Leaf count at exactly `depth` plies below `pos`.
#[instrument(skip(pos), fields(depth))]
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    perft_inner(pos, depth)
}

fn perft_inner(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut moves = MoveList::new();
    generate_legal(pos, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in moves.iter() {
        let sp = make_move(pos, mv);
        nodes += perft_inner(pos, depth - 1);
        undo_move(pos, &sp, mv);
    }
    nodes
}

/// Per-root-move breakdown used when hunting a generator divergence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftBreakdown {
    pub nodes: u64,
    pub captures: u64,
    pub ep_captures: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftBreakdown {
    fn tally(&mut self, pos: &Position, mv: Move) {
        if mv.is_enpassant() {
            self.captures += 1;
            self.ep_captures += 1;
        } else if !pos.piece_at(mv.to()).is_empty() && !mv.is_castle() {
            self.captures += 1;
        }
        if mv.is_castle() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }
    }
}

fn perft_breakdown_inner(pos: &mut Position, depth: u32, out: &mut PerftBreakdown) {
    if depth == 0 {
        out.nodes += 1;
        return;
    }
    let mut moves = MoveList::new();
    generate_legal(pos, &mut moves);
    for &mv in moves.iter() {
        out.tally(pos, mv);
        let sp = make_move(pos, mv);
        perft_breakdown_inner(pos, depth - 1, out);
        undo_move(pos, &sp, mv);
    }
}

/// Node counts (and move-kind tallies) per root move. The sum of the
/// per-root node counts equals `perft(pos, depth)`.
#[instrument(skip(pos), fields(depth))]
pub fn perft_divide(pos: &mut Position, depth: u32) -> Vec<(Move, PerftBreakdown)> {
    debug_assert!(depth >= 1);
    let mut roots = MoveList::new();
    generate_legal(pos, &mut roots);
    debug!(root_moves = roots.len(), "divide");

    let mut out = Vec::with_capacity(roots.len());
    for &mv in roots.iter() {
        let sp = make_move(pos, mv);
        let mut counts = PerftBreakdown::default();
        if depth == 1 {
            counts.nodes = 1;
        } else {
            perft_breakdown_inner(pos, depth - 1, &mut counts);
        }
        undo_move(pos, &sp, mv);
        debug!(%mv, nodes = counts.nodes, "divide: root move");
        out.push((mv, counts));
    }
    out
}
