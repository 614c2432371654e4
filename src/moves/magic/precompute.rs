//! Full magic-table construction. Deterministic: the factor search runs
//! off a fixed seed, so regenerated tables are identical across builds.

use super::attacks::{bishop_attacks_slow, rook_attacks_slow};
use super::search::find_magic;
use super::structs::{MagicEntry, MagicTables};
use rand::{SeedableRng, rngs::StdRng};

pub const MAGIC_SEED: u64 = 0x2545_F491_4F6C_DD1D;

const ROOK_FILE_STEP: [i8; 4] = [0, 0, 1, -1];
const ROOK_RANK_STEP: [i8; 4] = [1, -1, 0, 0];
const BISHOP_FILE_STEP: [i8; 4] = [1, 1, -1, -1];
const BISHOP_RANK_STEP: [i8; 4] = [1, -1, 1, -1];

pub fn generate_magic_tables(seed: u64) -> Result<MagicTables, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rook = build_side(
        &ROOK_FILE_STEP,
        &ROOK_RANK_STEP,
        rook_attacks_slow,
        &mut rng,
    )?;
    let bishop = build_side(
        &BISHOP_FILE_STEP,
        &BISHOP_RANK_STEP,
        bishop_attacks_slow,
        &mut rng,
    )?;
    Ok(MagicTables { rook, bishop })
}

fn build_side(
    file_step: &[i8; 4],
    rank_step: &[i8; 4],
    slow: fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<Box<[MagicEntry]>, String> {
    let mut entries = Vec::with_capacity(64);
    for sq in 0..64usize {
        let mask = relevant_mask(sq, file_step, rank_step);
        let bits = mask.count_ones();
        let shift = 64 - bits;

        let blockers = subsets(mask);
        let attacks: Vec<u64> = blockers.iter().map(|&b| slow(sq, b)).collect();

        let magic = find_magic(&blockers, &attacks, shift, rng)
            .ok_or_else(|| format!("no magic factor found for square {sq}"))?;

        let mut table = vec![0u64; 1usize << bits];
        for (&blocker, &attack) in blockers.iter().zip(&attacks) {
            let index = (blocker.wrapping_mul(magic) >> shift) as usize;
            table[index] = attack;
        }

        entries.push(MagicEntry {
            magic,
            shift,
            mask,
            table: table.into_boxed_slice(),
        });
    }
    Ok(entries.into_boxed_slice())
}

/// The blocker squares that can alter this square's attack set: every ray
/// square short of the board edge.
fn relevant_mask(square: usize, file_step: &[i8; 4], rank_step: &[i8; 4]) -> u64 {
    let mut mask = 0u64;
    for dir in 0..4 {
        let mut f = (square % 8) as i8 + file_step[dir];
        let mut r = (square / 8) as i8 + rank_step[dir];
        // stop one square before the edge: the edge square never shadows
        while (0..8).contains(&(f + file_step[dir])) && (0..8).contains(&(r + rank_step[dir])) {
            mask |= 1u64 << (r * 8 + f);
            f += file_step[dir];
            r += rank_step[dir];
        }
    }
    mask
}

/// All subsets of `mask` via the carry-rippler walk.
fn subsets(mask: u64) -> Vec<u64> {
    let mut out = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        out.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            return out;
        }
    }
}
