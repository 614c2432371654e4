//! Ray tables supporting legality tests: the squares strictly between two
//! colinear squares, and the full line through them.

use crate::square::Square;
use once_cell::sync::Lazy;

struct RayTables {
    /// Squares strictly between two squares sharing a rank, file, or
    /// diagonal; zero when they do not.
    between: Box<[[u64; 64]; 64]>,
    /// The entire rank/file/diagonal through two colinear squares,
    /// endpoints included; zero when they do not share one.
    line: Box<[[u64; 64]; 64]>,
}

static TABLES: Lazy<RayTables> = Lazy::new(build_tables);

const FILE_STEP: [i8; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const RANK_STEP: [i8; 8] = [0, 1, 1, 1, 0, -1, -1, -1];

fn build_tables() -> RayTables {
    let mut between = Box::new([[0u64; 64]; 64]);
    let mut line = Box::new([[0u64; 64]; 64]);

    for from in 0..64usize {
        let f0 = (from % 8) as i8;
        let r0 = (from / 8) as i8;
        for dir in 0..8 {
            // whole ray in this direction plus the opposite one
            let full = ray(f0, r0, dir) | ray(f0, r0, (dir + 4) % 8) | (1u64 << from);

            let mut gap = 0u64;
            let mut f = f0 + FILE_STEP[dir];
            let mut r = r0 + RANK_STEP[dir];
            while (0..8).contains(&f) && (0..8).contains(&r) {
                let to = (r * 8 + f) as usize;
                line[from][to] = full;
                between[from][to] = gap;
                gap |= 1u64 << to;
                f += FILE_STEP[dir];
                r += RANK_STEP[dir];
            }
        }
    }

    RayTables { between, line }
}

fn ray(mut f: i8, mut r: i8, dir: usize) -> u64 {
    let mut bb = 0u64;
    loop {
        f += FILE_STEP[dir];
        r += RANK_STEP[dir];
        if !(0..8).contains(&f) || !(0..8).contains(&r) {
            return bb;
        }
        bb |= 1u64 << (r * 8 + f);
    }
}

/// Squares strictly between `a` and `b`, or zero off-line.
#[inline(always)]
pub fn between(a: Square, b: Square) -> u64 {
    TABLES.between[a.index() as usize][b.index() as usize]
}

/// The full line through `a` and `b` (endpoints included), or zero.
#[inline(always)]
pub fn line(a: Square, b: Square) -> u64 {
    TABLES.line[a.index() as usize][b.index() as usize]
}

/// Whether `a`, `b` and `c` all lie on one rank, file, or diagonal.
#[inline(always)]
pub fn lined_up(a: Square, b: Square, c: Square) -> bool {
    line(a, c) & b.mask() != 0
}
