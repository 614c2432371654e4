//! Trial search for magic multipliers. Candidates are sparse random
//! numbers; a candidate is accepted when it hashes every blocker subset
//! to an index whose slot agrees on the attack set.

use rand::RngCore;

#[inline(always)]
pub fn random_sparse_u64<R: RngCore>(rng: &mut R) -> u64 {
    rng.next_u64() & rng.next_u64() & rng.next_u64()
}

pub fn magic_is_valid(blockers: &[u64], attacks: &[u64], magic: u64, shift: u32) -> bool {
    debug_assert_eq!(blockers.len(), attacks.len());
    let mut slots = vec![0u64; blockers.len()];
    let mut used = vec![false; blockers.len()];

    for (&blocker, &attack) in blockers.iter().zip(attacks) {
        let index = (blocker.wrapping_mul(magic) >> shift) as usize;
        if index >= slots.len() {
            return false;
        }
        if used[index] {
            // constructive collisions (same attack set) are fine
            if slots[index] != attack {
                return false;
            }
        } else {
            used[index] = true;
            slots[index] = attack;
        }
    }
    true
}

pub fn find_magic<R: RngCore>(
    blockers: &[u64],
    attacks: &[u64],
    shift: u32,
    rng: &mut R,
) -> Option<u64> {
    for _ in 0..1_000_000 {
        let magic = random_sparse_u64(rng);
        if magic_is_valid(blockers, attacks, magic, shift) {
            return Some(magic);
        }
    }
    None
}
