//! Mutation operators for allocation evolution
//!
//! The only mutation swaps the soldiers of two neighbouring castles (the
//! last castle neighbours the first). Values move, they never change, so
//! the soldier total is untouched.

use rand::Rng;
use riddler_core::Allocation;

/// Swap the troops at a random castle and its cyclic successor.
///
/// Allocations with fewer than two castles are left as they are.
pub fn swap_mutate<R: Rng>(alloc: &mut Allocation, rng: &mut R) {
    let castles = alloc.castles();
    if castles < 2 {
        return;
    }

    let i = rng.gen_range(0..castles);
    let j = (i + 1) % castles;
    alloc.troops_mut().swap(i, j);
}

/// Apply [`swap_mutate`] with probability `rate`.
///
/// # Returns
/// Whether the allocation was mutated
///
/// # Panics
/// Panics if `rate` is outside `0.0..=1.0`
pub fn maybe_mutate<R: Rng>(alloc: &mut Allocation, rate: f64, rng: &mut R) -> bool {
    if rng.gen_bool(rate) {
        swap_mutate(alloc, rng);
        true
    } else {
        false
    }
}
