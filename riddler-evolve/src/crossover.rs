//! Crossover operators for allocation evolution
//!
//! Children average their parents castle by castle, then the soldiers lost
//! to rounding are sent to one random castle.

use rand::Rng;
use riddler_core::Allocation;

/// Crossover two allocations by per-castle floor averaging.
///
/// Flooring can lose up to one soldier per castle; the whole deficit goes
/// to a single uniformly chosen castle so the child commits exactly as many
/// soldiers as its parents.
///
/// # Arguments
/// * `a` - First parent allocation
/// * `b` - Second parent allocation
/// * `rng` - Random number generator
///
/// # Returns
/// New allocation with the same castles and soldiers as the parents
///
/// # Panics
/// Panics if the parents differ in castle count or total soldiers, or
/// cover no castles at all
pub fn crossover<R: Rng>(a: &Allocation, b: &Allocation, rng: &mut R) -> Allocation {
    assert_eq!(a.castles(), b.castles(), "Parents must cover the same castles");
    assert!(a.castles() > 0, "Parents must cover at least one castle");

    let soldiers = a.soldiers();
    assert_eq!(soldiers, b.soldiers(), "Parents must commit the same soldiers");

    let mut troops: Vec<u32> = a
        .troops()
        .iter()
        .zip(b.troops())
        .map(|(&x, &y)| ((u64::from(x) + u64::from(y)) / 2) as u32)
        .collect();

    let deficit = soldiers - troops.iter().sum::<u32>();
    let idx = rng.gen_range(0..troops.len());
    troops[idx] += deficit;

    Allocation::new(troops)
}
