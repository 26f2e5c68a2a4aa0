//! Selection operators for genetic algorithms
//!
//! The weakest fraction of each generation is culled and parents are
//! drawn uniformly from whoever survives.

use rand::Rng;
use riddler_core::Allocation;

/// Indices of the population sorted by fitness, weakest first.
///
/// The sort is stable: equal fitness keeps population order.
pub fn ascending_order(fitness: &[u32]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitness.len()).collect();
    indices.sort_by_key(|&idx| fitness[idx]);
    indices
}

/// Discard the `cull_count` weakest members of the population.
///
/// # Returns
/// Survivors, weakest first
///
/// # Panics
/// Panics if population and fitness differ in length
pub fn cull(population: Vec<Allocation>, fitness: &[u32], cull_count: usize) -> Vec<Allocation> {
    assert_eq!(population.len(), fitness.len(), "Population and fitness must have same length");

    let mut slots: Vec<Option<Allocation>> = population.into_iter().map(Some).collect();

    ascending_order(fitness)
        .into_iter()
        .skip(cull_count)
        .filter_map(|idx| slots[idx].take())
        .collect()
}

/// Pick two distinct parents uniformly at random.
///
/// # Panics
/// Panics if there are fewer than two candidates
pub fn select_parents<'a, R: Rng>(
    survivors: &'a [Allocation],
    rng: &mut R,
) -> (&'a Allocation, &'a Allocation) {
    assert!(survivors.len() >= 2, "Need at least two survivors to breed");

    let picked = rand::seq::index::sample(rng, survivors.len(), 2);
    (&survivors[picked.index(0)], &survivors[picked.index(1)])
}
