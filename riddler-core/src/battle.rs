//! Pairwise battles between allocations
//!
//! Castle `i` is worth `i + 1` points. The side with strictly more soldiers
//! at a castle takes its points; a tie splits them. Scores are counted in
//! half-points so the split stays exact.

use serde::Serialize;

use crate::allocation::Allocation;

/// Result of a battle from the first side's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

/// Scores of both sides, in half-points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BattleResult {
    pub first: u64,
    pub second: u64,
}

impl BattleResult {
    pub fn outcome(&self) -> Outcome {
        match self.first.cmp(&self.second) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// First side's score in victory points
    pub fn first_points(&self) -> f64 {
        self.first as f64 / 2.0
    }

    /// Second side's score in victory points
    pub fn second_points(&self) -> f64 {
        self.second as f64 / 2.0
    }
}

/// Fight `a` against `b` castle by castle.
///
/// # Panics
/// Panics if the allocations cover a different number of castles
pub fn battle(a: &Allocation, b: &Allocation) -> BattleResult {
    assert_eq!(
        a.castles(),
        b.castles(),
        "Allocations must cover the same castles"
    );

    let mut result = BattleResult { first: 0, second: 0 };

    for (idx, (&ours, &theirs)) in a.troops().iter().zip(b.troops()).enumerate() {
        let value = idx as u64 + 1;
        if ours > theirs {
            result.first += 2 * value;
        } else if ours < theirs {
            result.second += 2 * value;
        } else {
            result.first += value;
            result.second += value;
        }
    }

    result
}

/// True if `a` scores strictly more than `b`
pub fn beats(a: &Allocation, b: &Allocation) -> bool {
    battle(a, b).outcome() == Outcome::Win
}
