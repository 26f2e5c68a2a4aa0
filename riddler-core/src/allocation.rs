//! Allocation - how one warlord distributes soldiers across castles

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Soldiers sent to each castle. Castle `i` is worth `i + 1` points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocation {
    troops: Vec<u32>,
}

impl Allocation {
    /// Wrap an explicit troop vector
    pub fn new(troops: Vec<u32>) -> Self {
        Self { troops }
    }

    /// Generate a random allocation of `soldiers` across `castles`.
    ///
    /// Each castle but the last draws uniformly from whatever is left, the
    /// last castle takes the remainder, and the result is shuffled so the
    /// remainder does not always land on the most valuable castle.
    ///
    /// # Panics
    /// Panics if `castles` is 0
    pub fn random<R: Rng>(soldiers: u32, castles: usize, rng: &mut R) -> Self {
        assert!(castles > 0, "An allocation needs at least one castle");

        let mut remaining = soldiers;
        let mut troops = Vec::with_capacity(castles);

        for _ in 1..castles {
            let sent = rng.gen_range(0..=remaining);
            troops.push(sent);
            remaining -= sent;
        }
        troops.push(remaining);

        troops.shuffle(rng);

        Self { troops }
    }

    /// Number of castles
    pub fn castles(&self) -> usize {
        self.troops.len()
    }

    /// Total soldiers committed
    pub fn soldiers(&self) -> u32 {
        self.troops.iter().sum()
    }

    pub fn troops(&self) -> &[u32] {
        &self.troops
    }

    pub fn troops_mut(&mut self) -> &mut [u32] {
        &mut self.troops
    }

    pub fn into_troops(self) -> Vec<u32> {
        self.troops
    }
}

impl From<Vec<u32>> for Allocation {
    fn from(troops: Vec<u32>) -> Self {
        Self::new(troops)
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.troops.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", count)?;
        }
        write!(f, "]")
    }
}
