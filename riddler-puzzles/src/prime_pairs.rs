//! Permutations of `1..=n` whose neighbouring numbers sum to primes
//!
//! The search is a depth-first backtrack in lexicographic order. Linear
//! sequences are reported once per reversal pair; wrap-around sequences
//! (where the last and first numbers also sum to a prime) are reported
//! once per rotation/reflection class.

use serde::Serialize;

/// Sieve of Eratosthenes up to a fixed limit
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    composite: Vec<bool>,
}

impl PrimeSieve {
    /// Sieve every number in `0..=limit`
    pub fn new(limit: usize) -> Self {
        let mut composite = vec![false; limit + 1];
        for n in composite.iter_mut().take(2) {
            *n = true;
        }

        let mut p = 2;
        while p * p <= limit {
            if !composite[p] {
                for multiple in (p * p..=limit).step_by(p) {
                    composite[multiple] = true;
                }
            }
            p += 1;
        }

        Self { composite }
    }

    /// Largest number the sieve covers
    pub fn limit(&self) -> usize {
        self.composite.len() - 1
    }

    /// # Panics
    /// Panics if `n` is above the sieve limit
    pub fn is_prime(&self, n: usize) -> bool {
        assert!(n <= self.limit(), "{} is beyond the sieve limit {}", n, self.limit());
        !self.composite[n]
    }
}

/// Every prime-pair permutation of `1..=n`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrimePairs {
    /// Adjacent sums prime; one of each sequence/reversal pair
    pub linear: Vec<Vec<u32>>,
    /// Also prime across the wrap; one per rotation/reflection class
    pub cyclic: Vec<Vec<u32>>,
}

/// Find every prime-pair permutation of `1..=n`
pub fn search(n: u32) -> PrimePairs {
    let size = n as usize;
    let sieve = PrimeSieve::new(2 * size);
    let mut search = Search {
        sieve: &sieve,
        size,
        sequence: Vec::with_capacity(size),
        used: vec![false; size + 1],
        found: PrimePairs::default(),
    };
    search.extend();
    search.found
}

struct Search<'a> {
    sieve: &'a PrimeSieve,
    size: usize,
    sequence: Vec<u32>,
    used: Vec<bool>,
    found: PrimePairs,
}

impl Search<'_> {
    fn extend(&mut self) {
        if self.sequence.len() == self.size {
            self.record();
            return;
        }

        for next in 1..=self.size {
            if self.used[next] {
                continue;
            }
            if let Some(&last) = self.sequence.last() {
                if !self.sieve.is_prime(last as usize + next) {
                    continue;
                }
            }

            self.used[next] = true;
            self.sequence.push(next as u32);
            self.extend();
            self.sequence.pop();
            self.used[next] = false;
        }
    }

    fn record(&mut self) {
        let sequence = &self.sequence;

        if sequence.iter().le(sequence.iter().rev()) {
            self.found.linear.push(sequence.clone());
        }

        if self.closes_cycle() && is_canonical_cycle(sequence) {
            self.found.cyclic.push(sequence.clone());
        }
    }

    fn closes_cycle(&self) -> bool {
        match (self.sequence.first(), self.sequence.last()) {
            (Some(&first), Some(&last)) if self.size >= 2 => {
                self.sieve.is_prime(first as usize + last as usize)
            }
            _ => false,
        }
    }
}

/// True if `cycle` is the smallest of all its rotations and reflections
fn is_canonical_cycle(cycle: &[u32]) -> bool {
    let len = cycle.len();
    let reversed: Vec<u32> = cycle.iter().rev().copied().collect();

    (0..len).all(|shift| {
        let rotated = cycle.iter().cycle().skip(shift).take(len);
        let reflected = reversed.iter().cycle().skip(shift).take(len);
        cycle.iter().le(rotated) && cycle.iter().le(reflected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve() {
        let sieve = PrimeSieve::new(30);
        let primes: Vec<usize> = (0..=30).filter(|&n| sieve.is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(sieve.limit(), 30);
    }

    #[test]
    fn test_tiny_sieve() {
        assert!(!PrimeSieve::new(0).is_prime(0));
        assert!(!PrimeSieve::new(1).is_prime(1));
    }

    #[test]
    fn test_four() {
        let found = search(4);
        assert_eq!(
            found.linear,
            vec![vec![1, 2, 3, 4], vec![1, 4, 3, 2], vec![2, 1, 4, 3], vec![3, 2, 1, 4]]
        );
        assert_eq!(found.cyclic, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_six_has_one_cycle() {
        assert_eq!(search(6).cyclic, vec![vec![1, 4, 3, 2, 5, 6]]);
    }

    #[test]
    fn test_nine() {
        let found = search(9);
        assert_eq!(found.linear.len(), 70);
        // odd + odd is even, so an odd-length cycle can never close
        assert!(found.cyclic.is_empty());
    }

    #[test]
    fn test_eight() {
        let found = search(8);
        assert_eq!(found.linear.len(), 30);
        assert_eq!(found.cyclic.len(), 2);
    }

    #[test]
    fn test_every_result_is_valid() {
        let sieve = PrimeSieve::new(20);
        let found = search(10);

        for seq in found.linear.iter().chain(&found.cyclic) {
            let mut sorted = seq.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (1..=10).collect::<Vec<u32>>());
            assert!(seq.windows(2).all(|w| sieve.is_prime((w[0] + w[1]) as usize)));
        }
    }

    #[test]
    fn test_trivial_lengths() {
        assert_eq!(search(1).linear, vec![vec![1]]);
        assert!(search(1).cyclic.is_empty());
        assert_eq!(search(2).cyclic, vec![vec![1, 2]]);
    }

    #[test]
    fn test_canonical_cycle() {
        assert!(is_canonical_cycle(&[1, 2, 3, 4]));
        assert!(!is_canonical_cycle(&[2, 3, 4, 1]));
        assert!(!is_canonical_cycle(&[1, 4, 3, 2]));
    }
}
