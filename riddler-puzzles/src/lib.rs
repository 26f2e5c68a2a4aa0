//! Riddler Puzzles - Small exhaustive number puzzles
//!
//! - Pascal's triangle: how much of it is odd
//! - Prime pairs: permutations whose neighbours sum to primes

pub mod pascal;
pub mod prime_pairs;

pub use pascal::{odd_fractions, parity_rows, RowStats};
pub use prime_pairs::{search, PrimePairs, PrimeSieve};
