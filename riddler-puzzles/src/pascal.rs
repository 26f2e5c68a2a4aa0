//! Odd entries of Pascal's triangle
//!
//! Only parity matters, so rows are kept modulo 2: each inner entry is the
//! XOR of the two entries above it. Row sizes grow linearly instead of the
//! binomial coefficients growing exponentially.

use std::iter;

use serde::Serialize;

/// Rows of Pascal's triangle modulo 2, starting with `[1]`
pub fn parity_rows() -> impl Iterator<Item = Vec<bool>> {
    iter::successors(Some(vec![true]), |row| Some(next_parity_row(row)))
}

fn next_parity_row(row: &[bool]) -> Vec<bool> {
    let mut next = Vec::with_capacity(row.len() + 1);
    next.push(true);
    next.extend(row.windows(2).map(|pair| pair[0] ^ pair[1]));
    next.push(true);
    next
}

/// Running odd count after one row
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RowStats {
    /// One-based row number
    pub row: usize,
    /// Odd entries in rows `1..=row`
    pub odd: u64,
    /// All entries in rows `1..=row`
    pub total: u64,
    pub fraction: f64,
}

/// Cumulative odd fraction for each of the first `rows` rows
pub fn odd_fractions(rows: usize) -> Vec<RowStats> {
    let mut odd = 0u64;
    let mut total = 0u64;

    parity_rows()
        .take(rows)
        .enumerate()
        .map(|(idx, row)| {
            total += row.len() as u64;
            odd += row.iter().filter(|&&is_odd| is_odd).count() as u64;
            RowStats {
                row: idx + 1,
                odd,
                total,
                fraction: odd as f64 / total as f64,
            }
        })
        .collect()
}
