use std::collections::HashSet;

use rand::Rng;

use crate::errors::BenchError;
use crate::types::Board;

/// English letter frequencies (percent of letters in running text), from the
/// Cornell Math Explorer's Project cryptography notes. Most to least frequent.
const ENGLISH_LETTER_WEIGHTS: [(char, f64); 26] = [
    ('E', 12.02),
    ('T', 9.1),
    ('A', 8.12),
    ('O', 7.68),
    ('I', 7.31),
    ('N', 6.95),
    ('S', 6.28),
    ('R', 6.02),
    ('H', 5.92),
    ('D', 4.32),
    ('L', 3.98),
    ('U', 2.88),
    ('C', 2.71),
    ('M', 2.61),
    ('F', 2.3),
    ('Y', 2.11),
    ('W', 2.09),
    ('G', 2.03),
    ('P', 1.82),
    ('B', 1.49),
    ('V', 1.11),
    ('K', 0.69),
    ('X', 0.17),
    ('Q', 0.11),
    ('J', 0.1),
    ('Z', 0.07),
];

/// Symbols with relative weights, walked in insertion order when sampling.
#[derive(Debug, Clone)]
pub struct WeightTable {
    entries: Vec<(char, f64)>,
    total: f64,
}

impl WeightTable {
    /// Validate and build a table. Zero weights are allowed (the symbol is
    /// never drawn) as long as something carries weight.
    pub fn new(entries: Vec<(char, f64)>) -> Result<Self, BenchError> {
        if entries.is_empty() {
            return Err(BenchError::EmptyWeightTable);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for &(symbol, weight) in &entries {
            if !weight.is_finite() || weight < 0.0 {
                return Err(BenchError::InvalidWeight { symbol, weight });
            }
            if !seen.insert(symbol) {
                return Err(BenchError::DuplicateSymbol { symbol });
            }
        }

        let total = sum_weights(&entries);
        if total <= 0.0 {
            return Err(BenchError::ZeroTotalWeight);
        }

        Ok(Self { entries, total })
    }

    /// The 26 uppercase letters weighted by English frequency.
    pub fn english() -> Self {
        let entries = ENGLISH_LETTER_WEIGHTS.to_vec();
        let total = sum_weights(&entries);
        Self { entries, total }
    }

    pub fn entries(&self) -> &[(char, f64)] {
        &self.entries
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.entries.iter().any(|&(s, _)| s == symbol)
    }
}

// Sampling relies on this being the same left-to-right sum it walks.
fn sum_weights(entries: &[(char, f64)]) -> f64 {
    entries.iter().fold(0.0, |acc, &(_, w)| acc + w)
}

/// Draw one symbol with probability `weight / total`.
///
/// `r` is uniform in `[0, total)`; each entry owns the segment
/// `[upto, upto + weight)`, so zero-weight entries own nothing.
pub fn weighted_sample<R: Rng + ?Sized>(table: &WeightTable, rng: &mut R) -> char {
    let r = rng.gen_range(0.0..table.total);
    let mut upto = 0.0;
    for &(symbol, weight) in &table.entries {
        if r < upto + weight {
            return symbol;
        }
        upto += weight;
    }
    unreachable!("weighted sample {r} fell past total weight {}", table.total)
}

/// Draw `size` independent cells.
pub fn generate_board<R: Rng + ?Sized>(table: &WeightTable, size: usize, rng: &mut R) -> Board {
    let letters = (0..size).map(|_| weighted_sample(table, rng)).collect();
    Board::new(letters)
}
