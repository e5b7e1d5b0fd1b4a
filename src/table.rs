//! Weighted categorical sampling.
//!
//! Every random selection over biome/chest/loot tables goes through
//! [`WeightedTable`], which walks entries in declaration order against a
//! cumulative weight sum. Declaration order matters: the first entry whose
//! cumulative sum reaches the drawn value wins, so boundary draws resolve
//! deterministically for a fixed table order.

use rand::Rng;

use crate::error::{EngineError, EngineResult};

/// A read-only weighted-categorical sampler over `(item, weight)` pairs.
///
/// Each entry is selected with probability `weight / total_weight`.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f64)>,
    total: f64,
}

impl<T> WeightedTable<T> {
    /// Builds a table, validating every weight up front.
    ///
    /// Fails with [`EngineError::EmptyTable`] on an empty entry list and
    /// [`EngineError::InvalidWeight`] on any weight that is not a finite
    /// positive number.
    pub fn new(entries: Vec<(T, f64)>) -> EngineResult<Self> {
        if entries.is_empty() {
            return Err(EngineError::EmptyTable);
        }
        for (index, (_, weight)) in entries.iter().enumerate() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(EngineError::InvalidWeight {
                    entry: format!("entry {index}"),
                    weight: *weight,
                });
            }
        }
        let total = entries.iter().map(|(_, w)| w).sum();
        Ok(Self { entries, total })
    }

    /// Sum of all entry weights.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draws one entry at random, weighted by each entry's share of the
    /// total weight.
    pub fn sample(&self, rng: &mut impl Rng) -> &T {
        self.pick(rng.gen_range(0.0..self.total))
    }

    /// Resolves a raw draw `r` in `[0, total_weight)` to an entry.
    ///
    /// Returns the first entry whose cumulative weight (including its own)
    /// is `>= r`. On a boundary draw equal to an entry's cumulative sum the
    /// earlier entry wins. If floating-point rounding leaves no entry
    /// satisfying the condition, the last entry is returned; this covers
    /// accumulated rounding shortfall only, since construction already
    /// rejected zero and negative weights.
    pub fn pick(&self, r: f64) -> &T {
        let mut upto = 0.0;
        for (item, weight) in &self.entries {
            if upto + weight >= r {
                return item;
            }
            upto += weight;
        }
        // Rounding tolerance, not error suppression.
        &self.entries[self.entries.len() - 1].0
    }
}
