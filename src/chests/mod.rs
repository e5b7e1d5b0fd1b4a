//! Chest tiers and the chest catalog.
//!
//! Chest loot items carry `chance` values that act as relative weights
//! within their tier's table (the table total does not need to sum to
//! 100). This is deliberately different from mob drops, which roll each
//! entry independently; see `drops.rs`.

mod data;

pub use data::default_chest_tiers;

use rand::Rng;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::table::WeightedTable;

/// One possible item from a chest's loot table.
#[derive(Debug, Clone, Serialize)]
pub struct LootItem {
    pub name: &'static str,
    /// Relative weight within the tier's table, NOT an independent
    /// probability.
    pub chance: f64,
    pub min_qty: u32,
    pub max_qty: u32,
}

/// A named loot-quality bracket with its own coin/xp ranges and item table.
#[derive(Debug, Clone, Serialize)]
pub struct ChestTier {
    /// Unique key, also the catalog key.
    pub key: &'static str,
    pub display: &'static str,
    /// Relative selection weight when picking a tier from a pool.
    pub weight: f64,
    /// Inclusive coin reward range.
    pub coins: (u32, u32),
    /// Inclusive XP reward range.
    pub xp: (u32, u32),
    pub items: Vec<LootItem>,
    pub notes: &'static str,
}

/// Read-only registry of chest tiers, built once at startup.
#[derive(Debug, Clone)]
pub struct ChestCatalog {
    tiers: Vec<ChestTier>,
}

impl ChestCatalog {
    /// Builds the catalog from the shipped tier data.
    pub fn new() -> EngineResult<Self> {
        Self::from_tiers(default_chest_tiers())
    }

    /// Builds a catalog from arbitrary tier data, rejecting tiers whose
    /// item tables could not be resolved at open time.
    pub fn from_tiers(tiers: Vec<ChestTier>) -> EngineResult<Self> {
        if tiers.is_empty() {
            return Err(EngineError::EmptyTable);
        }
        for tier in &tiers {
            if !tier.weight.is_finite() || tier.weight <= 0.0 {
                return Err(EngineError::InvalidWeight {
                    entry: tier.key.to_string(),
                    weight: tier.weight,
                });
            }
            // An empty or zero-weight item table would make every open of
            // this tier fail; reject it at startup instead.
            item_table(tier)?;
        }
        Ok(Self { tiers })
    }

    /// Looks up a tier by key.
    pub fn get(&self, key: &str) -> EngineResult<&ChestTier> {
        self.tiers
            .iter()
            .find(|tier| tier.key == key)
            .ok_or_else(|| EngineError::UnknownChestTier(key.to_string()))
    }

    /// All tier keys in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.key).collect()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Draws one tier uniformly from the full tier list (the exploration
    /// roll).
    pub fn sample_uniform(&self, rng: &mut impl Rng) -> &ChestTier {
        &self.tiers[rng.gen_range(0..self.tiers.len())]
    }

    /// Draws one tier weighted by `weight`, restricted to an allowed key
    /// list (a biome's `chest_tiers` pool). Fails on unknown keys or an
    /// empty list.
    pub fn pick_weighted(&self, allowed: &[&str], rng: &mut impl Rng) -> EngineResult<&ChestTier> {
        let mut entries = Vec::with_capacity(allowed.len());
        for key in allowed {
            let tier = self.get(key)?;
            entries.push((tier, tier.weight));
        }
        let table = WeightedTable::new(entries)?;
        Ok(*table.sample(rng))
    }
}

/// Builds the weighted item table for one tier.
pub(crate) fn item_table(tier: &ChestTier) -> EngineResult<WeightedTable<LootItem>> {
    WeightedTable::new(
        tier.items
            .iter()
            .map(|item| (item.clone(), item.chance))
            .collect(),
    )
    .map_err(|_| EngineError::InvalidDropTable(tier.key.to_string()))
}
