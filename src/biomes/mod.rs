//! Biome entities and the weighted biome catalog.
//!
//! Biomes are the top-level zones a player unlocks by opening a biome
//! card. Each biome carries the pools (structures, mobs, chest tiers)
//! that exploration draws from, plus the flat bonus granted on unlock.

mod data;

pub use data::default_biomes;

use serde::Serialize;

use rand::Rng;

use crate::error::{EngineError, EngineResult};
use crate::table::WeightedTable;

/// Shared rarity bracket used by biomes and mobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

/// Flat rewards granted when a biome is unlocked.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BiomeBonus {
    pub xp: u32,
    pub coins: u32,
    pub drop_bonus_percent: u32,
}

/// One unlockable game zone.
#[derive(Debug, Clone, Serialize)]
pub struct Biome {
    /// Unique name, also the catalog key.
    pub name: &'static str,
    pub rarity: Rarity,
    /// Relative selection weight for card opens (not normalized).
    pub selection_weight: f64,
    pub description: &'static str,
    /// Structure keys valid in this biome, in declaration order.
    pub structures: Vec<&'static str>,
    /// Mob keys valid in this biome, in declaration order.
    pub mobs: Vec<&'static str>,
    /// Chest tier keys this biome can yield when explored.
    pub chest_tiers: Vec<&'static str>,
    pub bonus: BiomeBonus,
}

/// Read-only registry of all biomes, built once at startup.
#[derive(Debug, Clone)]
pub struct BiomeCatalog {
    biomes: Vec<Biome>,
    // Indices into `biomes`, weighted by selection_weight.
    weighted: WeightedTable<usize>,
}

impl BiomeCatalog {
    /// Builds the catalog from the shipped biome data.
    pub fn new() -> EngineResult<Self> {
        Self::from_biomes(default_biomes())
    }

    /// Builds a catalog from arbitrary biome data, validating selection
    /// weights up front.
    pub fn from_biomes(biomes: Vec<Biome>) -> EngineResult<Self> {
        let weighted = WeightedTable::new(
            biomes
                .iter()
                .enumerate()
                .map(|(index, biome)| (index, biome.selection_weight))
                .collect(),
        )?;
        Ok(Self { biomes, weighted })
    }

    /// Looks up a biome by name.
    pub fn get(&self, name: &str) -> EngineResult<&Biome> {
        self.biomes
            .iter()
            .find(|biome| biome.name == name)
            .ok_or_else(|| EngineError::UnknownBiome(name.to_string()))
    }

    /// All biome names in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.biomes.iter().map(|biome| biome.name).collect()
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// Draws one biome weighted by `selection_weight` (the card-open roll).
    pub fn sample_weighted(&self, rng: &mut impl Rng) -> &Biome {
        &self.biomes[*self.weighted.sample(rng)]
    }

    /// Draws one biome uniformly, ignoring weights (the exploration roll).
    pub fn sample_uniform(&self, rng: &mut impl Rng) -> &Biome {
        &self.biomes[rng.gen_range(0..self.biomes.len())]
    }
}
