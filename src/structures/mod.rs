//! Structure entities and the structure catalog with per-biome pools.

mod data;

pub use data::default_structures;

use serde::Serialize;

use crate::biomes::default_biomes;
use crate::error::{EngineError, EngineResult};

/// A discoverable landmark granting flat bonuses when explored.
#[derive(Debug, Clone, Serialize)]
pub struct Structure {
    /// Unique key, also the catalog key.
    pub key: &'static str,
    pub name: &'static str,
    pub difficulty: u32,
    pub xp_bonus: u32,
    pub coins_bonus: u32,
    pub drop_bonus_percent: u32,
    pub description: &'static str,
}

/// Read-only registry of structures plus the per-biome pools.
#[derive(Debug, Clone)]
pub struct StructureCatalog {
    structures: Vec<Structure>,
    pools: Vec<(&'static str, Vec<&'static str>)>,
}

impl StructureCatalog {
    /// Builds the catalog from the shipped structure and biome data,
    /// verifying that every biome pool key resolves.
    pub fn new() -> EngineResult<Self> {
        let pools = default_biomes()
            .into_iter()
            .map(|biome| (biome.name, biome.structures))
            .collect();
        Self::from_parts(default_structures(), pools)
    }

    /// Builds a catalog from arbitrary structure data and pools.
    pub fn from_parts(
        structures: Vec<Structure>,
        pools: Vec<(&'static str, Vec<&'static str>)>,
    ) -> EngineResult<Self> {
        let catalog = Self { structures, pools };
        for (_, pool) in &catalog.pools {
            for key in pool {
                catalog.get(key)?;
            }
        }
        Ok(catalog)
    }

    /// Looks up a structure by key.
    pub fn get(&self, key: &str) -> EngineResult<&Structure> {
        self.structures
            .iter()
            .find(|structure| structure.key == key)
            .ok_or_else(|| EngineError::UnknownStructure(key.to_string()))
    }

    /// All structure keys in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.structures.iter().map(|structure| structure.key).collect()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// The ordered structure pool for one biome.
    pub fn pool(&self, biome: &str) -> EngineResult<&[&'static str]> {
        self.pools
            .iter()
            .find(|(name, _)| *name == biome)
            .map(|(_, pool)| pool.as_slice())
            .ok_or_else(|| EngineError::UnknownBiome(biome.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds_from_shipped_data() {
        let catalog = StructureCatalog::new().unwrap();
        assert_eq!(catalog.len(), 32);
    }

    #[test]
    fn test_get_known_structure() {
        let catalog = StructureCatalog::new().unwrap();
        let village = catalog.get("Village").unwrap();
        assert_eq!(village.difficulty, 1);
        assert_eq!(village.xp_bonus, 5);
        assert_eq!(village.coins_bonus, 10);
        assert_eq!(village.drop_bonus_percent, 2);
    }

    #[test]
    fn test_get_unknown_structure_fails() {
        let catalog = StructureCatalog::new().unwrap();
        let result = catalog.get("Castle");
        assert!(matches!(result, Err(EngineError::UnknownStructure(_))));
    }

    #[test]
    fn test_pool_matches_biome_declaration() {
        let catalog = StructureCatalog::new().unwrap();
        let pool = catalog.pool("Desert").unwrap();
        assert_eq!(pool, ["Desert Temple", "Oasis", "Sand Ruins", "Pillar Site"]);
    }

    #[test]
    fn test_dangling_pool_key_rejected_at_construction() {
        let result =
            StructureCatalog::from_parts(default_structures(), vec![("Plains", vec!["Castle"])]);
        assert!(matches!(result, Err(EngineError::UnknownStructure(_))));
    }
}
