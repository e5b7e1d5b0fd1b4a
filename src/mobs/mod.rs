//! Mob entities and the mob catalog with per-biome pools.
//!
//! Mob drop `chance` values are independent percentages: each drop entry
//! rolls on its own against a uniform 0-100 draw, so any subset of a
//! mob's drops can trigger in one kill. Chest loot uses relative weights
//! instead; the two models are intentionally different (see `drops.rs`).

mod data;

pub use data::default_mobs;

use serde::Serialize;

use crate::biomes::{default_biomes, Rarity};
use crate::error::{EngineError, EngineResult};

/// One independently-rolled drop entry.
#[derive(Debug, Clone, Serialize)]
pub struct MobDrop {
    pub item: &'static str,
    /// Independent trigger percentage in 0-100.
    pub chance: f64,
    pub min_qty: u32,
    pub max_qty: u32,
}

/// A fightable creature.
#[derive(Debug, Clone, Serialize)]
pub struct Mob {
    /// Unique key, also the catalog key.
    pub key: &'static str,
    pub name: &'static str,
    /// Rarity of the biomes this mob haunts.
    pub rarity: Rarity,
    pub attack: u32,
    pub health: u32,
    /// 1-10; doubles as the mob's defense in combat.
    pub difficulty: u32,
    /// Cosmetic only; not consumed by the simulation.
    pub abilities: Vec<&'static str>,
    pub drops: Vec<MobDrop>,
}

/// Read-only registry of mobs plus the per-biome encounter pools.
#[derive(Debug, Clone)]
pub struct MobCatalog {
    mobs: Vec<Mob>,
    pools: Vec<(&'static str, Vec<&'static str>)>,
}

impl MobCatalog {
    /// Builds the catalog from the shipped mob and biome data, verifying
    /// that every biome pool key resolves to a real mob.
    pub fn new() -> EngineResult<Self> {
        let pools = default_biomes()
            .into_iter()
            .map(|biome| (biome.name, biome.mobs))
            .collect();
        Self::from_parts(default_mobs(), pools)
    }

    /// Builds a catalog from arbitrary mob data and pools.
    pub fn from_parts(
        mobs: Vec<Mob>,
        pools: Vec<(&'static str, Vec<&'static str>)>,
    ) -> EngineResult<Self> {
        let catalog = Self { mobs, pools };
        for (_, pool) in &catalog.pools {
            for key in pool {
                catalog.get(key)?;
            }
        }
        Ok(catalog)
    }

    /// Looks up a mob by key.
    pub fn get(&self, key: &str) -> EngineResult<&Mob> {
        self.mobs
            .iter()
            .find(|mob| mob.key == key)
            .ok_or_else(|| EngineError::UnknownMob(key.to_string()))
    }

    /// All mob keys in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.mobs.iter().map(|mob| mob.key).collect()
    }

    pub fn len(&self) -> usize {
        self.mobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobs.is_empty()
    }

    /// The ordered mob pool for one biome.
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
        let catalog = MobCatalog::new().unwrap();
        assert_eq!(catalog.len(), 30);
    }

    #[test]
    fn test_get_known_mob() {
        let catalog = MobCatalog::new().unwrap();
        let zombie = catalog.get("Zombie").unwrap();
        assert_eq!(zombie.attack, 6);
        assert_eq!(zombie.health, 30);
        assert_eq!(zombie.difficulty, 2);
        assert_eq!(zombie.rarity, Rarity::Common);
    }

    #[test]
    fn test_get_unknown_mob_fails() {
        let catalog = MobCatalog::new().unwrap();
        let result = catalog.get("Dragon");
        assert!(matches!(result, Err(EngineError::UnknownMob(_))));
    }

    #[test]
    fn test_pool_for_unknown_biome_fails() {
        let catalog = MobCatalog::new().unwrap();
        let result = catalog.pool("Atlantis");
        assert!(matches!(result, Err(EngineError::UnknownBiome(_))));
    }

    #[test]
    fn test_pool_preserves_biome_declaration_order() {
        let catalog = MobCatalog::new().unwrap();
        let pool = catalog.pool("Plains").unwrap();
        assert_eq!(pool, ["Zombie", "Skeleton", "Wolf"]);
    }

    #[test]
    fn test_dangling_pool_key_rejected_at_construction() {
        let result = MobCatalog::from_parts(default_mobs(), vec![("Plains", vec!["Dragon"])]);
        assert!(matches!(result, Err(EngineError::UnknownMob(_))));
    }

    #[test]
    fn test_difficulty_stays_in_band() {
        let catalog = MobCatalog::new().unwrap();
        for key in catalog.keys() {
            let mob = catalog.get(key).unwrap();
            assert!(
                (1..=10).contains(&mob.difficulty),
                "{key} difficulty {} out of band",
                mob.difficulty
            );
            assert!(mob.health > 0, "{key} must have positive health");
        }
    }

    #[test]
    fn test_drop_chances_are_percentages() {
        let catalog = MobCatalog::new().unwrap();
        for key in catalog.keys() {
            for drop in &catalog.get(key).unwrap().drops {
                assert!(
                    drop.chance > 0.0 && drop.chance <= 100.0,
                    "{key} drop {} chance {}",
                    drop.item,
                    drop.chance
                );
                assert!(
                    drop.min_qty >= 1 && drop.min_qty <= drop.max_qty,
                    "{key} drop {} has malformed quantity range",
                    drop.item
                );
            }
        }
    }
}
