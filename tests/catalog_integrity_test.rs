//! Integration test: catalog data integrity.
//!
//! The catalogs are authored literals, so these tests are the backstop
//! against data-entry mistakes: dangling pool keys, duplicate keys, and
//! malformed reward ranges.

use std::collections::HashSet;

use expedition::biomes::BiomeCatalog;
use expedition::chests::ChestCatalog;
use expedition::mobs::MobCatalog;
use expedition::structures::StructureCatalog;

// =========================================================================
// Pool round-trips: every pool key must resolve in its catalog
// =========================================================================

#[test]
fn test_every_biome_mob_pool_key_resolves() {
    let biomes = BiomeCatalog::new().unwrap();
    let mobs = MobCatalog::new().unwrap();
    for biome in biomes.keys() {
        let pool = mobs.pool(biome).unwrap();
        assert!(!pool.is_empty(), "biome {biome} has an empty mob pool");
        for key in pool {
            mobs.get(key)
                .unwrap_or_else(|_| panic!("biome {biome} references unknown mob {key}"));
        }
    }
}

#[test]
fn test_every_biome_structure_pool_key_resolves() {
    let biomes = BiomeCatalog::new().unwrap();
    let structures = StructureCatalog::new().unwrap();
    for biome in biomes.keys() {
        let pool = structures.pool(biome).unwrap();
        assert!(!pool.is_empty(), "biome {biome} has an empty structure pool");
        for key in pool {
            structures
                .get(key)
                .unwrap_or_else(|_| panic!("biome {biome} references unknown structure {key}"));
        }
    }
}

#[test]
fn test_every_biome_chest_tier_resolves() {
    let biomes = BiomeCatalog::new().unwrap();
    let chests = ChestCatalog::new().unwrap();
    for name in biomes.keys() {
        let biome = biomes.get(name).unwrap();
        assert!(!biome.chest_tiers.is_empty(), "biome {name} has no chest tiers");
        for key in &biome.chest_tiers {
            chests
                .get(key)
                .unwrap_or_else(|_| panic!("biome {name} references unknown tier {key}"));
        }
    }
}

// =========================================================================
// Key uniqueness
// =========================================================================

#[test]
fn test_catalog_keys_are_unique() {
    fn assert_unique(kind: &str, keys: Vec<&'static str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate {kind} key: {key}");
        }
    }

    assert_unique("biome", BiomeCatalog::new().unwrap().keys());
    assert_unique("chest tier", ChestCatalog::new().unwrap().keys());
    assert_unique("mob", MobCatalog::new().unwrap().keys());
    assert_unique("structure", StructureCatalog::new().unwrap().keys());
}

// =========================================================================
// Range and weight sanity
// =========================================================================

#[test]
fn test_chest_reward_ranges_are_well_formed() {
    let chests = ChestCatalog::new().unwrap();
    for key in chests.keys() {
        let tier = chests.get(key).unwrap();
        assert!(tier.coins.0 <= tier.coins.1, "{key} coin range inverted");
        assert!(tier.xp.0 <= tier.xp.1, "{key} xp range inverted");
        assert!(tier.weight > 0.0, "{key} must have positive weight");
        for item in &tier.items {
            assert!(item.chance > 0.0, "{key}/{} weight must be positive", item.name);
            assert!(
                item.min_qty >= 1 && item.min_qty <= item.max_qty,
                "{key}/{} quantity range malformed",
                item.name
            );
        }
    }
}

#[test]
fn test_biome_weights_and_bonuses_are_sane() {
    let biomes = BiomeCatalog::new().unwrap();
    for name in biomes.keys() {
        let biome = biomes.get(name).unwrap();
        assert!(biome.selection_weight > 0.0, "{name} weight must be positive");
        // Bonuses are u32 so non-negativity is structural; just pin the
        // legendary outlier so a data edit there gets noticed.
        if name == "The Void" {
            assert_eq!(biome.bonus.xp, 12);
            assert_eq!(biome.bonus.coins, 50);
            assert_eq!(biome.bonus.drop_bonus_percent, 12);
        }
    }
}
