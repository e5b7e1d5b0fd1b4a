//! Chest tier data definitions.

use super::{ChestTier, LootItem};

fn loot(name: &'static str, chance: f64, min_qty: u32, max_qty: u32) -> LootItem {
    LootItem {
        name,
        chance,
        min_qty,
        max_qty,
    }
}

/// Returns all chest tiers, cheapest first.
pub fn default_chest_tiers() -> Vec<ChestTier> {
    vec![
        ChestTier {
            key: "Common",
            display: "Common Chest",
            weight: 55.0,
            coins: (15, 45),
            xp: (5, 12),
            items: vec![
                loot("Wood", 25.0, 2, 6),
                loot("Stone", 20.0, 2, 5),
                loot("Leather", 18.0, 1, 3),
                loot("Small Potion", 15.0, 1, 2),
                loot("Copper Ore", 12.0, 1, 3),
                loot("Old Map Fragment", 10.0, 1, 1),
            ],
            notes: "Basic supplies and small boosts.",
        },
        ChestTier {
            key: "Rare",
            display: "Rare Chest",
            weight: 25.0,
            coins: (40, 110),
            xp: (10, 25),
            items: vec![
                loot("Iron Ingot", 22.0, 1, 3),
                loot("Healing Potion", 18.0, 1, 2),
                loot("Enchanted Leaf", 14.0, 1, 2),
                loot("Silver Ore", 14.0, 1, 3),
                loot("Traveler's Charm", 12.0, 1, 1),
                loot("Rare Map Fragment", 10.0, 1, 1),
            ],
            notes: "Better materials and utility items.",
        },
        ChestTier {
            key: "Epic",
            display: "Epic Chest",
            weight: 12.0,
            coins: (120, 260),
            xp: (25, 60),
            items: vec![
                loot("Gold Ingot", 22.0, 1, 3),
                loot("Elixir of Swiftness", 18.0, 1, 2),
                loot("Jungle Relic", 15.0, 1, 1),
                loot("Rune Stone", 15.0, 1, 2),
                loot("Obsidian Shard", 12.0, 1, 2),
                loot("Epic Map Fragment", 10.0, 1, 1),
            ],
            notes: "Valuable crafting and rare relics.",
        },
        ChestTier {
            key: "Mythic",
            display: "Mythic Chest",
            weight: 6.0,
            coins: (260, 520),
            xp: (60, 120),
            items: vec![
                loot("Diamond", 20.0, 1, 2),
                loot("Phoenix Feather", 18.0, 1, 1),
                loot("Magma Core", 15.0, 1, 1),
                loot("Void-Touched Gem", 12.0, 1, 1),
                loot("Ancient Rune", 12.0, 1, 2),
                loot("Mythic Map Fragment", 10.0, 1, 1),
            ],
            notes: "Top-tier mats and powerful curios.",
        },
        ChestTier {
            key: "Legendary Void",
            display: "Legendary Void Chest",
            weight: 2.0,
            coins: (600, 1200),
            xp: (120, 240),
            items: vec![
                loot("Void Crown", 12.0, 1, 1),
                loot("Entropy Crystal", 16.0, 1, 1),
                loot("Phantom Silk", 18.0, 1, 2),
                loot("Prismatic Core", 14.0, 1, 1),
                loot("Legendary Rune", 20.0, 1, 1),
                loot("Legendary Map Fragment", 10.0, 1, 1),
            ],
            notes: "Exclusive endgame items and high rewards.",
        },
    ]
}
