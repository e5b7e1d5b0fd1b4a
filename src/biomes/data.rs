//! Biome data definitions.

use super::{Biome, BiomeBonus, Rarity};

/// Returns all biomes in the game in unlock-table order.
pub fn default_biomes() -> Vec<Biome> {
    vec![
        Biome {
            name: "Plains",
            rarity: Rarity::Common,
            selection_weight: 22.0,
            description: "Open grasslands with gentle hills and easy encounters.",
            structures: vec!["Village", "Windmill", "Abandoned Farm"],
            mobs: vec!["Zombie", "Skeleton", "Wolf"],
            chest_tiers: vec!["Common", "Rare"],
            bonus: BiomeBonus {
                xp: 2,
                coins: 5,
                drop_bonus_percent: 0,
            },
        },
        Biome {
            name: "Forest",
            rarity: Rarity::Common,
            selection_weight: 18.0,
            description: "Dense trees and hidden clearings. Watch for ambushes.",
            structures: vec!["Treehouse", "Ranger Camp", "Mossy Ruins"],
            mobs: vec!["Spider", "Zombie", "Witch"],
            chest_tiers: vec!["Common", "Rare"],
            bonus: BiomeBonus {
                xp: 3,
                coins: 5,
                drop_bonus_percent: 2,
            },
        },
        Biome {
            name: "Desert",
            rarity: Rarity::Uncommon,
            selection_weight: 12.0,
            description: "Harsh sands with buried secrets and temples.",
            structures: vec!["Desert Temple", "Oasis", "Sand Ruins", "Pillar Site"],
            mobs: vec!["Husk", "Scorpion", "Stray"],
            chest_tiers: vec!["Common", "Rare", "Epic"],
            bonus: BiomeBonus {
                xp: 4,
                coins: 10,
                drop_bonus_percent: 3,
            },
        },
        Biome {
            name: "Snow",
            rarity: Rarity::Uncommon,
            selection_weight: 11.0,
            description: "Frozen tundra with slippery terrain and cold-resistant foes.",
            structures: vec!["Igloo", "Ice Cavern", "Frost Tower"],
            mobs: vec!["Stray", "Polar Bear", "Ice Spirit"],
            chest_tiers: vec!["Common", "Rare", "Epic"],
            bonus: BiomeBonus {
                xp: 4,
                coins: 10,
                drop_bonus_percent: 4,
            },
        },
        Biome {
            name: "Jungle",
            rarity: Rarity::Rare,
            selection_weight: 8.0,
            description: "Overgrown greenery with rich ruins and agile predators.",
            structures: vec![
                "Jungle Ruins",
                "Overgrown Shrine",
                "Canopy Bridge",
                "Vine Labyrinth",
            ],
            mobs: vec!["Jaguar", "Poison Dart Frog", "Jungle Spider", "Vine Wraith"],
            chest_tiers: vec!["Rare", "Epic"],
            bonus: BiomeBonus {
                xp: 6,
                coins: 15,
                drop_bonus_percent: 6,
            },
        },
        Biome {
            name: "Cave",
            rarity: Rarity::Rare,
            selection_weight: 7.0,
            description: "Dark caverns filled with minerals and lurking horrors.",
            structures: vec!["Crystal Chamber", "Mine Shaft", "Stalagmite Hall"],
            mobs: vec!["Cave Spider", "Bat Swarm", "Endermite", "Wardenling"],
            chest_tiers: vec!["Rare", "Epic"],
            bonus: BiomeBonus {
                xp: 6,
                coins: 15,
                drop_bonus_percent: 6,
            },
        },
        Biome {
            name: "Volcano",
            rarity: Rarity::Epic,
            selection_weight: 4.0,
            description: "Molten peaks with dangerous flows and fiery guardians.",
            structures: vec!["Lava Fortress", "Basalt Keep", "Magma Fissure"],
            mobs: vec!["Fire Golem", "Blaze Captain", "Magma Slime"],
            chest_tiers: vec!["Epic", "Mythic"],
            bonus: BiomeBonus {
                xp: 8,
                coins: 25,
                drop_bonus_percent: 8,
            },
        },
        Biome {
            name: "Wasteland",
            rarity: Rarity::Epic,
            selection_weight: 4.0,
            description: "Desolate expanse where relics of war grant strange power.",
            structures: vec!["Ruined Bunker", "Ashen City", "Scorched Obelisk"],
            mobs: vec!["Mad Raider", "Toxic Ghoul", "Ash Wraith"],
            chest_tiers: vec!["Epic", "Mythic"],
            bonus: BiomeBonus {
                xp: 8,
                coins: 25,
                drop_bonus_percent: 8,
            },
        },
        Biome {
            name: "Skylands",
            rarity: Rarity::Rare,
            selection_weight: 7.0,
            description: "Floating isles with thin air and rare treasures.",
            structures: vec!["Cloud Temple", "Sky Bridge", "Aerial Nest"],
            mobs: vec!["Harpy", "Sky Serpent", "Gust Elemental"],
            chest_tiers: vec!["Rare", "Epic", "Mythic"],
            bonus: BiomeBonus {
                xp: 6,
                coins: 20,
                drop_bonus_percent: 5,
            },
        },
        Biome {
            name: "The Void",
            rarity: Rarity::Legendary,
            selection_weight: 2.0,
            description: "A reality fracture of whispers, shadows, and impossible loot.",
            structures: vec!["Void Castle", "Fracture Spire", "Endless Stair"],
            mobs: vec!["Phantom King", "Null Shade", "Entropy Warden"],
            chest_tiers: vec!["Mythic", "Legendary Void"],
            bonus: BiomeBonus {
                xp: 12,
                coins: 50,
                drop_bonus_percent: 12,
            },
        },
    ]
}
