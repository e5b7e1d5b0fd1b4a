//! Structure data definitions.

use super::Structure;

fn structure(
    key: &'static str,
    difficulty: u32,
    xp_bonus: u32,
    coins_bonus: u32,
    drop_bonus_percent: u32,
    description: &'static str,
) -> Structure {
    Structure {
        key,
        name: key,
        difficulty,
        xp_bonus,
        coins_bonus,
        drop_bonus_percent,
        description,
    }
}

/// Returns every structure, grouped by home biome.
pub fn default_structures() -> Vec<Structure> {
    vec![
        // Plains
        structure("Village", 1, 5, 10, 2, "Peaceful settlement with basic supplies."),
        structure("Windmill", 2, 4, 8, 1, "Grinding structure with stored grain."),
        structure("Abandoned Farm", 2, 6, 12, 2, "Overgrown fields with lingering loot."),
        // Forest
        structure("Treehouse", 3, 8, 15, 3, "Hidden canopy hideout."),
        structure("Ranger Camp", 2, 6, 10, 2, "Outpost with survival gear."),
        structure("Mossy Ruins", 3, 10, 18, 4, "Ancient stones reclaimed by nature."),
        // Desert
        structure("Desert Temple", 4, 15, 25, 5, "Sandstone monument guarding treasures."),
        structure("Oasis", 3, 10, 20, 3, "Life in the wasteland. Respite and rewards."),
        structure("Sand Ruins", 4, 12, 22, 4, "Half-buried remnants from lost age."),
        structure("Pillar Site", 3, 10, 18, 3, "Carved pillars with forgotten scripts."),
        // Snow
        structure("Igloo", 2, 8, 15, 2, "Cozy shelter with emergency caches."),
        structure("Ice Cavern", 4, 14, 24, 5, "Crystalline grotto hiding rare resources."),
        structure("Frost Tower", 5, 16, 28, 6, "Sentinel tower encased in eternal ice."),
        // Jungle
        structure("Jungle Ruins", 5, 18, 30, 6, "Vine-choked temples of ancient civilization."),
        structure("Overgrown Shrine", 5, 16, 28, 5, "Altar reclaimed by jungle, still potent."),
        structure("Canopy Bridge", 4, 14, 24, 4, "Rope and wood suspended high above."),
        structure("Vine Labyrinth", 6, 20, 32, 7, "Natural maze teeming with danger."),
        // Cave
        structure("Crystal Chamber", 6, 20, 35, 7, "Sparkling cavity with rich veins."),
        structure("Mine Shaft", 5, 16, 28, 6, "Abandoned mine with ore and echoes."),
        structure("Stalagmite Hall", 5, 18, 30, 6, "Grand cavern formation concealing caches."),
        // Volcano
        structure("Lava Fortress", 7, 25, 45, 8, "Basalt stronghold surrounded by molten flows."),
        structure("Basalt Keep", 7, 24, 42, 8, "Fire-resistant tower with forges."),
        structure("Magma Fissure", 6, 22, 40, 7, "Deep crack spewing lava and riches."),
        // Wasteland
        structure("Ruined Bunker", 7, 26, 48, 8, "Pre-collapse shelter with equipment."),
        structure("Ashen City", 8, 28, 50, 9, "Ghostly metropolis once thriving."),
        structure("Scorched Obelisk", 7, 25, 46, 8, "Monolith bearing dire warnings."),
        // Skylands
        structure("Cloud Temple", 6, 20, 36, 7, "Floating shrine among clouds."),
        structure("Sky Bridge", 5, 18, 32, 6, "Thin walkway crossing sky islands."),
        structure("Aerial Nest", 6, 22, 38, 7, "Harpy roost with looted trinkets."),
        // The Void
        structure("Void Castle", 10, 40, 80, 12, "Fortress suspended in timeless darkness."),
        structure("Fracture Spire", 9, 36, 70, 11, "Twisting tower that breaks reality."),
        structure("Endless Stair", 9, 38, 75, 12, "Staircase looping through paradoxes."),
    ]
}
