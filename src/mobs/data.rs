//! Mob data definitions.
//!
//! Stat bands by rarity: Common sits around 5-7 attack / 26-30 HP /
//! difficulty 2-3, Uncommon 9-11 / 36-42 / 4-5, Rare 12-14 / 55-60 / 6,
//! Epic 19-22 / 105-120 / 8, Legendary 26-30 / 180-200 / 9-10.

use super::{Mob, MobDrop};
use crate::biomes::Rarity;

fn drop(item: &'static str, chance: f64, min_qty: u32, max_qty: u32) -> MobDrop {
    MobDrop {
        item,
        chance,
        min_qty,
        max_qty,
    }
}

fn mob(
    key: &'static str,
    rarity: Rarity,
    attack: u32,
    health: u32,
    difficulty: u32,
    abilities: Vec<&'static str>,
    drops: Vec<MobDrop>,
) -> Mob {
    Mob {
        key,
        name: key,
        rarity,
        attack,
        health,
        difficulty,
        abilities,
        drops,
    }
}

/// Returns every fightable mob, grouped by rarity.
pub fn default_mobs() -> Vec<Mob> {
    use Rarity::*;

    vec![
        // Common
        mob(
            "Zombie",
            Common,
            6,
            30,
            2,
            vec!["Infectious Swipe"],
            vec![drop("Rotten Flesh", 45.0, 1, 3), drop("Copper Coin", 30.0, 2, 6)],
        ),
        mob(
            "Skeleton",
            Common,
            7,
            28,
            3,
            vec!["Piercing Arrow"],
            vec![drop("Bone", 50.0, 1, 3), drop("Arrow", 30.0, 3, 6)],
        ),
        mob(
            "Spider",
            Common,
            5,
            26,
            3,
            vec!["Web Snare"],
            vec![drop("Silk", 40.0, 1, 2), drop("Venom Gland", 20.0, 1, 1)],
        ),
        mob(
            "Wolf",
            Common,
            7,
            29,
            3,
            vec!["Savage Bite"],
            vec![drop("Wolf Pelt", 40.0, 1, 1), drop("Sharp Fang", 25.0, 1, 2)],
        ),
        mob(
            "Witch",
            Common,
            6,
            27,
            3,
            vec!["Hex Bolt"],
            vec![drop("Glass Vial", 35.0, 1, 2), drop("Spell Page", 15.0, 1, 1)],
        ),
        // Uncommon
        mob(
            "Husk",
            Uncommon,
            9,
            40,
            4,
            vec!["Sand Daze"],
            vec![drop("Dried Husk", 40.0, 1, 2), drop("Iron Scrap", 18.0, 1, 2)],
        ),
        mob(
            "Stray",
            Uncommon,
            10,
            42,
            4,
            vec!["Frostbite"],
            vec![drop("Frost Arrow", 30.0, 2, 4), drop("Ice Shard", 20.0, 1, 2)],
        ),
        mob(
            "Scorpion",
            Uncommon,
            11,
            36,
            5,
            vec!["Poison Sting"],
            vec![drop("Scorpion Tail", 25.0, 1, 1), drop("Chitin", 35.0, 1, 2)],
        ),
        mob(
            "Polar Bear",
            Uncommon,
            11,
            42,
            5,
            vec!["Crushing Maul"],
            vec![drop("Thick Fur", 40.0, 1, 2), drop("Bear Claw", 20.0, 1, 2)],
        ),
        mob(
            "Ice Spirit",
            Uncommon,
            9,
            38,
            4,
            vec!["Chilling Wail"],
            vec![drop("Ice Shard", 35.0, 1, 2), drop("Spirit Essence", 15.0, 1, 1)],
        ),
        // Rare
        mob(
            "Jaguar",
            Rare,
            14,
            60,
            6,
            vec!["Pounce", "Bleed"],
            vec![drop("Jaguar Pelt", 35.0, 1, 1), drop("Fang", 20.0, 1, 2)],
        ),
        mob(
            "Cave Spider",
            Rare,
            13,
            55,
            6,
            vec!["Poison Bite"],
            vec![drop("Toxic Silk", 30.0, 1, 2), drop("Glow Sac", 18.0, 1, 1)],
        ),
        mob(
            "Harpy",
            Rare,
            12,
            58,
            6,
            vec!["Screech"],
            vec![drop("Feather", 38.0, 2, 4), drop("Wind Essence", 15.0, 1, 1)],
        ),
        mob(
            "Poison Dart Frog",
            Rare,
            12,
            55,
            6,
            vec!["Toxin Burst"],
            vec![drop("Poison Sac", 30.0, 1, 1), drop("Bright Skin", 25.0, 1, 2)],
        ),
        mob(
            "Jungle Spider",
            Rare,
            13,
            56,
            6,
            vec!["Venom Lunge"],
            vec![drop("Toxic Silk", 32.0, 1, 2), drop("Fang", 18.0, 1, 2)],
        ),
        mob(
            "Vine Wraith",
            Rare,
            14,
            60,
            6,
            vec!["Strangling Vines"],
            vec![drop("Living Vine", 30.0, 1, 2), drop("Wraith Dust", 15.0, 1, 1)],
        ),
        mob(
            "Bat Swarm",
            Rare,
            12,
            55,
            6,
            vec!["Deafening Flutter"],
            vec![drop("Bat Wing", 40.0, 2, 4), drop("Echo Gland", 12.0, 1, 1)],
        ),
        mob(
            "Endermite",
            Rare,
            13,
            58,
            6,
            vec!["Phase Nibble"],
            vec![drop("Ender Mote", 25.0, 1, 2), drop("Chitin", 30.0, 1, 2)],
        ),
        mob(
            "Wardenling",
            Rare,
            14,
            60,
            6,
            vec!["Sonic Pulse"],
            vec![drop("Echo Shard", 22.0, 1, 1), drop("Dark Sinew", 28.0, 1, 2)],
        ),
        mob(
            "Sky Serpent",
            Rare,
            14,
            60,
            6,
            vec!["Tail Whip"],
            vec![drop("Serpent Scale", 35.0, 1, 2), drop("Wind Essence", 15.0, 1, 1)],
        ),
        mob(
            "Gust Elemental",
            Rare,
            12,
            56,
            6,
            vec!["Cyclone Spin"],
            vec![drop("Wind Essence", 30.0, 1, 2), drop("Storm Pearl", 10.0, 1, 1)],
        ),
        // Epic
        mob(
            "Fire Golem",
            Epic,
            22,
            120,
            8,
            vec!["Lava Slam", "Burning Aura"],
            vec![drop("Magma Core", 28.0, 1, 1), drop("Charred Plate", 22.0, 1, 2)],
        ),
        mob(
            "Blaze Captain",
            Epic,
            20,
            110,
            8,
            vec!["Flame Volley"],
            vec![drop("Blaze Rod", 30.0, 1, 2), drop("Cinder", 20.0, 2, 4)],
        ),
        mob(
            "Ash Wraith",
            Epic,
            19,
            105,
            8,
            vec!["Smoke Veil", "Life Drain"],
            vec![drop("Wraith Dust", 25.0, 1, 2), drop("Ashen Cloth", 25.0, 1, 2)],
        ),
        mob(
            "Magma Slime",
            Epic,
            19,
            105,
            8,
            vec!["Molten Split"],
            vec![drop("Magma Gel", 35.0, 1, 2), drop("Cinder", 25.0, 2, 4)],
        ),
        mob(
            "Mad Raider",
            Epic,
            20,
            108,
            8,
            vec!["Reckless Charge"],
            vec![drop("Scrap Metal", 35.0, 1, 3), drop("War Trophy", 15.0, 1, 1)],
        ),
        mob(
            "Toxic Ghoul",
            Epic,
            19,
            106,
            8,
            vec!["Noxious Grasp"],
            vec![drop("Toxin Gland", 28.0, 1, 2), drop("Tattered Rags", 30.0, 1, 2)],
        ),
        // Legendary
        mob(
            "Phantom King",
            Legendary,
            30,
            200,
            10,
            vec!["Void Rift", "Phantom Lance"],
            vec![drop("Void Crown", 10.0, 1, 1), drop("Phantom Silk", 30.0, 1, 2)],
        ),
        mob(
            "Null Shade",
            Legendary,
            26,
            180,
            9,
            vec!["Phase Shift"],
            vec![drop("Entropy Crystal", 12.0, 1, 1), drop("Shadow Fragment", 22.0, 1, 2)],
        ),
        mob(
            "Entropy Warden",
            Legendary,
            28,
            190,
            10,
            vec!["Decay Field", "Null Grasp"],
            vec![drop("Entropy Crystal", 12.0, 1, 1), drop("Warden Sigil", 15.0, 1, 1)],
        ),
    ]
}
