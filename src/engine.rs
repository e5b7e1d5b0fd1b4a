//! The reward orchestrator.
//!
//! [`RewardEngine`] composes the catalogs, the drop resolver, and the
//! combat simulator into the four player-facing operations. Every
//! operation is a pure computation over the immutable catalogs plus the
//! caller's RNG, so concurrent requests need no locking; only
//! `open_biome` touches the inventory boundary, and only to consume the
//! card and credit the unlock bonus.

use rand::Rng;
use serde::Serialize;

use crate::biomes::{Biome, BiomeCatalog};
use crate::chests::{ChestCatalog, ChestTier};
use crate::combat::{simulate_combat, CombatResult, PlayerStats};
use crate::constants::{CARD_GRANT_MAX, CARD_GRANT_MIN, EXPLORE_CHESTS_MAX, EXPLORE_CHESTS_MIN};
use crate::drops::{roll_chest_items, roll_mob_drops, ItemStack};
use crate::error::{EngineError, EngineResult};
use crate::inventory::InventoryService;
use crate::mobs::{Mob, MobCatalog};
use crate::structures::{Structure, StructureCatalog};

/// Outcome of one player-facing operation, ready for the host to render.
#[derive(Debug, Clone, Serialize)]
pub enum RewardResult {
    /// A biome card was consumed and a biome revealed.
    BiomeOpened { biome: Biome, xp: u32, coins: u32 },
    /// A chest of the named tier was opened.
    ChestOpened {
        tier: ChestTier,
        coins: u32,
        xp: u32,
        items: Vec<ItemStack>,
    },
    /// A mob was fought; drops are empty on a loss.
    MobFought {
        mob: Mob,
        outcome: CombatResult,
        drops: Vec<ItemStack>,
    },
    /// An exploration roll. Chest contents and combat stay unresolved
    /// until the player follows up with `open_chest` / `fight_mob`.
    Explored {
        biome: Biome,
        structure: Structure,
        mob: Mob,
        chests: Vec<ChestTier>,
    },
}

/// Composes the four catalogs and answers the player-facing operations.
pub struct RewardEngine {
    biomes: BiomeCatalog,
    chests: ChestCatalog,
    mobs: MobCatalog,
    structures: StructureCatalog,
}

impl RewardEngine {
    /// Builds the engine from the shipped catalogs. Fails if any catalog
    /// data is malformed, so data defects surface at startup rather than
    /// mid-command.
    pub fn new() -> EngineResult<Self> {
        Ok(Self {
            biomes: BiomeCatalog::new()?,
            chests: ChestCatalog::new()?,
            mobs: MobCatalog::new()?,
            structures: StructureCatalog::new()?,
        })
    }

    pub fn biomes(&self) -> &BiomeCatalog {
        &self.biomes
    }

    pub fn chests(&self) -> &ChestCatalog {
        &self.chests
    }

    pub fn mobs(&self) -> &MobCatalog {
        &self.mobs
    }

    pub fn structures(&self) -> &StructureCatalog {
        &self.structures
    }

    /// Opens a biome card: consumes one card, reveals a biome weighted by
    /// `selection_weight`, and credits the unlock bonus.
    ///
    /// Fails with [`EngineError::NoBiomeCard`] (and grants nothing) when
    /// the inventory reports no card.
    pub fn open_biome(
        &self,
        inventory: &mut impl InventoryService,
        user_id: u64,
        rng: &mut impl Rng,
    ) -> EngineResult<RewardResult> {
        if !inventory.consume_card(user_id) {
            return Err(EngineError::NoBiomeCard);
        }
        let biome = self.biomes.sample_weighted(rng);
        let xp = biome.bonus.xp;
        let coins = biome.bonus.coins;
        inventory.add_xp(user_id, xp);
        inventory.add_currency(user_id, coins);
        Ok(RewardResult::BiomeOpened {
            biome: biome.clone(),
            xp,
            coins,
        })
    }

    /// Opens a chest of the named tier: uniform coins and XP from the
    /// tier's ranges, items from the compound drop roll.
    pub fn open_chest(&self, tier_key: &str, rng: &mut impl Rng) -> EngineResult<RewardResult> {
        let tier = self.chests.get(tier_key)?;
        let coins = rng.gen_range(tier.coins.0..=tier.coins.1);
        let xp = rng.gen_range(tier.xp.0..=tier.xp.1);
        let items = roll_chest_items(tier, rng)?;
        Ok(RewardResult::ChestOpened {
            tier: tier.clone(),
            coins,
            xp,
            items,
        })
    }

    /// Fights the named mob with the given player stats. Drops roll only
    /// on a win.
    pub fn fight_mob(
        &self,
        mob_key: &str,
        player: PlayerStats,
        rng: &mut impl Rng,
    ) -> EngineResult<RewardResult> {
        let mob = self.mobs.get(mob_key)?;
        let outcome = simulate_combat(mob, player);
        let drops = if outcome.won {
            roll_mob_drops(mob, rng)
        } else {
            Vec::new()
        };
        Ok(RewardResult::MobFought {
            mob: mob.clone(),
            outcome,
            drops,
        })
    }

    /// Rolls an exploration: a uniformly chosen biome (NOT weighted by
    /// rarity), one structure and one mob uniform from that biome's
    /// pools, and 1-3 chest tiers uniform with replacement from the full
    /// tier list.
    pub fn explore(&self, rng: &mut impl Rng) -> EngineResult<RewardResult> {
        let biome = self.biomes.sample_uniform(rng).clone();

        let structure_pool = self.structures.pool(biome.name)?;
        let structure_key = structure_pool[rng.gen_range(0..structure_pool.len())];
        let structure = self.structures.get(structure_key)?.clone();

        let mob_pool = self.mobs.pool(biome.name)?;
        let mob_key = mob_pool[rng.gen_range(0..mob_pool.len())];
        let mob = self.mobs.get(mob_key)?.clone();

        let count = rng.gen_range(EXPLORE_CHESTS_MIN..=EXPLORE_CHESTS_MAX);
        let mut chests = Vec::with_capacity(count as usize);
        for _ in 0..count {
            chests.push(self.chests.sample_uniform(rng).clone());
        }

        Ok(RewardResult::Explored {
            biome,
            structure,
            mob,
            chests,
        })
    }

    /// Grants biome cards through the inventory boundary, clamping the
    /// amount to the admin limits.
    pub fn grant_cards(
        &self,
        inventory: &mut impl InventoryService,
        user_id: u64,
        amount: u32,
    ) -> u32 {
        let granted = amount.clamp(CARD_GRANT_MIN, CARD_GRANT_MAX);
        inventory.grant_cards(user_id, granted);
        granted
    }
}
