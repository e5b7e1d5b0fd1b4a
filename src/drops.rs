//! Drop-table resolution.
//!
//! Two resolution models live here and they are NOT interchangeable:
//!
//! - Chest loot (`roll_chest_items`) is a COMPOUND draw: a fixed number
//!   of weighted picks from the tier's table, where `LootItem.chance` is
//!   a relative weight (the table does not need to total 100) and
//!   duplicate picks are kept.
//! - Mob drops (`roll_mob_drops`) are INDEPENDENT triggers: every entry
//!   rolls its own 0-100 chance, so zero, some, or all entries can land.
//!
//! Collapsing the two into one model changes the game's odds; keep them
//! separate.

use rand::Rng;
use serde::Serialize;

use crate::chests::{item_table, ChestTier};
use crate::constants::{CHEST_DRAWS_MAX, CHEST_DRAWS_MIN};
use crate::error::EngineResult;
use crate::mobs::Mob;

/// One granted stack of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    pub item: String,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: impl Into<String>, quantity: u32) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

/// Rolls the item contents of one chest.
///
/// Draws a count uniformly in `CHEST_DRAWS_MIN..=CHEST_DRAWS_MAX`, then
/// samples the tier's weighted item table once per draw with a uniform
/// quantity from the item's range. The returned list has exactly the
/// drawn length; duplicates are not merged.
pub fn roll_chest_items(tier: &ChestTier, rng: &mut impl Rng) -> EngineResult<Vec<ItemStack>> {
    let table = item_table(tier)?;
    let count = rng.gen_range(CHEST_DRAWS_MIN..=CHEST_DRAWS_MAX);
    let mut results = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let item = table.sample(rng);
        let quantity = rng.gen_range(item.min_qty..=item.max_qty);
        results.push(ItemStack::new(item.name, quantity));
    }
    Ok(results)
}

/// Rolls a defeated mob's drops.
///
/// Each entry triggers independently when a uniform draw in `[0, 100]`
/// lands at or under its chance. Result order follows the mob's drop
/// declaration order.
pub fn roll_mob_drops(mob: &Mob, rng: &mut impl Rng) -> Vec<ItemStack> {
    let mut results = Vec::new();
    for entry in &mob.drops {
        if rng.gen_range(0.0..=100.0) <= entry.chance {
            let quantity = rng.gen_range(entry.min_qty..=entry.max_qty);
            results.push(ItemStack::new(entry.item, quantity));
        }
    }
    results
}
