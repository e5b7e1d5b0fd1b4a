//! The inventory/economy boundary.
//!
//! Persistence of player cards, currency, XP, and items belongs to the
//! host bot. The engine only needs this narrow contract; the host must
//! guarantee that a consumed card and its reward land atomically
//! (at most one debit per successful open).

use std::collections::HashMap;

use crate::drops::ItemStack;

/// Contract the host's inventory service implements.
pub trait InventoryService {
    /// Consumes one biome card. Returns false when the player has none,
    /// in which case nothing was debited.
    fn consume_card(&mut self, user_id: u64) -> bool;

    /// Grants biome cards (shop purchases, admin gifts).
    fn grant_cards(&mut self, user_id: u64, amount: u32);

    fn add_currency(&mut self, user_id: u64, coins: u32);

    fn add_xp(&mut self, user_id: u64, xp: u32);

    fn add_items(&mut self, user_id: u64, items: &[ItemStack]);
}

/// HashMap-backed inventory, used by tests and handy for prototyping a
/// host bot. Not durable.
#[derive(Debug, Default)]
pub struct MemoryInventory {
    cards: HashMap<u64, u32>,
    coins: HashMap<u64, u64>,
    xp: HashMap<u64, u64>,
    items: HashMap<u64, Vec<ItemStack>>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self, user_id: u64) -> u32 {
        self.cards.get(&user_id).copied().unwrap_or(0)
    }

    pub fn coins(&self, user_id: u64) -> u64 {
        self.coins.get(&user_id).copied().unwrap_or(0)
    }

    pub fn xp(&self, user_id: u64) -> u64 {
        self.xp.get(&user_id).copied().unwrap_or(0)
    }

    pub fn items(&self, user_id: u64) -> &[ItemStack] {
        self.items.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl InventoryService for MemoryInventory {
    fn consume_card(&mut self, user_id: u64) -> bool {
        match self.cards.get_mut(&user_id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    fn grant_cards(&mut self, user_id: u64, amount: u32) {
        *self.cards.entry(user_id).or_insert(0) += amount;
    }

    fn add_currency(&mut self, user_id: u64, coins: u32) {
        *self.coins.entry(user_id).or_insert(0) += u64::from(coins);
    }

    fn add_xp(&mut self, user_id: u64, xp: u32) {
        *self.xp.entry(user_id).or_insert(0) += u64::from(xp);
    }

    fn add_items(&mut self, user_id: u64, items: &[ItemStack]) {
        self.items
            .entry(user_id)
            .or_default()
            .extend_from_slice(items);
    }
}
