// Combat constants
pub const DEFAULT_PLAYER_ATTACK: u32 = 18;
pub const DEFAULT_PLAYER_HEALTH: u32 = 100;
/// Flat damage reduction applied to every mob hit.
pub const FLAT_PLAYER_DEFENSE: u32 = 5;

// Chest loot constants
pub const CHEST_DRAWS_MIN: u32 = 1;
pub const CHEST_DRAWS_MAX: u32 = 3;

// Exploration constants
pub const EXPLORE_CHESTS_MIN: u32 = 1;
pub const EXPLORE_CHESTS_MAX: u32 = 3;

// Admin card-grant clamp
pub const CARD_GRANT_MIN: u32 = 1;
pub const CARD_GRANT_MAX: u32 = 100;
