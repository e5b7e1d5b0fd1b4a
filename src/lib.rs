//! Expedition - Chat-Bot Reward Engine
//!
//! The probabilistic reward core behind a chat-bot game economy: weighted
//! biome unlocks, tiered chest loot, mob combat, and exploration rolls.
//! Command dispatch, message rendering, and persistence live in the host
//! bot; this crate only computes outcomes from immutable catalog data and
//! a caller-supplied random source.

pub mod biomes;
pub mod chests;
pub mod combat;
pub mod constants;
pub mod drops;
pub mod engine;
pub mod error;
pub mod inventory;
pub mod mobs;
pub mod structures;
pub mod table;

pub use engine::{RewardEngine, RewardResult};
pub use error::{EngineError, EngineResult};
