//! Error types for the reward engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors produced by catalog lookups, table construction, and reward
/// resolution.
///
/// The `Unknown*` variants are user-facing ("unknown mob" replies in the
/// host bot); the table/weight variants indicate authored-data defects
/// and surface at catalog construction.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unknown biome name.
    #[error("unknown biome: {0}")]
    UnknownBiome(String),

    /// Unknown chest tier key.
    #[error("unknown chest tier: {0}")]
    UnknownChestTier(String),

    /// Unknown mob key.
    #[error("unknown mob: {0}")]
    UnknownMob(String),

    /// Unknown structure key.
    #[error("unknown structure: {0}")]
    UnknownStructure(String),

    /// A weighted table was built from an empty entry list.
    #[error("weighted table has no entries")]
    EmptyTable,

    /// A weighted table entry has a non-positive or non-finite weight.
    #[error("invalid weight {weight} for entry {entry}")]
    InvalidWeight { entry: String, weight: f64 },

    /// A loot table cannot be resolved (empty or zero total weight).
    #[error("invalid drop table: {0}")]
    InvalidDropTable(String),

    /// The player has no biome card to consume.
    #[error("no biome card available")]
    NoBiomeCard,
}
