//! Deterministic turn-based combat resolution.
//!
//! No randomness: the same mob and player stats always produce the same
//! outcome, so hosts can preview fights and tests can assert exact HP
//! values. Both sides always deal at least 1 damage per swing, which
//! bounds every fight by `mob.health + player.health` turns.

use serde::Serialize;

use crate::constants::{DEFAULT_PLAYER_ATTACK, DEFAULT_PLAYER_HEALTH, FLAT_PLAYER_DEFENSE};
use crate::mobs::Mob;

/// Attacker stats for the player side of a fight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerStats {
    pub attack: u32,
    pub health: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            attack: DEFAULT_PLAYER_ATTACK,
            health: DEFAULT_PLAYER_HEALTH,
        }
    }
}

/// Outcome of a simulated fight. HP fields are already clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatResult {
    pub won: bool,
    pub player_hp: u32,
    pub mob_hp: u32,
}

/// Runs the fight to completion and reports the outcome.
///
/// Each turn the player hits for `max(1, attack - mob.difficulty)`; a mob
/// reduced to zero HP dies before it can swing back. Otherwise the mob
/// hits for `max(1, mob.attack - FLAT_PLAYER_DEFENSE)`. The `max(1, _)`
/// floors guarantee strictly positive damage every swing, so the loop
/// terminates for any positive health values.
pub fn simulate_combat(mob: &Mob, player: PlayerStats) -> CombatResult {
    let player_damage = (player.attack.saturating_sub(mob.difficulty)).max(1);
    let mob_damage = (mob.attack.saturating_sub(FLAT_PLAYER_DEFENSE)).max(1);

    let mut mob_hp = mob.health;
    let mut player_hp = player.health;

    while mob_hp > 0 && player_hp > 0 {
        mob_hp = mob_hp.saturating_sub(player_damage);
        if mob_hp == 0 {
            break;
        }
        player_hp = player_hp.saturating_sub(mob_damage);
    }

    CombatResult {
        won: player_hp > 0,
        player_hp,
        mob_hp,
    }
}
