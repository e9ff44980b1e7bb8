//! Archetype stat tables.
//!
//! Consolidates per-tier parameters and weapon magazines. Raw health and shield
//! values are kept for reference; every pool is normalized to 1.0 at spawn.

use calypso_core::enums::{EnemyTier, ShieldVariant, WeaponType};

/// Static stats for an enemy tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProfile {
    /// Raw hit points; the normalizer for the health pool.
    pub max_health: f64,
    pub armor: f64,
    pub accuracy: f64,
    /// Reward for bringing a unit of this tier to zero health.
    pub kill_reward: f64,
    /// Observation threat estimate before shield bonus.
    pub base_threat: f64,
}

/// Get the stat profile for a tier.
pub fn tier_profile(tier: EnemyTier) -> TierProfile {
    use calypso_core::constants::*;

    match tier {
        EnemyTier::Tier1 => TierProfile {
            max_health: 100.0,
            armor: 0.10,
            accuracy: 0.15,
            kill_reward: KILL_REWARD_TIER_1,
            base_threat: 0.2,
        },
        EnemyTier::Tier2 => TierProfile {
            max_health: 150.0,
            armor: 0.25,
            accuracy: 0.40,
            kill_reward: KILL_REWARD_TIER_2,
            base_threat: 0.5,
        },
        EnemyTier::Marksman => TierProfile {
            max_health: 50.0,
            armor: 0.0,
            accuracy: 0.70,
            kill_reward: KILL_REWARD_MARKSMAN,
            base_threat: 0.7,
        },
        EnemyTier::Shielded => TierProfile {
            max_health: 150.0,
            armor: 0.25,
            accuracy: 0.35,
            kill_reward: KILL_REWARD_SHIELDED,
            base_threat: 0.6,
        },
        EnemyTier::Boss => TierProfile {
            max_health: 1000.0,
            armor: BOSS_ARMOR,
            accuracy: 0.90,
            kill_reward: KILL_REWARD_BOSS,
            base_threat: 0.0,
        },
    }
}

/// Rounds in a full magazine.
pub fn magazine_size(weapon: WeaponType) -> u32 {
    match weapon {
        WeaponType::None => 0,
        WeaponType::HgPistol => 7,
        WeaponType::Smg => 15,
        WeaponType::ArBurst => 30,
        WeaponType::SgShotgun => 8,
        WeaponType::Dmr => 4,
        WeaponType::EnergyPistol => 20,
        WeaponType::KineticHammer => 999,
    }
}

/// Tier 1 loadout draw: 70% pistol, 30% SMG.
pub fn grunt_weapon(roll: f64) -> WeaponType {
    if roll < 0.70 {
        WeaponType::HgPistol
    } else {
        WeaponType::Smg
    }
}

/// Raw shield points for a generator variant.
pub fn shield_capacity(variant: ShieldVariant) -> f64 {
    use calypso_core::constants::{IRON_CLAD_SHIELD_RAW_HP, PLASMA_SHIELD_RAW_HP};

    match variant {
        ShieldVariant::Plasma => PLASMA_SHIELD_RAW_HP,
        ShieldVariant::IronClad => IRON_CLAD_SHIELD_RAW_HP,
    }
}
