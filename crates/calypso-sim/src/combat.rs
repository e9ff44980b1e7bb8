//! Combat resolution: hit chance, damage routing, weak points and kills.
//!
//! Pure functions over component data. Callers own the bookkeeping
//! (rewards, kill counts, damage stats).

use rand::Rng;
use tracing::debug;

use calypso_ai::profiles::tier_profile;
use calypso_core::components::{Archetype, Boss, Enemy, ShieldUnit};
use calypso_core::constants::*;
use calypso_core::enums::EnemyTier;
use calypso_core::types::clamp_unit;

/// Where a hit ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// The shield pool soaked the hit; health untouched.
    ShieldAbsorbed { amount: f64 },
    /// Health took the hit. `killed` is set on the hit that drops it to zero.
    HealthDamage { amount: f64, killed: bool },
}

impl DamageOutcome {
    pub fn amount(&self) -> f64 {
        match *self {
            DamageOutcome::ShieldAbsorbed { amount } => amount,
            DamageOutcome::HealthDamage { amount, .. } => amount,
        }
    }

    pub fn killed(&self) -> bool {
        matches!(self, DamageOutcome::HealthDamage { killed: true, .. })
    }
}

/// Weak point hit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakPointOutcome {
    Damaged,
    /// Pool depleted; the shield generator is gone for good.
    Broken,
}

/// Base chance to land a bot shot on a target.
pub fn hit_chance(distance: f64, target_in_cover: bool, target_shielded: bool) -> f64 {
    let mut chance = (HIT_CHANCE_BASE - distance * HIT_CHANCE_FALLOFF).max(HIT_CHANCE_FLOOR);
    if target_in_cover {
        chance *= COVER_HIT_FACTOR;
    }
    if target_shielded {
        chance *= SHIELD_HIT_FACTOR;
    }
    chance
}

/// Roll a bot shot. `target_shielded` means an active shield with points left.
pub fn resolve_hit(
    distance: f64,
    target_in_cover: bool,
    target_shielded: bool,
    rng: &mut impl Rng,
) -> bool {
    rng.gen::<f64>() < hit_chance(distance, target_in_cover, target_shielded)
}

/// Route `nominal` damage to the shield pool first, then to health.
///
/// Only a fraction of the nominal damage lands while the shield absorbs.
/// The enemy is marked dead on the hit that empties its health.
pub fn apply_damage(enemy: &mut Enemy, archetype: &mut Archetype, nominal: f64) -> DamageOutcome {
    if let Some(shield) = archetype.shield_mut() {
        if shield.has_shield && shield.shield_hp > 0.0 {
            let amount = nominal * SHIELD_DAMAGE_FACTOR;
            shield.shield_hp = clamp_unit(shield.shield_hp - amount);
            return DamageOutcome::ShieldAbsorbed { amount };
        }
    }

    enemy.health = clamp_unit(enemy.health - nominal);
    let killed = enemy.alive && enemy.health <= 0.0;
    if killed {
        enemy.alive = false;
        debug!(index = enemy.index, tier = ?archetype.tier(), "enemy killed");
    }
    DamageOutcome::HealthDamage {
        amount: nominal,
        killed,
    }
}

/// Damage a shielded unit's weak point. Breaking it strips the shield
/// permanently, whatever is left in the shield pool.
pub fn damage_weak_point(unit: &mut ShieldUnit, amount: f64) -> WeakPointOutcome {
    unit.weak_point.hp = clamp_unit(unit.weak_point.hp - amount);
    if unit.weak_point.hp <= 0.0 {
        unit.has_shield = false;
        unit.shield_hp = 0.0;
        unit.regen_timer = 0.0;
        debug!(location = ?unit.weak_point.location, "weak point broken, shield stripped");
        WeakPointOutcome::Broken
    } else {
        WeakPointOutcome::Damaged
    }
}

/// Damage the boss through its current armor. Returns the health removed
/// and whether this hit killed it.
pub fn apply_boss_damage(boss: &mut Boss, nominal: f64) -> (f64, bool) {
    let effective = nominal * (1.0 - boss.armor_current);
    boss.health = clamp_unit(boss.health - effective);
    let killed = boss.alive && boss.health <= 0.0;
    if killed {
        boss.alive = false;
        debug!("boss killed");
    }
    (effective, killed)
}

/// Reward for killing a unit of the given tier.
pub fn kill_reward(tier: EnemyTier) -> f64 {
    tier_profile(tier).kill_reward
}
