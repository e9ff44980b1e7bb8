//! Observation encoder: serializes the world into the 96-slot vector.
//!
//! Only living entities are encoded. Enemy slots are filled from the
//! roster in insertion order; fields the mock world does not model keep
//! their neutral defaults.

use std::f64::consts::PI;

use hecs::World;

use calypso_ai::profiles::tier_profile;
use calypso_core::components::Bot;
use calypso_core::constants::*;
use calypso_core::enums::{AreaType, BossState, RiflemanRole};
use calypso_core::observation::{EnemySlot, Observation, ObservationBuilder, SelfState};
use calypso_core::types::Position;

use crate::engine::SimConfig;
use crate::episode::{EnemyView, Episode, Roster};

/// Build the observation for the current world state.
pub fn encode(
    world: &World,
    roster: &Roster,
    bot: &Bot,
    episode: &Episode,
    config: &SimConfig,
) -> Observation {
    let enemies = roster.living_enemies(world);
    let mut builder = ObservationBuilder::default();

    builder.self_state = SelfState {
        health: bot.health,
        armor: bot.armor,
        ammo_primary: bot.ammo,
        ammo_secondary: 0.0,
        pos_x: bot.position.x,
        pos_y: bot.position.y,
        pos_z: 0.5,
        in_cover: flag(bot.in_cover),
        time_since_damage: 0.5,
        current_tier: f64::from(config.initial_tier) / TIER_CODE_SCALE,
        alarm_level: f64::from(config.alarm_level) / 3.0,
        area_type: f64::from(config.area_type.code()) / 2.0,
        combat_phase: (episode.time_since_alarm / COMBAT_PHASE_SECS).min(1.0),
        ..SelfState::default()
    };

    for (slot, enemy) in builder.enemies.iter_mut().zip(&enemies) {
        *slot = enemy_slot(enemy, &bot.position);
    }

    let hazard = roster
        .living_mines(world)
        .iter()
        .map(|(_, position)| 1.0 - bot.position.distance_to(position))
        .fold(0.0, f64::max);
    let boss = roster.living_boss(world).map(|(boss, _)| boss);

    let env = &mut builder.environment;
    env.hazard_proximity = hazard;
    env.boss_phase = boss.as_ref().map_or(0.0, |b| boss_phase(b.state));
    env.shielded_count = headcount(&enemies, |e| e.has_shield);
    env.flank_route = if config.area_type == AreaType::Wide {
        1.0
    } else {
        0.5
    };

    let tactical = &mut builder.tactical;
    tactical.suppression_threat =
        headcount(&enemies, |e| e.role == Some(RiflemanRole::Suppression));
    tactical.flank_threat = headcount(&enemies, |e| e.role == Some(RiflemanRole::Flanker));
    tactical.explosive_threat = hazard;
    tactical.boss_stun_window = flag(boss.as_ref().is_some_and(|b| b.is_stunned()));
    tactical.player_skill = config.player_skill;

    builder.build()
}

fn enemy_slot(enemy: &EnemyView, bot: &Position) -> EnemySlot {
    let dist = bot.distance_to(&enemy.position);
    let threat = tier_profile(enemy.tier).base_threat + if enemy.has_shield { 0.2 } else { 0.0 };

    EnemySlot {
        distance: dist.min(1.0),
        angle: bot.angle_to(&enemy.position) / PI,
        health_estimate: enemy.health,
        visible: flag(dist < VISIBILITY_RANGE),
        in_cover: flag(enemy.in_cover),
        threat: threat.min(1.0),
        closing_velocity: 0.0,
        aiming_at_me: flag(enemy.aiming),
        tier: f64::from(enemy.tier.code()) / TIER_CODE_SCALE,
        has_shield: flag(enemy.has_shield),
        shield_hp: enemy.shield_hp,
        weapon: f64::from(enemy.weapon.code()) / WEAPON_CODE_SCALE,
    }
}

fn headcount(enemies: &[EnemyView], pred: impl Fn(&EnemyView) -> bool) -> f64 {
    enemies.iter().filter(|e| pred(e)).count() as f64 / HEADCOUNT_SCALE
}

/// Coarse boss phase. A stunned boss reads as walking.
fn boss_phase(state: BossState) -> f64 {
    match state {
        BossState::Walking | BossState::Stunned => 0.33,
        BossState::HammerCombo { .. } | BossState::Leap => 0.66,
        BossState::Defense => 1.0,
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
