//! Entity spawn factories for the simulation world.
//!
//! Every enemy is spawned as `(Enemy, Position, Archetype)` and appended
//! to the roster; mines and the boss get their own bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use calypso_ai::profiles::{grunt_weapon, magazine_size, tier_profile};
use calypso_core::components::*;
use calypso_core::constants::*;
use calypso_core::enums::*;
use calypso_core::types::Position;

use crate::engine::SimConfig;
use crate::episode::Roster;

/// Fresh bot at the arena center with full health and magazine.
pub fn new_bot() -> Bot {
    Bot {
        health: 1.0,
        armor: BOT_START_ARMOR,
        ammo: 1.0,
        position: Position::new(BOT_START_X, BOT_START_Y),
        in_cover: false,
        kills: 0,
    }
}

/// Spawn the opening composition for the configured tier, plus the boss.
pub fn setup_episode(
    world: &mut World,
    roster: &mut Roster,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
) {
    match config.initial_tier {
        1 => {
            let count = rng.gen_range(GRUNT_WAVE_MIN..=GRUNT_WAVE_MAX);
            for _ in 0..count {
                spawn_grunt(world, roster, rng);
            }
        }
        _ => {
            for _ in 0..TIER_2_SHIELDED_COUNT {
                spawn_shielded(world, roster, rng, ShieldVariant::Plasma);
            }
            for _ in 0..TIER_2_SUPPRESSION_COUNT {
                spawn_rifleman(world, roster, rng, RiflemanRole::Suppression);
            }
            for _ in 0..TIER_2_FLANKER_COUNT {
                spawn_rifleman(world, roster, rng, RiflemanRole::Flanker);
            }
        }
    }

    if config.enable_boss {
        spawn_boss(world, roster);
    }
}

fn base_enemy(roster: &Roster, tier: EnemyTier, weapon: WeaponType, in_cover: bool) -> Enemy {
    let profile = tier_profile(tier);
    Enemy {
        index: roster.enemies.len(),
        health: 1.0,
        armor: profile.armor,
        accuracy: profile.accuracy,
        weapon,
        ammo: magazine_size(weapon),
        in_cover,
        alive: true,
    }
}

fn push_enemy(
    world: &mut World,
    roster: &mut Roster,
    enemy: Enemy,
    position: Position,
    archetype: Archetype,
) -> Entity {
    debug!(
        index = enemy.index,
        tier = ?archetype.tier(),
        x = position.x,
        y = position.y,
        "enemy spawned"
    );
    let entity = world.spawn((enemy, position, archetype));
    roster.enemies.push(entity);
    entity
}

/// Tier 1 grunt: pistol or SMG, anywhere in the middle of the arena.
pub fn spawn_grunt(world: &mut World, roster: &mut Roster, rng: &mut ChaCha8Rng) -> Entity {
    let weapon = grunt_weapon(rng.gen::<f64>());
    let position = Position::new(rng.gen_range(0.2..0.8), rng.gen_range(0.2..0.8));
    let enemy = base_enemy(roster, EnemyTier::Tier1, weapon, false);
    push_enemy(world, roster, enemy, position, Archetype::Grunt(GruntMind::default()))
}

/// Tier 2 rifleman. Suppression carries the AR, flankers the shotgun.
pub fn spawn_rifleman(
    world: &mut World,
    roster: &mut Roster,
    rng: &mut ChaCha8Rng,
    role: RiflemanRole,
) -> Entity {
    let weapon = match role {
        RiflemanRole::Suppression => WeaponType::ArBurst,
        RiflemanRole::Flanker => WeaponType::SgShotgun,
    };
    let position = Position::new(rng.gen_range(0.2..0.8), rng.gen_range(0.2..0.8));
    let in_cover = rng.gen_bool(0.5);
    let enemy = base_enemy(roster, EnemyTier::Tier2, weapon, in_cover);
    let mind = RiflemanMind {
        role,
        state_timer: 0.0,
    };
    push_enemy(world, roster, enemy, position, Archetype::Rifleman(mind))
}

/// Shielded special with a full generator and an intact weak point.
pub fn spawn_shielded(
    world: &mut World,
    roster: &mut Roster,
    rng: &mut ChaCha8Rng,
    variant: ShieldVariant,
) -> Entity {
    let position = Position::new(rng.gen_range(0.3..0.7), rng.gen_range(0.3..0.7));
    let location = WeakPointLocation::ALL[rng.gen_range(0..WeakPointLocation::ALL.len())];
    let enemy = base_enemy(roster, EnemyTier::Shielded, WeaponType::EnergyPistol, false);
    let unit = ShieldUnit {
        variant,
        has_shield: true,
        shield_hp: 1.0,
        regen_timer: 0.0,
        weak_point: WeakPoint { location, hp: 1.0 },
    };
    push_enemy(world, roster, enemy, position, Archetype::Shielded(unit))
}

/// Marksman in a covered nest on the far side of the arena.
pub fn spawn_marksman(world: &mut World, roster: &mut Roster, rng: &mut ChaCha8Rng) -> Entity {
    let position = Position::new(rng.gen_range(0.7..0.95), rng.gen_range(0.1..0.9));
    let enemy = base_enemy(roster, EnemyTier::Marksman, WeaponType::Dmr, true);
    push_enemy(world, roster, enemy, position, Archetype::Marksman(MarksmanMind::default()))
}

/// Spider mine with full body and leg pools.
pub fn spawn_mine(world: &mut World, roster: &mut Roster, rng: &mut ChaCha8Rng) -> Entity {
    let position = Position::new(rng.gen_range(0.1..0.9), rng.gen_range(0.1..0.9));
    let mine = SpiderMine {
        body_health: 1.0,
        leg_health: [1.0; MINE_LEG_COUNT],
        state: MineState::Approaching,
        alive: true,
    };
    debug!(x = position.x, y = position.y, "spider mine spawned");
    let entity = world.spawn((mine, position));
    roster.mines.push(entity);
    entity
}

/// The Juggernaut. Its first defense stance is available immediately.
pub fn spawn_boss(world: &mut World, roster: &mut Roster) -> Entity {
    let boss = Boss {
        health: 1.0,
        armor: BOSS_ARMOR,
        armor_current: BOSS_ARMOR,
        state: BossState::Walking,
        state_timer: 0.0,
        stun_timer: 0.0,
        weak_points_visible: false,
        since_defense: BOSS_DEFENSE_COOLDOWN_SECS,
        alive: true,
    };
    let entity = world.spawn((boss, Position::new(BOSS_SPAWN_X, BOSS_SPAWN_Y)));
    roster.boss = Some(entity);
    entity
}
