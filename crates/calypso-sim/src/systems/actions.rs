//! Action executor: applies the bot's chosen action and returns its
//! immediate reward.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use calypso_core::components::{Archetype, Boss, Bot, Enemy};
use calypso_core::constants::*;
use calypso_core::enums::{Action, EnemyTier};
use calypso_core::types::{clamp_unit, normalize, Position};

use crate::combat::{self, DamageOutcome, WeakPointOutcome};
use crate::episode::{EnemyView, Episode, Roster};

/// Execute one bot action against the world.
pub fn run(
    world: &mut World,
    roster: &Roster,
    bot: &mut Bot,
    episode: &mut Episode,
    rng: &mut ChaCha8Rng,
    action: Action,
) -> f64 {
    match action {
        Action::Idle => IDLE_REWARD,
        Action::Attack => attack(world, roster, bot, episode, rng),
        Action::TakeCover => take_cover(bot),
        Action::Flee => flee(bot, rng),
        Action::Reload => reload(bot),
        Action::Patrol => patrol(bot, rng),
        Action::Investigate => investigate(world, roster, bot),
        Action::Advance => advance(world, roster, bot),
        Action::Flank => flank(world, roster, bot),
        Action::Support => support(bot, rng),
        Action::Suppress => suppress(world, roster, bot),
        Action::PeekFire => peek_fire(world, roster, bot, episode, rng),
        Action::TargetWeakPoint => target_weak_point(world, roster, bot, episode, rng),
        Action::EvadeExplosive => evade_explosive(world, roster, bot),
        Action::CounterShield => counter_shield(world, roster, bot, rng),
        Action::CoordinateAttack => coordinate_attack(world, roster, bot, episode, rng),
    }
}

/// Greedy target pick among living enemies within range.
///
/// Score is `1 - distance`, minus a penalty for shielded targets, plus
/// bonuses for wounded targets and marksmen. The first of equal scores wins.
pub fn best_target<'a>(enemies: &'a [EnemyView], from: &Position) -> Option<&'a EnemyView> {
    let mut best: Option<(&EnemyView, f64)> = None;
    for enemy in enemies {
        let dist = from.distance_to(&enemy.position);
        if dist > TARGET_MAX_RANGE {
            continue;
        }

        let mut score = 1.0 - dist;
        if enemy.has_shield {
            score -= TARGET_SHIELD_PENALTY;
        }
        if enemy.health < TARGET_WOUNDED_THRESHOLD {
            score += TARGET_WOUNDED_BONUS;
        }
        if enemy.tier == EnemyTier::Marksman {
            score += TARGET_MARKSMAN_BONUS;
        }

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((enemy, score));
        }
    }
    best.map(|(enemy, _)| enemy)
}

/// Nearest living enemy regardless of range.
pub fn nearest_enemy<'a>(enemies: &'a [EnemyView], from: &Position) -> Option<&'a EnemyView> {
    let mut nearest: Option<(&EnemyView, f64)> = None;
    for enemy in enemies {
        let dist = from.distance_to(&enemy.position);
        if nearest.map_or(true, |(_, d)| dist < d) {
            nearest = Some((enemy, dist));
        }
    }
    nearest.map(|(enemy, _)| enemy)
}

/// Land `nominal` damage on a roster enemy and settle the kill count
/// and damage stats.
fn strike(
    world: &mut World,
    entity: Entity,
    nominal: f64,
    bot: &mut Bot,
    episode: &mut Episode,
) -> Option<DamageOutcome> {
    let (enemy, archetype) = world
        .query_one_mut::<(&mut Enemy, &mut Archetype)>(entity)
        .ok()?;
    let outcome = combat::apply_damage(enemy, archetype, nominal);
    episode.damage_dealt += outcome.amount();
    if outcome.killed() {
        bot.kills += 1;
    }
    Some(outcome)
}

fn kill_bonus(outcome: &DamageOutcome, tier: EnemyTier) -> f64 {
    if outcome.killed() {
        combat::kill_reward(tier)
    } else {
        0.0
    }
}

fn random_direction(rng: &mut ChaCha8Rng) -> (f64, f64) {
    let dx = rng.gen_range(-1.0..1.0);
    let dy = rng.gen_range(-1.0..1.0);
    normalize(dx, dy)
}

fn attack(
    world: &mut World,
    roster: &Roster,
    bot: &mut Bot,
    episode: &mut Episode,
    rng: &mut ChaCha8Rng,
) -> f64 {
    if bot.ammo <= 0.0 {
        return EMPTY_MAGAZINE_PENALTY;
    }
    bot.ammo = clamp_unit(bot.ammo - ATTACK_AMMO_COST);

    let enemies = roster.living_enemies(world);
    let Some(target) = best_target(&enemies, &bot.position) else {
        return ATTACK_NO_TARGET_PENALTY;
    };

    let dist = bot.position.distance_to(&target.position);
    if !combat::resolve_hit(dist, target.in_cover, target.shield_active, rng) {
        return 0.0;
    }

    match strike(world, target.entity, ATTACK_DAMAGE, bot, episode) {
        Some(DamageOutcome::ShieldAbsorbed { .. }) => ATTACK_SHIELD_REWARD,
        Some(outcome) => ATTACK_HIT_REWARD + kill_bonus(&outcome, target.tier),
        None => 0.0,
    }
}

fn take_cover(bot: &mut Bot) -> f64 {
    if bot.in_cover {
        return ALREADY_IN_COVER_PENALTY;
    }
    bot.in_cover = true;
    TAKE_COVER_REWARD
}

fn flee(bot: &mut Bot, rng: &mut ChaCha8Rng) -> f64 {
    let direction = random_direction(rng);
    bot.position = bot.position.offset(direction, FLEE_STEP);
    bot.in_cover = false;

    if bot.health < FLEE_LOW_HEALTH {
        FLEE_REWARD
    } else {
        0.0
    }
}

fn reload(bot: &mut Bot) -> f64 {
    if bot.ammo >= 1.0 {
        return RELOAD_FULL_PENALTY;
    }
    bot.ammo = clamp_unit(bot.ammo + RELOAD_AMOUNT);

    if bot.in_cover {
        RELOAD_COVER_REWARD
    } else {
        RELOAD_OPEN_REWARD
    }
}

fn patrol(bot: &mut Bot, rng: &mut ChaCha8Rng) -> f64 {
    let direction = random_direction(rng);
    bot.position = bot.position.offset(direction, PATROL_STEP);
    bot.in_cover = false;
    PATROL_REWARD
}

fn investigate(world: &World, roster: &Roster, bot: &mut Bot) -> f64 {
    let enemies = roster.living_enemies(world);
    let Some(nearest) = nearest_enemy(&enemies, &bot.position) else {
        return 0.0;
    };
    bot.position = bot.position.toward(&nearest.position, INVESTIGATE_STEP);
    bot.in_cover = false;
    INVESTIGATE_REWARD
}

fn advance(world: &World, roster: &Roster, bot: &mut Bot) -> f64 {
    let enemies = roster.living_enemies(world);
    let Some(target) = best_target(&enemies, &bot.position) else {
        return MOVE_NO_TARGET_PENALTY;
    };
    bot.position = bot.position.toward(&target.position, ADVANCE_STEP);
    bot.in_cover = false;
    ADVANCE_REWARD
}

fn flank(world: &World, roster: &Roster, bot: &mut Bot) -> f64 {
    let enemies = roster.living_enemies(world);
    let Some(target) = best_target(&enemies, &bot.position) else {
        return MOVE_NO_TARGET_PENALTY;
    };
    bot.position = bot.position.sidestep(&target.position, FLANK_STEP);
    bot.in_cover = false;
    FLANK_REWARD
}

fn support(bot: &mut Bot, rng: &mut ChaCha8Rng) -> f64 {
    let dx = rng.gen_range(-SUPPORT_JITTER..SUPPORT_JITTER);
    let dy = rng.gen_range(-SUPPORT_JITTER..SUPPORT_JITTER);
    bot.position = Position::new(bot.position.x + dx, bot.position.y + dy).clamped();
    SUPPORT_REWARD
}

fn suppress(world: &mut World, roster: &Roster, bot: &mut Bot) -> f64 {
    if bot.ammo <= SUPPRESS_AMMO_COST {
        return EMPTY_MAGAZINE_PENALTY;
    }
    bot.ammo = clamp_unit(bot.ammo - SUPPRESS_AMMO_COST);

    let mut reward = 0.0;
    for &entity in &roster.enemies {
        let Ok((enemy, position)) = world.query_one_mut::<(&mut Enemy, &Position)>(entity) else {
            continue;
        };
        if !enemy.alive || enemy.in_cover {
            continue;
        }
        if bot.position.distance_to(position) < SUPPRESS_RANGE {
            enemy.in_cover = true;
            reward += SUPPRESS_COVER_REWARD;
        }
    }
    reward
}

fn peek_fire(
    world: &mut World,
    roster: &Roster,
    bot: &mut Bot,
    episode: &mut Episode,
    rng: &mut ChaCha8Rng,
) -> f64 {
    if !bot.in_cover || bot.ammo <= 0.0 {
        return PEEK_EXPOSED_PENALTY;
    }
    bot.ammo = clamp_unit(bot.ammo - PEEK_AMMO_COST);

    let enemies = roster.living_enemies(world);
    let Some(target) = best_target(&enemies, &bot.position) else {
        return ATTACK_NO_TARGET_PENALTY;
    };

    if rng.gen::<f64>() >= PEEK_HIT_CHANCE {
        return PEEK_MISS_REWARD;
    }
    match strike(world, target.entity, PEEK_DAMAGE, bot, episode) {
        Some(outcome) => PEEK_HIT_REWARD + kill_bonus(&outcome, target.tier),
        None => PEEK_MISS_REWARD,
    }
}

fn target_weak_point(
    world: &mut World,
    roster: &Roster,
    bot: &mut Bot,
    episode: &mut Episode,
    rng: &mut ChaCha8Rng,
) -> f64 {
    // A stunned boss takes priority over shielded units.
    if let Some(boss) = stunned_boss(world, roster) {
        if rng.gen::<f64>() >= WEAK_POINT_BOSS_HIT_CHANCE {
            return WEAK_POINT_BOSS_MISS_REWARD;
        }
        let (dealt, killed) = combat::apply_boss_damage(boss, WEAK_POINT_BOSS_DAMAGE);
        episode.damage_dealt += dealt;
        if killed {
            bot.kills += 1;
            return combat::kill_reward(EnemyTier::Boss);
        }
        return WEAK_POINT_BOSS_HIT_REWARD;
    }

    let Some(entity) = first_shielded(world, roster) else {
        return NO_TARGET_PENALTY;
    };
    if rng.gen::<f64>() >= WEAK_POINT_HIT_CHANCE {
        return WEAK_POINT_MISS_REWARD;
    }
    match break_weak_point(world, entity, WEAK_POINT_DAMAGE) {
        Some(WeakPointOutcome::Broken) => WEAK_POINT_BREAK_REWARD,
        Some(WeakPointOutcome::Damaged) => WEAK_POINT_HIT_REWARD,
        None => WEAK_POINT_MISS_REWARD,
    }
}

fn evade_explosive(world: &World, roster: &Roster, bot: &mut Bot) -> f64 {
    let threat = roster
        .living_mines(world)
        .into_iter()
        .find(|(_, position)| bot.position.distance_to(position) < EVADE_TRIGGER_RANGE);

    match threat {
        Some((_, position)) => {
            bot.position = bot.position.away_from(&position, EVADE_STEP);
            EVADE_REWARD
        }
        None => 0.0,
    }
}

fn counter_shield(world: &mut World, roster: &Roster, bot: &mut Bot, rng: &mut ChaCha8Rng) -> f64 {
    let Some(entity) = first_shielded(world, roster) else {
        return NO_TARGET_PENALTY;
    };
    let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
        return NO_TARGET_PENALTY;
    };

    // Circle around the shield toward the unit's back.
    bot.position = bot.position.sidestep(&position, COUNTER_SHIELD_STEP);
    bot.in_cover = false;

    if rng.gen::<f64>() >= COUNTER_SHIELD_HIT_CHANCE {
        return COUNTER_SHIELD_REPOSITION_REWARD;
    }
    match break_weak_point(world, entity, COUNTER_SHIELD_DAMAGE) {
        Some(WeakPointOutcome::Broken) => COUNTER_SHIELD_BREAK_REWARD,
        Some(WeakPointOutcome::Damaged) => COUNTER_SHIELD_HIT_REWARD,
        None => COUNTER_SHIELD_REPOSITION_REWARD,
    }
}

fn coordinate_attack(
    world: &mut World,
    roster: &Roster,
    bot: &mut Bot,
    episode: &mut Episode,
    rng: &mut ChaCha8Rng,
) -> f64 {
    let in_range: Vec<EnemyView> = roster
        .living_enemies(world)
        .into_iter()
        .filter(|e| bot.position.distance_to(&e.position) < COORDINATE_RANGE)
        .collect();
    if in_range.len() < COORDINATE_MIN_ENEMIES {
        return 0.0;
    }

    let mut reward = COORDINATE_REWARD;
    for target in &in_range {
        if rng.gen::<f64>() >= COORDINATE_HIT_CHANCE {
            continue;
        }
        if let Some(outcome) = strike(world, target.entity, COORDINATE_DAMAGE, bot, episode) {
            reward += kill_bonus(&outcome, target.tier);
        }
    }
    reward
}

fn stunned_boss<'w>(world: &'w mut World, roster: &Roster) -> Option<&'w mut Boss> {
    let boss = world.query_one_mut::<&mut Boss>(roster.boss?).ok()?;
    (boss.alive && boss.is_stunned()).then_some(boss)
}

/// First living enemy, in roster order, still carrying a shield generator.
fn first_shielded(world: &World, roster: &Roster) -> Option<Entity> {
    roster
        .living_enemies(world)
        .into_iter()
        .find(|e| e.has_shield)
        .map(|e| e.entity)
}

fn break_weak_point(world: &mut World, entity: Entity, amount: f64) -> Option<WeakPointOutcome> {
    let archetype = world.query_one_mut::<&mut Archetype>(entity).ok()?;
    let unit = archetype.shield_mut()?;
    let outcome = combat::damage_weak_point(unit, amount);
    debug!(?outcome, hp = unit.weak_point.hp, "weak point hit");
    Some(outcome)
}
