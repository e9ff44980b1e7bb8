//! Enemy behavior state machines.
//!
//! One tick function per archetype. Each takes the unit's plain-data
//! components plus a read-only view of the bot, mutates the unit in place
//! and reports the effect on the bot as a [`Reaction`]. No ECS dependency.
//!
//! Every stochastic decision consumes exactly one `f64` draw from `rng`,
//! so a seeded generator reproduces the same trajectory.

use calypso_core::components::*;
use calypso_core::constants::*;
use calypso_core::enums::{BossState, GruntState, MineState, RiflemanRole};
use calypso_core::types::Position;
use rand::Rng;
use tracing::debug;

/// What an enemy can see of the bot this tick.
#[derive(Debug, Clone, Copy)]
pub struct BotView {
    pub position: Position,
    pub in_cover: bool,
}

/// Effect of one behavior tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reaction {
    /// Health damage dealt to the bot.
    pub bot_damage: f64,
    pub state_changed: bool,
    /// The unit blew itself up this tick, hit or miss.
    pub detonated: bool,
}

impl Reaction {
    fn damage(amount: f64) -> Self {
        Self {
            bot_damage: amount,
            ..Default::default()
        }
    }
}

/// Dispatch one tick for a living roster enemy.
pub fn tick_enemy(
    archetype: &mut Archetype,
    enemy: &mut Enemy,
    position: &mut Position,
    bot: &BotView,
    rng: &mut impl Rng,
) -> Reaction {
    match archetype {
        Archetype::Grunt(mind) => tick_grunt(mind, enemy, position, bot, rng),
        Archetype::Rifleman(mind) => tick_rifleman(mind, enemy, position, bot, rng),
        Archetype::Marksman(mind) => tick_marksman(mind, enemy, position, bot, rng),
        Archetype::Shielded(unit) => tick_shielded(unit, position, bot, rng),
    }
}

/// Tier 1 panic cycle: patrol, surprised, panic fire, fleeing, passive.
pub fn tick_grunt(
    mind: &mut GruntMind,
    enemy: &mut Enemy,
    position: &mut Position,
    bot: &BotView,
    rng: &mut impl Rng,
) -> Reaction {
    let dist = position.distance_to(&bot.position);
    mind.state_timer += DT;
    let mut reaction = Reaction::default();

    let next = match mind.state {
        GruntState::Patrol => (dist < GRUNT_SIGHT_RANGE).then_some(GruntState::Surprised),
        GruntState::Surprised => {
            (mind.state_timer >= GRUNT_SURPRISE_SECS).then_some(GruntState::PanicFire)
        }
        GruntState::PanicFire => {
            if mind.state_timer < GRUNT_PANIC_FIRE_SECS {
                let hit = rng.gen::<f64>() < enemy.accuracy * GRUNT_PANIC_ACCURACY_FACTOR;
                if hit && !bot.in_cover {
                    reaction.bot_damage = GRUNT_PANIC_DAMAGE;
                }
                None
            } else {
                Some(GruntState::Fleeing)
            }
        }
        GruntState::Fleeing => {
            *position = position.away_from(&bot.position, GRUNT_FLEE_STEP);
            if mind.state_timer >= GRUNT_FLEE_SECS {
                enemy.in_cover = true;
                Some(GruntState::Passive)
            } else {
                None
            }
        }
        GruntState::Passive => {
            enemy.in_cover = true;
            (mind.state_timer >= GRUNT_PASSIVE_SECS).then_some(GruntState::PanicFire)
        }
    };

    if let Some(state) = next {
        debug!(index = enemy.index, from = ?mind.state, to = ?state, "grunt transition");
        mind.state = state;
        mind.state_timer = 0.0;
        reaction.state_changed = true;
    }
    reaction
}

/// Tier 2 rifleman. Stateless policy re-evaluated every tick.
pub fn tick_rifleman(
    mind: &mut RiflemanMind,
    enemy: &Enemy,
    position: &mut Position,
    bot: &BotView,
    rng: &mut impl Rng,
) -> Reaction {
    let dist = position.distance_to(&bot.position);
    mind.state_timer += DT;

    match mind.role {
        RiflemanRole::Suppression => {
            if bot.in_cover && dist < SUPPRESSION_CLOSE_RANGE {
                // Pin the bot: cover lets a fraction through.
                if rng.gen::<f64>() < SUPPRESSION_COVER_FIRE_CHANCE * enemy.accuracy {
                    return Reaction::damage(SUPPRESSION_COVER_DAMAGE);
                }
            } else {
                let hit = rng.gen::<f64>() < SUPPRESSION_FIRE_CHANCE * enemy.accuracy;
                if hit && !bot.in_cover {
                    return Reaction::damage(SUPPRESSION_DAMAGE);
                }
            }
        }
        RiflemanRole::Flanker => {
            if dist < FLANKER_CLOSE_RANGE && !bot.in_cover {
                if rng.gen::<f64>() < FLANKER_BURST_CHANCE {
                    return Reaction::damage(FLANKER_DAMAGE);
                }
            } else {
                *position = position.sidestep(&bot.position, FLANKER_STEP);
            }
        }
    }
    Reaction::default()
}

/// Marksman: long-range shots only, stays in its nest.
pub fn tick_marksman(
    mind: &mut MarksmanMind,
    enemy: &Enemy,
    position: &Position,
    bot: &BotView,
    rng: &mut impl Rng,
) -> Reaction {
    mind.state_timer += DT;
    let dist = position.distance_to(&bot.position);
    if dist <= MARKSMAN_MIN_RANGE {
        return Reaction::default();
    }

    if rng.gen::<f64>() < MARKSMAN_FIRE_CHANCE * enemy.accuracy {
        let damage = if bot.in_cover {
            MARKSMAN_COVER_DAMAGE
        } else {
            MARKSMAN_EXPOSED_DAMAGE
        };
        return Reaction::damage(damage);
    }
    Reaction::default()
}

/// Shielded special: regenerates, advances behind the shield, jabs at close range.
pub fn tick_shielded(
    unit: &mut ShieldUnit,
    position: &mut Position,
    bot: &BotView,
    rng: &mut impl Rng,
) -> Reaction {
    let dist = position.distance_to(&bot.position);
    let mut reaction = Reaction::default();

    // A stripped generator never comes back.
    if unit.variant.regenerates() && unit.has_shield && unit.shield_hp <= 0.0 {
        unit.regen_timer += DT;
        if unit.regen_timer >= SHIELD_REGEN_SECS {
            debug!(variant = ?unit.variant, "shield regenerated");
            unit.shield_hp = 1.0;
            unit.regen_timer = 0.0;
            reaction.state_changed = true;
        }
    }

    if dist > SHIELDED_HOLD_RANGE && unit.has_shield && unit.shield_hp > 0.0 {
        *position = position.toward(&bot.position, SHIELDED_STEP);
    }

    if dist < SHIELDED_ATTACK_RANGE && rng.gen::<f64>() < SHIELDED_ATTACK_CHANCE {
        reaction.bot_damage = if bot.in_cover {
            SHIELDED_ATTACK_DAMAGE * SHIELDED_COVER_FACTOR
        } else {
            SHIELDED_ATTACK_DAMAGE
        };
    }
    reaction
}

/// Spider mine: crawl toward the bot, light the fuse in range, detonate once.
pub fn tick_mine(mine: &mut SpiderMine, position: &mut Position, bot: &BotView) -> Reaction {
    let dist = position.distance_to(&bot.position);
    let mut reaction = Reaction::default();

    match mine.state {
        MineState::Exploding { fuse_secs } => {
            let fuse_secs = fuse_secs + DT;
            if fuse_secs >= MINE_FUSE_SECS {
                if dist < MINE_BLAST_RADIUS {
                    reaction.bot_damage = MINE_BLAST_DAMAGE;
                }
                debug!(dist, hit = dist < MINE_BLAST_RADIUS, "spider mine detonated");
                mine.alive = false;
                reaction.detonated = true;
            } else {
                mine.state = MineState::Exploding { fuse_secs };
            }
        }
        MineState::Approaching => {
            if dist > MINE_ARM_RANGE {
                *position = position.toward(&bot.position, MINE_STEP);
            } else {
                mine.state = MineState::Exploding { fuse_secs: 0.0 };
                reaction.state_changed = true;
            }
        }
    }
    reaction
}

/// Juggernaut: walking, hammer combo, leap, defense stance, stunned.
pub fn tick_boss(boss: &mut Boss, position: &mut Position, bot: &BotView) -> Reaction {
    let dist = position.distance_to(&bot.position);
    boss.state_timer += DT;
    if boss.state != BossState::Defense {
        boss.since_defense += DT;
    }
    let mut reaction = Reaction::default();

    let next = match boss.state {
        BossState::Stunned => {
            boss.stun_timer += DT;
            boss.weak_points_visible = true;
            if boss.stun_timer >= BOSS_STUN_SECS {
                boss.weak_points_visible = false;
                Some(BossState::Walking)
            } else {
                None
            }
        }
        BossState::Walking => {
            *position = position.toward(&bot.position, BOSS_WALK_STEP);
            if dist < BOSS_MELEE_RANGE {
                Some(BossState::HammerCombo { swings: 0 })
            } else if boss.state_timer >= BOSS_LEAP_WINDUP_SECS && dist > BOSS_LEAP_MIN_RANGE {
                Some(BossState::Leap)
            } else if boss.health < BOSS_DEFENSE_HEALTH
                && boss.since_defense >= BOSS_DEFENSE_COOLDOWN_SECS
            {
                boss.armor_current = BOSS_DEFENSE_ARMOR;
                Some(BossState::Defense)
            } else {
                None
            }
        }
        BossState::HammerCombo { swings } => {
            if boss.state_timer >= BOSS_SWING_SECS {
                let swings = swings + 1;
                let (range, damage) = if swings < BOSS_COMBO_HITS {
                    (BOSS_LIGHT_SWING_RANGE, BOSS_LIGHT_SWING_DAMAGE)
                } else {
                    (BOSS_HEAVY_SWING_RANGE, BOSS_HEAVY_SWING_DAMAGE)
                };
                if dist < range {
                    reaction.bot_damage = damage;
                }
                boss.state_timer = 0.0;

                if swings >= BOSS_COMBO_HITS {
                    Some(BossState::Walking)
                } else {
                    boss.state = BossState::HammerCombo { swings };
                    None
                }
            } else {
                None
            }
        }
        BossState::Leap => {
            if boss.state_timer < BOSS_LEAP_SECS {
                *position = position.toward(&bot.position, BOSS_LEAP_STEP);
                None
            } else {
                if dist < BOSS_LANDING_RANGE {
                    reaction.bot_damage = BOSS_LANDING_DAMAGE;
                }
                if position.near_boundary(BOSS_WALL_MARGIN) {
                    boss.stun_timer = 0.0;
                    Some(BossState::Stunned)
                } else {
                    Some(BossState::Walking)
                }
            }
        }
        BossState::Defense => {
            boss.armor_current = BOSS_DEFENSE_ARMOR;
            if boss.state_timer >= BOSS_DEFENSE_SECS {
                boss.armor_current = boss.armor;
                boss.since_defense = 0.0;
                Some(BossState::Walking)
            } else {
                None
            }
        }
    };

    if let Some(state) = next {
        debug!(from = ?boss.state, to = ?state, "boss transition");
        boss.state = state;
        boss.state_timer = 0.0;
        reaction.state_changed = true;
    }
    reaction
}
