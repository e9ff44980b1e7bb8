//! Behavior system: ticks every living enemy, then mines, then the boss.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use calypso_ai::fsm::{self, BotView, Reaction};
use calypso_core::components::{Archetype, Boss, Bot, Enemy, SpiderMine};
use calypso_core::types::{clamp_unit, Position};

use crate::episode::{Episode, Roster};

/// Run one behavior tick for everything hostile in the world.
pub fn run(
    world: &mut World,
    roster: &Roster,
    bot: &mut Bot,
    episode: &mut Episode,
    rng: &mut ChaCha8Rng,
) {
    let view = BotView {
        position: bot.position,
        in_cover: bot.in_cover,
    };

    for &entity in &roster.enemies {
        let Ok((enemy, position, archetype)) =
            world.query_one_mut::<(&mut Enemy, &mut Position, &mut Archetype)>(entity)
        else {
            continue;
        };
        if !enemy.alive {
            continue;
        }
        let reaction = fsm::tick_enemy(archetype, enemy, position, &view, rng);
        apply(bot, episode, &reaction);
    }

    for &entity in &roster.mines {
        let Ok((mine, position)) = world.query_one_mut::<(&mut SpiderMine, &mut Position)>(entity)
        else {
            continue;
        };
        if !mine.alive {
            continue;
        }
        let reaction = fsm::tick_mine(mine, position, &view);
        apply(bot, episode, &reaction);
    }

    if let Some(entity) = roster.boss {
        if let Ok((boss, position)) = world.query_one_mut::<(&mut Boss, &mut Position)>(entity) {
            if boss.alive {
                let reaction = fsm::tick_boss(boss, position, &view);
                apply(bot, episode, &reaction);
            }
        }
    }
}

fn apply(bot: &mut Bot, episode: &mut Episode, reaction: &Reaction) {
    if reaction.bot_damage > 0.0 {
        bot.health = clamp_unit(bot.health - reaction.bot_damage);
        episode.damage_taken += reaction.bot_damage;
    }
}
