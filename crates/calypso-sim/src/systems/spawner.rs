//! Spawn scheduler: timed grunt waves, marksman deployments and spider mines.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use calypso_core::constants::*;
use calypso_core::enums::AreaType;

use crate::engine::SimConfig;
use crate::episode::{Episode, Roster};
use crate::world_setup;

/// Advance the spawn timers and spawn whatever is due.
pub fn run(
    world: &mut World,
    roster: &mut Roster,
    episode: &mut Episode,
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) {
    let timers = &mut episode.timers;
    timers.wave += DT;
    timers.marksman += DT;
    timers.mine += DT;

    // Tier 1 reinforcement waves, capped by the living headcount.
    if config.initial_tier == 1 && timers.wave >= GRUNT_WAVE_SECS {
        let rolled = rng.gen_range(GRUNT_WAVE_MIN..=GRUNT_WAVE_MAX) as usize;
        let living = roster.living_enemies(world).len();
        let count = rolled.min(GRUNT_LIVING_CAP.saturating_sub(living));
        debug!(rolled, living, count, "grunt wave");
        for _ in 0..count {
            world_setup::spawn_grunt(world, roster, rng);
        }
        timers.wave = 0.0;
    }

    // Marksmen only deploy where they have sight lines.
    if config.initial_tier >= 2 && timers.marksman >= MARKSMAN_WAVE_SECS {
        if config.area_type == AreaType::Wide {
            let count = rng.gen_range(MARKSMAN_WAVE_MIN..=MARKSMAN_WAVE_MAX);
            debug!(count, "marksman deployment");
            for _ in 0..count {
                world_setup::spawn_marksman(world, roster, rng);
            }
        }
        timers.marksman = 0.0;
    }

    if episode.time_since_alarm >= MINE_ALARM_DELAY_SECS && timers.mine >= MINE_WAVE_SECS {
        if roster.living_mines(world).len() < MINE_LIVING_CAP {
            world_setup::spawn_mine(world, roster, rng);
        }
        timers.mine = 0.0;
    }
}
