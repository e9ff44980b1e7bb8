//! Baseline policies that pick an action from the observation alone.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use calypso_core::constants::ACTION_COUNT;
use calypso_core::enums::Action;
use calypso_core::observation::{slot, Observation};

/// Maps an observation to the next action.
pub trait Policy {
    fn act(&mut self, observation: &Observation) -> Action;
}

/// Uniform over all actions, seeded for reproducible runs.
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &Observation) -> Action {
        let index = self.rng.gen_range(0..ACTION_COUNT);
        Action::ALL[index]
    }
}

/// Fixed priority list: dodge mines, punish a stunned boss, survive,
/// keep the magazine topped up, then shoot whatever is in sight.
#[derive(Debug, Default)]
pub struct HeuristicPolicy;

const MINE_DANGER: f32 = 0.8;
const LOW_HEALTH: f32 = 0.3;
const LOW_AMMO: f32 = 0.15;

impl Policy for HeuristicPolicy {
    fn act(&mut self, obs: &Observation) -> Action {
        let in_cover = obs.get(slot::IN_COVER) > 0.5;
        let nearest = obs.enemy(0);
        let enemy_visible = nearest[slot::ENEMY_VISIBLE] > 0.5;

        if obs.get(slot::HAZARD_PROXIMITY) > MINE_DANGER {
            return Action::EvadeExplosive;
        }
        if obs.get(slot::BOSS_STUN_WINDOW) > 0.5 {
            return Action::TargetWeakPoint;
        }
        if obs.get(slot::HEALTH) < LOW_HEALTH {
            return if in_cover {
                Action::Flee
            } else {
                Action::TakeCover
            };
        }
        if obs.get(slot::AMMO_PRIMARY) < LOW_AMMO {
            return Action::Reload;
        }
        if obs.get(slot::SHIELDED_COUNT) > 0.0 {
            return Action::TargetWeakPoint;
        }
        if enemy_visible {
            return Action::Attack;
        }
        Action::Investigate
    }
}
