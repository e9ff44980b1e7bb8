//! Simulation engine: the agent-facing reset/step loop.
//!
//! `SimulationEngine` owns the hecs world, the bot, the episode state and
//! the RNG. One `step` fully executes one tick: bot action, enemy
//! behaviors, spawns, termination check, observation. Completely headless,
//! so identical seeds and action sequences reproduce identical episodes.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use calypso_core::components::Bot;
use calypso_core::constants::*;
use calypso_core::enums::{Action, AreaType, EpisodeOutcome};
use calypso_core::error::{ConfigError, SimError};
use calypso_core::observation::Observation;
use calypso_core::state::StepInfo;

use crate::episode::{Episode, Roster};
use crate::systems;
use crate::world_setup;

/// Configuration for a simulator instance. Fixed for every episode it runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same episode.
    pub seed: u64,
    /// Opening enemy tier, 1 or 2.
    pub initial_tier: u8,
    /// 1..=3.
    pub alarm_level: u8,
    pub area_type: AreaType,
    pub enable_boss: bool,
    pub max_steps: u32,
    /// Encoded verbatim into the last observation slot.
    pub player_skill: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            initial_tier: 1,
            alarm_level: 1,
            area_type: AreaType::Medium,
            enable_boss: false,
            max_steps: DEFAULT_MAX_STEPS,
            player_skill: 0.5,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.initial_tier, 1 | 2) {
            return Err(ConfigError::UnsupportedTier(self.initial_tier));
        }
        if !(1..=3).contains(&self.alarm_level) {
            return Err(ConfigError::AlarmLevelOutOfRange(self.alarm_level));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroMaxSteps);
        }
        if !(0.0..=1.0).contains(&self.player_skill) {
            return Err(ConfigError::PlayerSkillOutOfRange(self.player_skill));
        }
        Ok(())
    }
}

/// Result of one `step`.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

/// The simulation engine. Owns the ECS world and all episode state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    roster: Roster,
    bot: Bot,
    rng: ChaCha8Rng,
    /// `None` until the first reset.
    episode: Option<Episode>,
}

impl SimulationEngine {
    /// Create an engine. Call `reset` before the first `step`.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            roster: Roster::default(),
            bot: world_setup::new_bot(),
            episode: None,
        })
    }

    /// Start a new episode. A seed re-seeds the RNG; `None` continues
    /// the current random stream.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, StepInfo) {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        self.world = World::new();
        self.roster = Roster::default();
        self.bot = world_setup::new_bot();
        world_setup::setup_episode(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            &self.config,
        );

        info!(
            seed = ?seed,
            tier = self.config.initial_tier,
            alarm = self.config.alarm_level,
            area = ?self.config.area_type,
            boss = self.config.enable_boss,
            enemies = self.roster.enemies.len(),
            "episode reset"
        );

        let episode = Episode::default();
        let initial = (self.observe(&episode), self.info(&episode));
        self.episode = Some(episode);
        initial
    }

    /// Advance one tick with the given action index.
    pub fn step(&mut self, action_index: usize) -> Result<StepOutcome, SimError> {
        let action =
            Action::from_index(action_index).ok_or(SimError::InvalidAction(action_index))?;
        let mut episode = self.episode.take().ok_or(SimError::NotReset)?;
        if episode.is_finished() {
            self.episode = Some(episode);
            return Err(SimError::EpisodeFinished);
        }

        episode.steps += 1;
        episode.time.advance();
        episode.time_since_alarm += DT;

        let mut reward = systems::actions::run(
            &mut self.world,
            &self.roster,
            &mut self.bot,
            &mut episode,
            &mut self.rng,
            action,
        );
        systems::behavior::run(
            &mut self.world,
            &self.roster,
            &mut self.bot,
            &mut episode,
            &mut self.rng,
        );
        systems::spawner::run(
            &mut self.world,
            &mut self.roster,
            &mut episode,
            &self.config,
            &mut self.rng,
        );

        if self.bot.health > 0.0 {
            reward += SURVIVAL_BONUS;
        }

        let bot_dead = self.bot.health <= 0.0;
        let cleared = self.roster.living_enemies(&self.world).is_empty()
            && self.roster.living_boss(&self.world).is_none();
        if bot_dead {
            reward += DEATH_PENALTY;
        }
        if cleared {
            reward += VICTORY_BONUS;
        }
        let terminated = bot_dead || cleared;
        let truncated = episode.steps >= self.config.max_steps;
        episode.total_reward += reward;

        episode.outcome = match (bot_dead, cleared) {
            (true, true) => Some(EpisodeOutcome::Draw),
            (true, false) => Some(EpisodeOutcome::Defeat),
            (false, true) => Some(EpisodeOutcome::Victory),
            (false, false) if truncated => Some(EpisodeOutcome::Truncated),
            (false, false) => None,
        };
        if let Some(outcome) = episode.outcome {
            info!(
                steps = episode.steps,
                total_reward = episode.total_reward,
                kills = self.bot.kills,
                ?outcome,
                "episode finished"
            );
        }

        let outcome = StepOutcome {
            observation: self.observe(&episode),
            reward: reward as f32,
            terminated,
            truncated,
            info: self.info(&episode),
        };
        self.episode = Some(episode);
        Ok(outcome)
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get the current bot state.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the current episode, if reset has been called.
    pub fn episode(&self) -> Option<&Episode> {
        self.episode.as_ref()
    }

    /// Get the entity roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn observe(&self, episode: &Episode) -> Observation {
        systems::observation::encode(&self.world, &self.roster, &self.bot, episode, &self.config)
    }

    fn info(&self, episode: &Episode) -> StepInfo {
        StepInfo {
            step: episode.steps,
            elapsed_secs: episode.time.elapsed_secs,
            bot_health: self.bot.health,
            bot_ammo: self.bot.ammo,
            bot_kills: self.bot.kills,
            enemies_alive: self.roster.living_enemies(&self.world).len(),
            damage_dealt: episode.damage_dealt,
            damage_taken: episode.damage_taken,
            total_reward: episode.total_reward,
            tier: self.config.initial_tier,
            alarm_level: self.config.alarm_level,
            area_type: self.config.area_type,
            spider_mines: self.roster.living_mines(&self.world).len(),
            boss_alive: self.roster.living_boss(&self.world).is_some(),
            outcome: episode.outcome,
        }
    }

    // --- Test hooks ---

    /// Mutable access to the bot (for tests placing it precisely).
    #[cfg(test)]
    pub fn bot_mut(&mut self) -> &mut Bot {
        &mut self.bot
    }

    /// Mutable access to the world (for tests editing components).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable access to the episode (for tests fast-forwarding timers).
    #[cfg(test)]
    pub fn episode_mut(&mut self) -> Option<&mut Episode> {
        self.episode.as_mut()
    }

    /// Despawn every entity and forget the roster, keeping the episode.
    #[cfg(test)]
    pub fn clear_world(&mut self) {
        self.world = World::new();
        self.roster = Roster::default();
    }

    /// Spawn a grunt at a fixed position.
    #[cfg(test)]
    pub fn spawn_test_grunt(&mut self, x: f64, y: f64) -> hecs::Entity {
        let entity = world_setup::spawn_grunt(&mut self.world, &mut self.roster, &mut self.rng);
        self.place(entity, x, y);
        entity
    }

    /// Spawn a plasma-shielded special at a fixed position.
    #[cfg(test)]
    pub fn spawn_test_shielded(&mut self, x: f64, y: f64) -> hecs::Entity {
        let entity = world_setup::spawn_shielded(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            calypso_core::enums::ShieldVariant::Plasma,
        );
        self.place(entity, x, y);
        entity
    }

    /// Spawn a marksman at a fixed position.
    #[cfg(test)]
    pub fn spawn_test_marksman(&mut self, x: f64, y: f64) -> hecs::Entity {
        let entity = world_setup::spawn_marksman(&mut self.world, &mut self.roster, &mut self.rng);
        self.place(entity, x, y);
        entity
    }

    /// Spawn a spider mine at a fixed position.
    #[cfg(test)]
    pub fn spawn_test_mine(&mut self, x: f64, y: f64) -> hecs::Entity {
        let entity = world_setup::spawn_mine(&mut self.world, &mut self.roster, &mut self.rng);
        self.place(entity, x, y);
        entity
    }

    /// Spawn the boss at a fixed position.
    #[cfg(test)]
    pub fn spawn_test_boss(&mut self, x: f64, y: f64) -> hecs::Entity {
        let entity = world_setup::spawn_boss(&mut self.world, &mut self.roster);
        self.place(entity, x, y);
        entity
    }

    #[cfg(test)]
    fn place(&mut self, entity: hecs::Entity, x: f64, y: f64) {
        if let Ok(mut position) = self.world.get::<&mut calypso_core::types::Position>(entity) {
            *position = calypso_core::types::Position::new(x, y);
        }
    }
}
