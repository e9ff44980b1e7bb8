//! Per-step diagnostics returned alongside every observation.

use serde::{Deserialize, Serialize};

use crate::enums::{AreaType, EpisodeOutcome};

/// Diagnostic info for the agent loop and logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    pub step: u32,
    /// Simulated seconds since reset.
    pub elapsed_secs: f64,
    pub bot_health: f64,
    pub bot_ammo: f64,
    pub bot_kills: u32,
    /// Living roster enemies (mines and boss excluded).
    pub enemies_alive: usize,
    /// Cumulative health and shield damage dealt this episode.
    pub damage_dealt: f64,
    /// Cumulative health damage taken this episode.
    pub damage_taken: f64,
    /// Episode reward so far, terminal bonuses included.
    pub total_reward: f64,
    pub tier: u8,
    pub alarm_level: u8,
    pub area_type: AreaType,
    /// Living spider mines.
    pub spider_mines: usize,
    pub boss_alive: bool,
    /// Set on the step that ends the episode.
    pub outcome: Option<EpisodeOutcome>,
}
