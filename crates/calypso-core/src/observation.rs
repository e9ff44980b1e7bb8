//! Observation vector layout.
//!
//! The 96-slot vector is a stable binary contract with every agent
//! implementation: slot order and count never change.
//!
//! | Slots | Section |
//! |---|---|
//! | 0..20 | bot self state |
//! | 20..56 | three enemy slots of 12 values |
//! | 56..76 | environment |
//! | 76..84 | team aggregate |
//! | 84..96 | tactical threat summary |
//!
//! Every value is clipped to [-1, 1] when the vector is built.

use std::ops::Range;

use crate::constants::{MAX_ENEMY_SLOTS, OBSERVATION_DIM};

pub const SELF_RANGE: Range<usize> = 0..20;
pub const ENEMY_RANGE: Range<usize> = 20..56;
pub const ENEMY_SLOT_LEN: usize = 12;
pub const ENVIRONMENT_RANGE: Range<usize> = 56..76;
pub const TEAM_RANGE: Range<usize> = 76..84;
pub const TACTICAL_RANGE: Range<usize> = 84..96;

/// Absolute indices of frequently read slots.
pub mod slot {
    pub const HEALTH: usize = 0;
    pub const ARMOR: usize = 1;
    pub const AMMO_PRIMARY: usize = 2;
    pub const POS_X: usize = 4;
    pub const POS_Y: usize = 5;
    pub const IN_COVER: usize = 12;
    pub const CURRENT_TIER: usize = 16;
    pub const ALARM_LEVEL: usize = 17;
    pub const AREA_TYPE: usize = 18;
    pub const COMBAT_PHASE: usize = 19;

    /// First slot of enemy `n` (0-based).
    pub const fn enemy(n: usize) -> usize {
        20 + n * 12
    }
    /// Offsets inside an enemy slot.
    pub const ENEMY_DISTANCE: usize = 0;
    pub const ENEMY_ANGLE: usize = 1;
    pub const ENEMY_HEALTH: usize = 2;
    pub const ENEMY_VISIBLE: usize = 3;
    pub const ENEMY_IN_COVER: usize = 4;
    pub const ENEMY_THREAT: usize = 5;
    pub const ENEMY_AIMING: usize = 7;
    pub const ENEMY_TIER: usize = 8;
    pub const ENEMY_HAS_SHIELD: usize = 9;
    pub const ENEMY_SHIELD_HP: usize = 10;
    pub const ENEMY_WEAPON: usize = 11;

    pub const HAZARD_PROXIMITY: usize = 72;
    pub const BOSS_PHASE: usize = 73;
    pub const SHIELDED_COUNT: usize = 74;
    pub const FLANK_ROUTE: usize = 75;

    pub const SUPPRESSION_THREAT: usize = 84;
    pub const FLANK_THREAT: usize = 85;
    pub const SNIPER_THREAT: usize = 86;
    pub const EXPLOSIVE_THREAT: usize = 87;
    pub const BOSS_STUN_WINDOW: usize = 94;
    pub const PLAYER_SKILL: usize = 95;
}

/// A fully encoded observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation(pub [f32; OBSERVATION_DIM]);

impl Observation {
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn get(&self, index: usize) -> f32 {
        self.0[index]
    }

    /// Slice of enemy slot `n`.
    pub fn enemy(&self, n: usize) -> &[f32] {
        let start = slot::enemy(n);
        &self.0[start..start + ENEMY_SLOT_LEN]
    }
}

/// Bot self state (20 values).
#[derive(Debug, Clone, PartialEq)]
pub struct SelfState {
    pub health: f64,
    pub armor: f64,
    pub ammo_primary: f64,
    pub ammo_secondary: f64,
    pub pos_x: f64,
    pub pos_y: f64,
    pub pos_z: f64,
    pub yaw: f64,
    pub pitch: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub velocity_z: f64,
    pub in_cover: f64,
    pub reloading: f64,
    pub aiming: f64,
    pub time_since_damage: f64,
    pub current_tier: f64,
    pub alarm_level: f64,
    pub area_type: f64,
    pub combat_phase: f64,
}

impl Default for SelfState {
    fn default() -> Self {
        Self {
            health: 1.0,
            armor: 1.0,
            ammo_primary: 1.0,
            ammo_secondary: 0.0,
            pos_x: 0.5,
            pos_y: 0.5,
            pos_z: 0.5,
            yaw: 0.0,
            pitch: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            velocity_z: 0.0,
            in_cover: 0.0,
            reloading: 0.0,
            aiming: 0.0,
            time_since_damage: 1.0,
            current_tier: 0.0,
            alarm_level: 0.0,
            area_type: 0.0,
            combat_phase: 0.0,
        }
    }
}

impl SelfState {
    fn values(&self) -> [f64; 20] {
        [
            self.health,
            self.armor,
            self.ammo_primary,
            self.ammo_secondary,
            self.pos_x,
            self.pos_y,
            self.pos_z,
            self.yaw,
            self.pitch,
            self.velocity_x,
            self.velocity_y,
            self.velocity_z,
            self.in_cover,
            self.reloading,
            self.aiming,
            self.time_since_damage,
            self.current_tier,
            self.alarm_level,
            self.area_type,
            self.combat_phase,
        ]
    }
}

/// One enemy slot (12 values). The default is the empty-slot encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySlot {
    pub distance: f64,
    pub angle: f64,
    pub health_estimate: f64,
    pub visible: f64,
    pub in_cover: f64,
    pub threat: f64,
    pub closing_velocity: f64,
    pub aiming_at_me: f64,
    pub tier: f64,
    pub has_shield: f64,
    pub shield_hp: f64,
    pub weapon: f64,
}

impl Default for EnemySlot {
    fn default() -> Self {
        Self {
            distance: 1.0,
            angle: 0.0,
            health_estimate: 0.0,
            visible: 0.0,
            in_cover: 0.0,
            threat: 0.0,
            closing_velocity: 0.0,
            aiming_at_me: 0.0,
            tier: 0.0,
            has_shield: 0.0,
            shield_hp: 0.0,
            weapon: 0.0,
        }
    }
}

impl EnemySlot {
    fn values(&self) -> [f64; ENEMY_SLOT_LEN] {
        [
            self.distance,
            self.angle,
            self.health_estimate,
            self.visible,
            self.in_cover,
            self.threat,
            self.closing_velocity,
            self.aiming_at_me,
            self.tier,
            self.has_shield,
            self.shield_hp,
            self.weapon,
        ]
    }
}

/// Environment state (20 values): cover points, objective, danger zone,
/// general counters and four scenario fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentState {
    /// Distance/angle pairs for the four nearest cover points.
    pub cover: [(f64, f64); 4],
    pub objective_distance: f64,
    pub objective_angle: f64,
    pub objective_progress: f64,
    pub danger_distance: f64,
    pub danger_angle: f64,
    pub time_in_combat: f64,
    pub enemies_in_range: f64,
    pub allies_in_range: f64,
    pub hazard_proximity: f64,
    pub boss_phase: f64,
    pub shielded_count: f64,
    pub flank_route: f64,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self {
            cover: [(1.0, 0.0); 4],
            objective_distance: 1.0,
            objective_angle: 0.0,
            objective_progress: 0.0,
            danger_distance: 1.0,
            danger_angle: 0.0,
            time_in_combat: 0.0,
            enemies_in_range: 0.0,
            allies_in_range: 0.0,
            hazard_proximity: 0.0,
            boss_phase: 0.0,
            shielded_count: 0.0,
            flank_route: 0.0,
        }
    }
}

impl EnvironmentState {
    fn values(&self) -> [f64; 20] {
        let [c1, c2, c3, c4] = self.cover;
        [
            c1.0,
            c1.1,
            c2.0,
            c2.1,
            c3.0,
            c3.1,
            c4.0,
            c4.1,
            self.objective_distance,
            self.objective_angle,
            self.objective_progress,
            self.danger_distance,
            self.danger_angle,
            self.time_in_combat,
            self.enemies_in_range,
            self.allies_in_range,
            self.hazard_proximity,
            self.boss_phase,
            self.shielded_count,
            self.flank_route,
        ]
    }
}

/// Team aggregate (8 values).
#[derive(Debug, Clone, PartialEq)]
pub struct TeamState {
    pub health_avg: f64,
    pub alive_ratio: f64,
    pub nearest_ally_distance: f64,
    pub nearest_ally_angle: f64,
    pub objective_progress: f64,
    pub kills: f64,
    pub deaths: f64,
    pub support_needed: f64,
}

impl Default for TeamState {
    fn default() -> Self {
        Self {
            health_avg: 1.0,
            alive_ratio: 1.0,
            nearest_ally_distance: 1.0,
            nearest_ally_angle: 0.0,
            objective_progress: 0.0,
            kills: 0.0,
            deaths: 0.0,
            support_needed: 0.0,
        }
    }
}

impl TeamState {
    fn values(&self) -> [f64; 8] {
        [
            self.health_avg,
            self.alive_ratio,
            self.nearest_ally_distance,
            self.nearest_ally_angle,
            self.objective_progress,
            self.kills,
            self.deaths,
            self.support_needed,
        ]
    }
}

/// Tactical threat summary (12 values).
#[derive(Debug, Clone, PartialEq)]
pub struct TacticalState {
    pub suppression_threat: f64,
    pub flank_threat: f64,
    pub sniper_threat: f64,
    pub explosive_threat: f64,
    pub shield_wall: f64,
    pub retreat_path_clear: f64,
    pub group_coordination: f64,
    pub time_since_alarm: f64,
    pub reinforcement_eta: f64,
    pub enemy_reload_window: f64,
    pub boss_stun_window: f64,
    pub player_skill: f64,
}

impl Default for TacticalState {
    fn default() -> Self {
        Self {
            suppression_threat: 0.0,
            flank_threat: 0.0,
            sniper_threat: 0.0,
            explosive_threat: 0.0,
            shield_wall: 0.0,
            retreat_path_clear: 0.0,
            group_coordination: 0.0,
            time_since_alarm: 0.0,
            reinforcement_eta: 0.0,
            enemy_reload_window: 0.0,
            boss_stun_window: 0.0,
            player_skill: 0.5,
        }
    }
}

impl TacticalState {
    fn values(&self) -> [f64; 12] {
        [
            self.suppression_threat,
            self.flank_threat,
            self.sniper_threat,
            self.explosive_threat,
            self.shield_wall,
            self.retreat_path_clear,
            self.group_coordination,
            self.time_since_alarm,
            self.reinforcement_eta,
            self.enemy_reload_window,
            self.boss_stun_window,
            self.player_skill,
        ]
    }
}

/// Assembles the five sections into an [`Observation`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationBuilder {
    pub self_state: SelfState,
    pub enemies: [EnemySlot; MAX_ENEMY_SLOTS],
    pub environment: EnvironmentState,
    pub team: TeamState,
    pub tactical: TacticalState,
}

impl ObservationBuilder {
    pub fn build(&self) -> Observation {
        let mut out = [0.0f32; OBSERVATION_DIM];

        write(&mut out, SELF_RANGE.start, &self.self_state.values());
        for (i, enemy) in self.enemies.iter().enumerate() {
            write(&mut out, slot::enemy(i), &enemy.values());
        }
        write(&mut out, ENVIRONMENT_RANGE.start, &self.environment.values());
        write(&mut out, TEAM_RANGE.start, &self.team.values());
        write(&mut out, TACTICAL_RANGE.start, &self.tactical.values());

        Observation(out)
    }
}

fn write(out: &mut [f32; OBSERVATION_DIM], start: usize, values: &[f64]) {
    for (dst, &v) in out[start..start + values.len()].iter_mut().zip(values) {
        *dst = (v as f32).clamp(-1.0, 1.0);
    }
}
