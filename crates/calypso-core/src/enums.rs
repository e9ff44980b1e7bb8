//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Enemy difficulty/archetype classification.
///
/// The discriminants are the codes used in the observation vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    Tier1 = 1,
    Tier2 = 2,
    Marksman = 3,
    Shielded = 5,
    Boss = 6,
}

impl EnemyTier {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Enemy weapon catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    #[default]
    None = 0,
    HgPistol = 1,
    Smg = 2,
    ArBurst = 3,
    SgShotgun = 4,
    Dmr = 5,
    EnergyPistol = 6,
    KineticHammer = 7,
}

impl WeaponType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Arena layout class, fixed for an episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    /// Corridors.
    Narrow = 0,
    /// Rooms.
    #[default]
    Medium = 1,
    /// Halls and decks. The only layout where marksmen deploy.
    Wide = 2,
}

impl AreaType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AreaType {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AreaType::Narrow),
            1 => Ok(AreaType::Medium),
            2 => Ok(AreaType::Wide),
            other => Err(ConfigError::UnknownAreaType(other)),
        }
    }
}

/// The bot's sixteen discrete actions. Discriminants are the agent-facing indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // --- Basic ---
    Idle = 0,
    Attack = 1,
    TakeCover = 2,
    Flee = 3,
    Reload = 4,

    // --- Movement ---
    Patrol = 5,
    Investigate = 6,
    Advance = 7,

    // --- Tactics ---
    Flank = 8,
    Support = 9,
    Suppress = 10,
    PeekFire = 11,

    // --- Scenario-specific ---
    TargetWeakPoint = 12,
    EvadeExplosive = 13,
    CounterShield = 14,
    CoordinateAttack = 15,
}

impl Action {
    pub const ALL: [Action; 16] = [
        Action::Idle,
        Action::Attack,
        Action::TakeCover,
        Action::Flee,
        Action::Reload,
        Action::Patrol,
        Action::Investigate,
        Action::Advance,
        Action::Flank,
        Action::Support,
        Action::Suppress,
        Action::PeekFire,
        Action::TargetWeakPoint,
        Action::EvadeExplosive,
        Action::CounterShield,
        Action::CoordinateAttack,
    ];

    /// Map an agent-facing index to an action.
    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Tier 1 grunt behavior: panics on contact, then cycles between
/// panic fire and hiding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GruntState {
    #[default]
    Patrol,
    Surprised,
    PanicFire,
    Fleeing,
    Passive,
}

/// Tier 2 rifleman role, fixed at spawn by weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiflemanRole {
    /// AR burst rifle, pins the bot down.
    Suppression,
    /// Shotgun, closes in from the side.
    Flanker,
}

/// Shield generator variant carried by shielded specials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldVariant {
    /// 500 raw shield points, regenerates after the pool has been empty.
    Plasma,
    /// 2000 raw shield points, never regenerates.
    IronClad,
}

impl ShieldVariant {
    pub fn regenerates(self) -> bool {
        matches!(self, ShieldVariant::Plasma)
    }
}

/// Where the weak point of a shielded unit sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeakPointLocation {
    Back,
    LeftShoulder,
    RightShoulder,
    Head,
}

impl WeakPointLocation {
    pub const ALL: [WeakPointLocation; 4] = [
        WeakPointLocation::Back,
        WeakPointLocation::LeftShoulder,
        WeakPointLocation::RightShoulder,
        WeakPointLocation::Head,
    ];
}

/// Boss behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossState {
    #[default]
    Walking,
    /// Three-swing melee combo; `swings` counts completed swings.
    HammerCombo { swings: u8 },
    Leap,
    Defense,
    Stunned,
}

/// Spider mine lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum MineState {
    #[default]
    Approaching,
    /// Fuse lit; `fuse_secs` counts up to the detonation time.
    Exploding { fuse_secs: f64 },
}

/// How an episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    Defeat,
    Victory,
    /// Bot died on the same tick the last enemy fell.
    Draw,
    Truncated,
}
