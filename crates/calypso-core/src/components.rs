//! Entity components.
//!
//! Enemies, spider mines and the boss are hecs entities; the bot is a
//! singleton owned directly by the engine. Components are plain data:
//! combat math lives in the sim crate and behavior in the AI crate.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// The agent-controlled combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub health: f64,
    pub armor: f64,
    pub ammo: f64,
    pub position: Position,
    pub in_cover: bool,
    pub kills: u32,
}

/// Base stats shared by every enemy archetype.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Insertion index within the episode roster.
    pub index: usize,
    /// Normalized by the tier's max health.
    pub health: f64,
    pub armor: f64,
    pub accuracy: f64,
    pub weapon: WeaponType,
    /// Rounds in the magazine.
    pub ammo: u32,
    pub in_cover: bool,
    /// Flips to false exactly once; dead enemies stay in the roster.
    pub alive: bool,
}

/// Archetype-specific extension of an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Archetype {
    Grunt(GruntMind),
    Rifleman(RiflemanMind),
    Marksman(MarksmanMind),
    Shielded(ShieldUnit),
}

impl Archetype {
    pub fn tier(&self) -> EnemyTier {
        match self {
            Archetype::Grunt(_) => EnemyTier::Tier1,
            Archetype::Rifleman(_) => EnemyTier::Tier2,
            Archetype::Marksman(_) => EnemyTier::Marksman,
            Archetype::Shielded(_) => EnemyTier::Shielded,
        }
    }

    pub fn shield(&self) -> Option<&ShieldUnit> {
        match self {
            Archetype::Shielded(unit) => Some(unit),
            _ => None,
        }
    }

    pub fn shield_mut(&mut self) -> Option<&mut ShieldUnit> {
        match self {
            Archetype::Shielded(unit) => Some(unit),
            _ => None,
        }
    }

    /// Carries a shield generator that has not been stripped.
    pub fn has_shield(&self) -> bool {
        self.shield().is_some_and(|s| s.has_shield)
    }

    /// Shield generator up and the pool not empty.
    pub fn shield_active(&self) -> bool {
        self.shield().is_some_and(|s| s.has_shield && s.shield_hp > 0.0)
    }

    pub fn role(&self) -> Option<RiflemanRole> {
        match self {
            Archetype::Rifleman(mind) => Some(mind.role),
            _ => None,
        }
    }

    /// Whether the unit is currently laying fire on the bot.
    pub fn is_aiming(&self) -> bool {
        matches!(self, Archetype::Grunt(mind) if mind.state == GruntState::PanicFire)
    }
}

/// Tier 1 state machine memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GruntMind {
    pub state: GruntState,
    /// Seconds spent in the current state.
    pub state_timer: f64,
}

/// Tier 2 memory. The policy is re-evaluated every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiflemanMind {
    pub role: RiflemanRole,
    pub state_timer: f64,
}

/// Marksman memory. Sniping has no internal state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarksmanMind {
    pub state_timer: f64,
}

/// Shielded special: shield pool independent of health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldUnit {
    pub variant: ShieldVariant,
    /// Cleared permanently when the weak point breaks.
    pub has_shield: bool,
    /// Normalized by the variant's raw shield points.
    pub shield_hp: f64,
    /// Seconds the pool has been empty, for regeneration.
    pub regen_timer: f64,
    pub weak_point: WeakPoint,
}

/// Separately tracked weak point pool, normalized to [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakPoint {
    pub location: WeakPointLocation,
    pub hp: f64,
}

/// Self-propelled explosive that hunts the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpiderMine {
    pub body_health: f64,
    pub leg_health: [f64; 4],
    pub state: MineState,
    pub alive: bool,
}

impl SpiderMine {
    pub fn is_exploding(&self) -> bool {
        matches!(self.state, MineState::Exploding { .. })
    }
}

/// The Juggernaut. At most one per episode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub health: f64,
    pub armor: f64,
    /// Current damage resistance; raised while in defense.
    pub armor_current: f64,
    pub state: BossState,
    pub state_timer: f64,
    pub stun_timer: f64,
    pub weak_points_visible: bool,
    /// Seconds since the last defense stance ended.
    pub since_defense: f64,
    pub alive: bool,
}

impl Boss {
    pub fn is_stunned(&self) -> bool {
        self.state == BossState::Stunned
    }
}
