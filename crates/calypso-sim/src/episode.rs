//! Episode bookkeeping and the entity roster.
//!
//! Stored on the `SimulationEngine`, NOT as ECS entities.

use hecs::{Entity, World};

use calypso_core::components::{Archetype, Boss, Enemy, SpiderMine};
use calypso_core::enums::{EnemyTier, EpisodeOutcome, RiflemanRole, WeaponType};
use calypso_core::types::{Position, SimTime};

/// Independent spawn timers, in simulated seconds.
#[derive(Debug, Clone, Default)]
pub struct SpawnTimers {
    pub wave: f64,
    pub marksman: f64,
    pub mine: f64,
}

/// Mutable episode state. Created by reset, discarded by the next reset.
#[derive(Debug, Clone, Default)]
pub struct Episode {
    pub time: SimTime,
    /// Steps taken this episode.
    pub steps: u32,
    /// Reward accumulated so far, terminal bonuses included.
    pub total_reward: f64,
    pub time_since_alarm: f64,
    pub timers: SpawnTimers,
    pub damage_dealt: f64,
    pub damage_taken: f64,
    /// Set once the episode terminates or truncates.
    pub outcome: Option<EpisodeOutcome>,
}

impl Episode {
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Entities spawned this episode, in insertion order.
///
/// Dead enemies and mines are never despawned, so a roster index stays
/// valid for the whole episode.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub enemies: Vec<Entity>,
    pub mines: Vec<Entity>,
    pub boss: Option<Entity>,
}

/// Copy of one living roster enemy, taken at the start of a system.
#[derive(Debug, Clone)]
pub struct EnemyView {
    pub entity: Entity,
    pub index: usize,
    pub position: Position,
    pub health: f64,
    pub in_cover: bool,
    pub weapon: WeaponType,
    pub tier: EnemyTier,
    pub role: Option<RiflemanRole>,
    pub has_shield: bool,
    pub shield_active: bool,
    pub shield_hp: f64,
    pub aiming: bool,
}

impl Roster {
    /// Living roster enemies in insertion order.
    pub fn living_enemies(&self, world: &World) -> Vec<EnemyView> {
        self.enemies
            .iter()
            .filter_map(|&entity| {
                let mut query = world
                    .query_one::<(&Enemy, &Position, &Archetype)>(entity)
                    .ok()?;
                let (enemy, position, archetype) = query.get()?;
                if !enemy.alive {
                    return None;
                }
                Some(EnemyView {
                    entity,
                    index: enemy.index,
                    position: *position,
                    health: enemy.health,
                    in_cover: enemy.in_cover,
                    weapon: enemy.weapon,
                    tier: archetype.tier(),
                    role: archetype.role(),
                    has_shield: archetype.has_shield(),
                    shield_active: archetype.shield_active(),
                    shield_hp: archetype.shield().map_or(0.0, |s| s.shield_hp),
                    aiming: archetype.is_aiming(),
                })
            })
            .collect()
    }

    /// Positions of living spider mines in insertion order.
    pub fn living_mines(&self, world: &World) -> Vec<(Entity, Position)> {
        self.mines
            .iter()
            .filter_map(|&entity| {
                let mut query = world.query_one::<(&SpiderMine, &Position)>(entity).ok()?;
                let (mine, position) = query.get()?;
                mine.alive.then_some((entity, *position))
            })
            .collect()
    }

    /// The boss and its position, while it is alive.
    pub fn living_boss(&self, world: &World) -> Option<(Boss, Position)> {
        let entity = self.boss?;
        let mut query = world.query_one::<(&Boss, &Position)>(entity).ok()?;
        let (boss, position) = query.get()?;
        boss.alive.then(|| (boss.clone(), *position))
    }
}
