//! Simulation constants and tuning parameters.
//!
//! All distances are in normalized arena units and all pools (health,
//! armor, ammo, shield) are normalized to [0, 1].

/// Simulated seconds per tick (30 Hz nominal).
pub const DT: f64 = 0.033;

// --- Agent boundary ---

/// Length of the observation vector.
pub const OBSERVATION_DIM: usize = 96;

/// Number of discrete bot actions.
pub const ACTION_COUNT: usize = 16;

/// Number of enemy slots encoded in the observation.
pub const MAX_ENEMY_SLOTS: usize = 3;

/// Default episode length in steps.
pub const DEFAULT_MAX_STEPS: u32 = 2000;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

// --- Bot ---

pub const BOT_START_X: f64 = 0.5;
pub const BOT_START_Y: f64 = 0.5;
pub const BOT_START_ARMOR: f64 = 0.0;

// --- Episode rewards ---

/// Added every tick the bot is still alive.
pub const SURVIVAL_BONUS: f64 = 0.01;

/// Applied on the tick the bot dies.
pub const DEATH_PENALTY: f64 = -10.0;

/// Applied on the tick the last enemy (and boss, if present) dies.
pub const VICTORY_BONUS: f64 = 30.0;

// --- Hit model ---

pub const HIT_CHANCE_BASE: f64 = 0.8;
pub const HIT_CHANCE_FALLOFF: f64 = 0.5;
pub const HIT_CHANCE_FLOOR: f64 = 0.2;

/// Hit chance multiplier against a target in cover.
pub const COVER_HIT_FACTOR: f64 = 0.5;

/// Hit chance multiplier against a target with an active shield.
pub const SHIELD_HIT_FACTOR: f64 = 0.7;

/// Fraction of nominal damage that gets through a shield.
pub const SHIELD_DAMAGE_FACTOR: f64 = 0.3;

// --- Kill rewards ---

pub const KILL_REWARD_TIER_1: f64 = 5.0;
pub const KILL_REWARD_TIER_2: f64 = 8.0;
pub const KILL_REWARD_MARKSMAN: f64 = 10.0;
pub const KILL_REWARD_SHIELDED: f64 = 15.0;
pub const KILL_REWARD_BOSS: f64 = 50.0;

// --- Target selection ---

/// Enemies beyond this distance are never selected as targets.
pub const TARGET_MAX_RANGE: f64 = 0.8;
pub const TARGET_SHIELD_PENALTY: f64 = 0.3;
pub const TARGET_WOUNDED_THRESHOLD: f64 = 0.3;
pub const TARGET_WOUNDED_BONUS: f64 = 0.5;
pub const TARGET_MARKSMAN_BONUS: f64 = 0.4;

// --- Bot actions ---

pub const IDLE_REWARD: f64 = 0.01;

pub const ATTACK_AMMO_COST: f64 = 0.1;
pub const ATTACK_DAMAGE: f64 = 0.15;
pub const ATTACK_HIT_REWARD: f64 = 1.0;
pub const ATTACK_SHIELD_REWARD: f64 = 0.5;
pub const ATTACK_NO_TARGET_PENALTY: f64 = -0.05;

pub const EMPTY_MAGAZINE_PENALTY: f64 = -0.1;

pub const TAKE_COVER_REWARD: f64 = 0.5;
pub const ALREADY_IN_COVER_PENALTY: f64 = -0.01;

pub const FLEE_STEP: f64 = 0.15;
pub const FLEE_LOW_HEALTH: f64 = 0.3;
pub const FLEE_REWARD: f64 = 0.5;

pub const RELOAD_AMOUNT: f64 = 0.5;
pub const RELOAD_COVER_REWARD: f64 = 0.3;
pub const RELOAD_OPEN_REWARD: f64 = 0.1;
pub const RELOAD_FULL_PENALTY: f64 = -0.05;

pub const PATROL_STEP: f64 = 0.05;
pub const PATROL_REWARD: f64 = 0.02;

pub const INVESTIGATE_STEP: f64 = 0.05;
pub const INVESTIGATE_REWARD: f64 = 0.05;

/// ADVANCE or FLANK with nothing in targeting range.
pub const MOVE_NO_TARGET_PENALTY: f64 = -0.05;

pub const ADVANCE_STEP: f64 = 0.08;
pub const ADVANCE_REWARD: f64 = 0.1;

pub const FLANK_STEP: f64 = 0.12;
pub const FLANK_REWARD: f64 = 0.4;

pub const SUPPORT_JITTER: f64 = 0.05;
pub const SUPPORT_REWARD: f64 = 0.15;

pub const SUPPRESS_AMMO_COST: f64 = 0.2;
pub const SUPPRESS_RANGE: f64 = 0.7;
pub const SUPPRESS_COVER_REWARD: f64 = 0.3;

pub const PEEK_AMMO_COST: f64 = 0.05;
pub const PEEK_HIT_CHANCE: f64 = 0.4;
pub const PEEK_DAMAGE: f64 = 0.08;
pub const PEEK_HIT_REWARD: f64 = 0.6;
pub const PEEK_MISS_REWARD: f64 = 0.1;
pub const PEEK_EXPOSED_PENALTY: f64 = -0.1;

pub const WEAK_POINT_BOSS_HIT_CHANCE: f64 = 0.6;
pub const WEAK_POINT_BOSS_DAMAGE: f64 = 0.2;
pub const WEAK_POINT_BOSS_HIT_REWARD: f64 = 5.0;
pub const WEAK_POINT_BOSS_MISS_REWARD: f64 = 0.5;
pub const WEAK_POINT_HIT_CHANCE: f64 = 0.4;
pub const WEAK_POINT_DAMAGE: f64 = 30.0 / WEAK_POINT_RAW_HP;
pub const WEAK_POINT_BREAK_REWARD: f64 = 3.0;
pub const WEAK_POINT_HIT_REWARD: f64 = 1.0;
pub const WEAK_POINT_MISS_REWARD: f64 = 0.2;
pub const NO_TARGET_PENALTY: f64 = -0.1;

pub const EVADE_TRIGGER_RANGE: f64 = 0.3;
pub const EVADE_STEP: f64 = 0.2;
pub const EVADE_REWARD: f64 = 1.0;

pub const COUNTER_SHIELD_STEP: f64 = 0.15;
pub const COUNTER_SHIELD_HIT_CHANCE: f64 = 0.3;
pub const COUNTER_SHIELD_DAMAGE: f64 = 40.0 / WEAK_POINT_RAW_HP;
pub const COUNTER_SHIELD_BREAK_REWARD: f64 = 4.0;
pub const COUNTER_SHIELD_HIT_REWARD: f64 = 1.5;
pub const COUNTER_SHIELD_REPOSITION_REWARD: f64 = 0.5;

pub const COORDINATE_RANGE: f64 = 0.6;
pub const COORDINATE_MIN_ENEMIES: usize = 2;
pub const COORDINATE_HIT_CHANCE: f64 = 0.25;
pub const COORDINATE_DAMAGE: f64 = 0.1;
pub const COORDINATE_REWARD: f64 = 0.8;

// --- Tier 1 grunt ---

pub const GRUNT_SIGHT_RANGE: f64 = 0.6;
pub const GRUNT_SURPRISE_SECS: f64 = 1.5;
pub const GRUNT_PANIC_FIRE_SECS: f64 = 2.0;
/// Panic fire lands with half the grunt's accuracy.
pub const GRUNT_PANIC_ACCURACY_FACTOR: f64 = 0.5;
pub const GRUNT_PANIC_DAMAGE: f64 = 0.02;
pub const GRUNT_FLEE_STEP: f64 = 0.08;
pub const GRUNT_FLEE_SECS: f64 = 1.0;
pub const GRUNT_PASSIVE_SECS: f64 = 7.0;

// --- Tier 2 riflemen ---

pub const SUPPRESSION_CLOSE_RANGE: f64 = 0.6;
pub const SUPPRESSION_COVER_FIRE_CHANCE: f64 = 0.3;
pub const SUPPRESSION_COVER_DAMAGE: f64 = 0.03 * 0.3;
pub const SUPPRESSION_FIRE_CHANCE: f64 = 0.2;
pub const SUPPRESSION_DAMAGE: f64 = 0.05;

pub const FLANKER_CLOSE_RANGE: f64 = 0.4;
pub const FLANKER_BURST_CHANCE: f64 = 0.15;
pub const FLANKER_DAMAGE: f64 = 0.12;
pub const FLANKER_STEP: f64 = 0.06;

// --- Marksman ---

pub const MARKSMAN_MIN_RANGE: f64 = 0.5;
pub const MARKSMAN_FIRE_CHANCE: f64 = 0.1;
pub const MARKSMAN_EXPOSED_DAMAGE: f64 = 0.15;
pub const MARKSMAN_COVER_DAMAGE: f64 = 0.05;

// --- Shielded special ---

pub const SHIELD_REGEN_SECS: f64 = 6.0;
pub const SHIELDED_HOLD_RANGE: f64 = 0.3;
pub const SHIELDED_STEP: f64 = 0.03;
pub const SHIELDED_ATTACK_RANGE: f64 = 0.5;
pub const SHIELDED_ATTACK_CHANCE: f64 = 0.1;
pub const SHIELDED_ATTACK_DAMAGE: f64 = 0.02;
/// Bot cover lets this fraction of the shielded unit's damage through.
pub const SHIELDED_COVER_FACTOR: f64 = 0.3;

pub const PLASMA_SHIELD_RAW_HP: f64 = 500.0;
pub const IRON_CLAD_SHIELD_RAW_HP: f64 = 2000.0;
pub const WEAK_POINT_RAW_HP: f64 = 125.0;

// --- Spider mine ---

pub const MINE_STEP: f64 = 0.04;
pub const MINE_ARM_RANGE: f64 = 0.15;
pub const MINE_FUSE_SECS: f64 = 2.5;
pub const MINE_BLAST_RADIUS: f64 = 0.2;
pub const MINE_BLAST_DAMAGE: f64 = 0.6;
pub const MINE_LEG_COUNT: usize = 4;

// --- Boss ---

pub const BOSS_SPAWN_X: f64 = 0.8;
pub const BOSS_SPAWN_Y: f64 = 0.5;
pub const BOSS_WALK_STEP: f64 = 0.02;
pub const BOSS_MELEE_RANGE: f64 = 0.25;
pub const BOSS_SWING_SECS: f64 = 0.8;
pub const BOSS_COMBO_HITS: u8 = 3;
pub const BOSS_LIGHT_SWING_RANGE: f64 = 0.2;
pub const BOSS_LIGHT_SWING_DAMAGE: f64 = 0.15;
pub const BOSS_HEAVY_SWING_RANGE: f64 = 0.25;
pub const BOSS_HEAVY_SWING_DAMAGE: f64 = 0.3;
pub const BOSS_LEAP_WINDUP_SECS: f64 = 4.0;
pub const BOSS_LEAP_MIN_RANGE: f64 = 0.4;
pub const BOSS_LEAP_SECS: f64 = 0.5;
pub const BOSS_LEAP_STEP: f64 = 0.15;
pub const BOSS_LANDING_RANGE: f64 = 0.3;
pub const BOSS_LANDING_DAMAGE: f64 = 0.2;
/// Landing this close to a wall stuns the boss.
pub const BOSS_WALL_MARGIN: f64 = 0.05;
pub const BOSS_STUN_SECS: f64 = 3.0;
pub const BOSS_ARMOR: f64 = 0.5;
pub const BOSS_DEFENSE_ARMOR: f64 = 0.9;
pub const BOSS_DEFENSE_SECS: f64 = 5.0;
pub const BOSS_DEFENSE_HEALTH: f64 = 0.5;
pub const BOSS_DEFENSE_COOLDOWN_SECS: f64 = 15.0;

// --- Spawning ---

pub const GRUNT_WAVE_SECS: f64 = 30.0;
pub const GRUNT_WAVE_MIN: u32 = 3;
pub const GRUNT_WAVE_MAX: u32 = 5;
pub const GRUNT_LIVING_CAP: usize = 5;

pub const MARKSMAN_WAVE_SECS: f64 = 90.0;
pub const MARKSMAN_WAVE_MIN: u32 = 1;
pub const MARKSMAN_WAVE_MAX: u32 = 2;

pub const MINE_ALARM_DELAY_SECS: f64 = 45.0;
pub const MINE_WAVE_SECS: f64 = 45.0;
pub const MINE_LIVING_CAP: usize = 3;

pub const TIER_2_SHIELDED_COUNT: usize = 2;
pub const TIER_2_SUPPRESSION_COUNT: usize = 4;
pub const TIER_2_FLANKER_COUNT: usize = 3;

// --- Observation encoding ---

/// Enemies within this distance are flagged visible.
pub const VISIBILITY_RANGE: f64 = 0.8;
/// Combat phase saturates after this many seconds since the alarm.
pub const COMBAT_PHASE_SECS: f64 = 60.0;
/// Divisor for tier codes.
pub const TIER_CODE_SCALE: f64 = 6.0;
/// Divisor for weapon codes.
pub const WEAPON_CODE_SCALE: f64 = 7.0;
/// Divisor for per-role and shielded headcounts.
pub const HEADCOUNT_SCALE: f64 = 5.0;
