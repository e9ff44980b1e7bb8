//! Error types for configuration and the agent boundary.

/// Rejected simulator configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported initial tier {0}, expected 1 or 2")]
    UnsupportedTier(u8),

    #[error("alarm level {0} out of range 1..=3")]
    AlarmLevelOutOfRange(u8),

    #[error("unknown area type code {0}")]
    UnknownAreaType(u8),

    #[error("max_steps must be positive")]
    ZeroMaxSteps,

    #[error("player skill {0} outside [0, 1]")]
    PlayerSkillOutOfRange(f64),
}

/// Caller errors surfaced by the simulation engine.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("action index {0} outside 0..16")]
    InvalidAction(usize),

    #[error("step called before reset")]
    NotReset,

    #[error("episode already finished, call reset")]
    EpisodeFinished,
}
