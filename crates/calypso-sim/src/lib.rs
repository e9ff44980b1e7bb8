//! Simulation engine for CALYPSO.
//!
//! Owns the hecs world, executes the bot's action, ticks every enemy
//! behavior machine, runs the spawn schedule and encodes the 96-slot
//! observation. Completely headless and deterministic for a given seed.

pub mod combat;
pub mod engine;
pub mod episode;
pub mod systems;
pub mod world_setup;

pub use calypso_core as core;
pub use engine::{SimConfig, SimulationEngine, StepOutcome};
