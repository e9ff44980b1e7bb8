//! Per-tick systems operating on the simulation world.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only work) plus the engine state they need. They hold no state.

pub mod actions;
pub mod behavior;
pub mod observation;
pub mod spawner;
