//! Enemy AI for CALYPSO.
//!
//! Implements the per-archetype behavior state machines and the
//! tier and weapon stat tables used when units are spawned.

pub mod fsm;
pub mod profiles;

pub use calypso_core as core;

#[cfg(test)]
mod tests;
