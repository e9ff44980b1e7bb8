//! Core types and definitions for the CALYPSO combat simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity components, actions, the observation layout, episode info,
//! errors and tuning constants. It contains no simulation behavior.

pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod observation;
pub mod state;
pub mod types;
