//! Riddler Core - Castle game primitives
//!
//! This crate provides the building blocks shared by the warlord search:
//! - Troop allocations (one soldier count per castle)
//! - Random allocation generation
//! - Pairwise battles between allocations
//! - Configuration errors

pub mod allocation;
pub mod battle;
pub mod error;

// Re-exports for convenient access
pub use allocation::Allocation;
pub use battle::{battle, beats, BattleResult, Outcome};
pub use error::ConfigError;
