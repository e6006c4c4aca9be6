//! Stakeboard Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Stakeboard: goal
//! bookkeeping, per-user stake accounting, and leaderboard ranking.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod errors;
pub mod events;
pub mod goals;
pub mod leaderboard;
pub mod profiles;

// Re-export common types from the leaderboard module
pub use leaderboard::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
