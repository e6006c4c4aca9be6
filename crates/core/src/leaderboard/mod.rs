//! Leaderboard module - stake accounting and user ranking.
//!
//! The engine functions are pure: they consume goal and profile sets and
//! produce derived summaries and a total ordering, with no hidden state
//! and no I/O. The service re-queries authoritative data on every call.

pub mod leaderboard_engine;
mod leaderboard_model;
mod leaderboard_service;

#[cfg(test)]
mod leaderboard_engine_tests;

pub use leaderboard_engine::{rank_users, summarize, toggle_completion_view};
pub use leaderboard_model::{LeaderboardEntry, UserSummary};
pub use leaderboard_service::{LeaderboardService, LeaderboardServiceTrait};
