//! Derived leaderboard models. Never persisted; always recomputed from
//! the current goal set.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::goals::Goal;

/// Per-user stake accounting, derived from the user's goal set.
///
/// Invariant: `total_stake == completed_stake() + potential_loss`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub goal_count: usize,
    pub completed_count: usize,
    pub total_stake: Decimal,
    pub potential_loss: Decimal,
}

impl UserSummary {
    /// Folds one goal into the summary.
    pub fn add_goal(&mut self, goal: &Goal) {
        self.goal_count += 1;
        self.total_stake += goal.stake;
        if goal.completed {
            self.completed_count += 1;
        } else {
            self.potential_loss += goal.stake;
        }
    }

    /// Stake already secured by completed goals.
    pub fn completed_stake(&self) -> Decimal {
        self.total_stake - self.potential_loss
    }
}

/// One leaderboard row: a user plus their summary and 1-based rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub rank: usize,
    #[serde(flatten)]
    pub summary: UserSummary,
}
