//! Pure aggregation and ranking functions.
//!
//! These never perform I/O and never fail on well-formed input: partial or
//! empty goal sets degrade to zero-valued summaries so the leaderboard
//! stays renderable even when one user's data is incomplete.

use std::collections::HashMap;

use crate::goals::Goal;
use crate::profiles::Profile;

use super::leaderboard_model::{LeaderboardEntry, UserSummary};

/// Computes the stake summary for one user's goal set in a single pass.
///
/// An empty slice yields the all-zero summary.
pub fn summarize(goals: &[Goal]) -> UserSummary {
    let mut summary = UserSummary::default();
    for goal in goals {
        summary.add_goal(goal);
    }
    summary
}

/// Ranks all users by completed-goal count, tie-broken by total stake.
///
/// Profiles with zero goals are included with all-zero summaries. Goals
/// whose owner has no profile are ignored. The sort is stable, so entries
/// with fully equal keys keep the input profile order and the result is
/// deterministic for a deterministic input.
pub fn rank_users(all_goals: &[Goal], profiles: &[Profile]) -> Vec<LeaderboardEntry> {
    let mut by_owner: HashMap<&str, UserSummary> = HashMap::new();
    for goal in all_goals {
        by_owner
            .entry(goal.owner_id.as_str())
            .or_default()
            .add_goal(goal);
    }

    let mut entries: Vec<LeaderboardEntry> = profiles
        .iter()
        .map(|profile| LeaderboardEntry {
            user_id: profile.id.clone(),
            display_name: profile.display_name.clone(),
            rank: 0,
            summary: by_owner.remove(profile.id.as_str()).unwrap_or_default(),
        })
        .collect();

    entries.sort_by(|a, b| {
        b.summary
            .completed_count
            .cmp(&a.summary.completed_count)
            .then_with(|| b.summary.total_stake.cmp(&a.summary.total_stake))
    });

    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position + 1;
    }
    entries
}

/// Returns a new goal set with exactly the targeted goal's completion flag
/// flipped; every other goal is carried through unchanged.
///
/// Used by consumers to update an in-memory view optimistically while the
/// storage round-trip is in flight. Toggling twice restores the input.
pub fn toggle_completion_view(goals: Vec<Goal>, goal_id: &str) -> Vec<Goal> {
    goals
        .into_iter()
        .map(|mut goal| {
            if goal.id == goal_id {
                goal.completed = !goal.completed;
            }
            goal
        })
        .collect()
}
