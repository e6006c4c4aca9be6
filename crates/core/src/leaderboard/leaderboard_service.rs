use log::debug;
use std::sync::Arc;

use super::leaderboard_engine;
use super::leaderboard_model::{LeaderboardEntry, UserSummary};
use crate::errors::{Error, Result};
use crate::goals::GoalRepositoryTrait;
use crate::profiles::{AuthContext, ProfileRepositoryTrait};

/// Trait for leaderboard service operations
pub trait LeaderboardServiceTrait: Send + Sync {
    fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>>;
    fn get_user_summary(&self, ctx: &AuthContext, owner_id: &str) -> Result<UserSummary>;
}

/// Service producing derived summaries and rankings.
///
/// Every call re-queries the authoritative goal and profile sets and
/// recomputes from scratch. Aggregates are never cached or patched
/// incrementally, so out-of-order mutation acknowledgments cannot leave
/// stale numbers behind.
pub struct LeaderboardService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    profile_repository: Arc<dyn ProfileRepositoryTrait>,
}

impl LeaderboardService {
    /// Creates a new LeaderboardService instance
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        profile_repository: Arc<dyn ProfileRepositoryTrait>,
    ) -> Self {
        Self {
            goal_repository,
            profile_repository,
        }
    }
}

impl LeaderboardServiceTrait for LeaderboardService {
    fn get_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        debug!("Recomputing leaderboard from authoritative goal set");
        let goals = self.goal_repository.list_all_goals()?;
        let profiles = self.profile_repository.list_profiles()?;
        Ok(leaderboard_engine::rank_users(&goals, &profiles))
    }

    fn get_user_summary(&self, ctx: &AuthContext, owner_id: &str) -> Result<UserSummary> {
        if ctx.user_id != owner_id {
            return Err(Error::access(format!(
                "user '{}' cannot read the summary of '{}'",
                ctx.user_id, owner_id
            )));
        }
        let goals = self.goal_repository.list_goals_by_owner(owner_id)?;
        Ok(leaderboard_engine::summarize(&goals))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::errors::Error;
    use crate::goals::{Goal, NewGoal};
    use crate::profiles::{Credential, NewProfile, Profile};

    struct StaticGoalRepository {
        goals: Mutex<Vec<Goal>>,
    }

    #[async_trait::async_trait]
    impl GoalRepositoryTrait for StaticGoalRepository {
        fn list_goals_by_owner(&self, owner_id: &str) -> crate::Result<Vec<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .iter()
                .filter(|g| g.owner_id == owner_id)
                .cloned()
                .collect())
        }

        fn list_all_goals(&self) -> crate::Result<Vec<Goal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        fn get_goal(&self, goal_id: &str) -> crate::Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("goal {goal_id}")))
        }

        async fn insert_new_goal(
            &self,
            _owner_id: String,
            _new_goal: NewGoal,
        ) -> crate::Result<Goal> {
            unimplemented!("read-only fixture")
        }

        async fn set_completed(&self, _goal_id: String, _completed: bool) -> crate::Result<Goal> {
            unimplemented!("read-only fixture")
        }

        async fn delete_goal(&self, goal_id: String) -> crate::Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            let before = goals.len();
            goals.retain(|g| g.id != goal_id);
            if goals.len() == before {
                return Err(Error::not_found(format!("goal {goal_id}")));
            }
            Ok(before - goals.len())
        }
    }

    struct StaticProfileRepository {
        profiles: Vec<Profile>,
    }

    #[async_trait::async_trait]
    impl ProfileRepositoryTrait for StaticProfileRepository {
        fn list_profiles(&self) -> crate::Result<Vec<Profile>> {
            Ok(self.profiles.clone())
        }

        fn get_profile(&self, profile_id: &str) -> crate::Result<Profile> {
            self.profiles
                .iter()
                .find(|p| p.id == profile_id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("profile {profile_id}")))
        }

        fn find_credential_by_email(&self, _email: &str) -> crate::Result<Option<Credential>> {
            Ok(None)
        }

        async fn insert_profile(&self, _new_profile: NewProfile) -> crate::Result<Profile> {
            unimplemented!("read-only fixture")
        }
    }

    fn fixture() -> (Arc<StaticGoalRepository>, LeaderboardService) {
        let now = Utc::now().naive_utc();
        let goal_repository = Arc::new(StaticGoalRepository {
            goals: Mutex::new(vec![
                Goal {
                    id: "g1".into(),
                    owner_id: "u1".into(),
                    description: "ship the release".into(),
                    stake: dec!(50),
                    completed: true,
                    created_at: now,
                },
                Goal {
                    id: "g2".into(),
                    owner_id: "u1".into(),
                    description: "write the docs".into(),
                    stake: dec!(30),
                    completed: false,
                    created_at: now,
                },
                Goal {
                    id: "g3".into(),
                    owner_id: "u2".into(),
                    description: "fix the flaky test".into(),
                    stake: dec!(40),
                    completed: true,
                    created_at: now,
                },
            ]),
        });
        let profile_repository = Arc::new(StaticProfileRepository {
            profiles: vec![
                Profile {
                    id: "u1".into(),
                    email: "u1@example.com".into(),
                    display_name: "One".into(),
                    created_at: now,
                },
                Profile {
                    id: "u2".into(),
                    email: "u2@example.com".into(),
                    display_name: "Two".into(),
                    created_at: now,
                },
            ],
        });
        let service = LeaderboardService::new(goal_repository.clone(), profile_repository);
        (goal_repository, service)
    }

    #[tokio::test]
    async fn leaderboard_recomputes_from_authoritative_set() {
        let (goal_repository, service) = fixture();

        let board = service.get_leaderboard().unwrap();
        assert_eq!(board[0].user_id, "u1");
        assert_eq!(board[0].summary.total_stake, dec!(80));

        // A mutation in storage is visible on the next recompute.
        goal_repository.delete_goal("g1".to_string()).await.unwrap();
        let board = service.get_leaderboard().unwrap();
        assert_eq!(board[0].user_id, "u2");
    }

    #[tokio::test]
    async fn deleting_a_missing_goal_leaves_outputs_unchanged() {
        let (goal_repository, service) = fixture();
        let before = service.get_leaderboard().unwrap();

        let err = goal_repository
            .delete_goal("missing".to_string())
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(service.get_leaderboard().unwrap(), before);
    }

    #[test]
    fn user_summary_is_ownership_checked() {
        let (_, service) = fixture();

        let summary = service
            .get_user_summary(&AuthContext::new("u1"), "u1")
            .unwrap();
        assert_eq!(summary.potential_loss, dec!(30));

        assert!(matches!(
            service.get_user_summary(&AuthContext::new("u2"), "u1"),
            Err(Error::Access(_))
        ));
    }
}
