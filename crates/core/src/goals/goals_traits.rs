use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use crate::profiles::AuthContext;
use async_trait::async_trait;

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    /// Lists goals owned by `owner_id`, newest first.
    fn list_goals_by_owner(&self, owner_id: &str) -> Result<Vec<Goal>>;
    /// Lists every goal across all owners (leaderboard input).
    fn list_all_goals(&self) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn insert_new_goal(&self, owner_id: String, new_goal: NewGoal) -> Result<Goal>;
    async fn set_completed(&self, goal_id: String, completed: bool) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, ctx: &AuthContext, owner_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, ctx: &AuthContext, new_goal: NewGoal) -> Result<Goal>;
    async fn set_completed(
        &self,
        ctx: &AuthContext,
        goal_id: &str,
        completed: bool,
    ) -> Result<Goal>;
    async fn delete_goal(&self, ctx: &AuthContext, goal_id: &str) -> Result<()>;
}
