use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, NewGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::profiles::AuthContext;

/// Service for managing goals.
///
/// Every operation takes an explicit [`AuthContext`]; there is no ambient
/// session state. Ownership is enforced here, before the repository is
/// touched for mutations.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl GoalService {
    /// Creates a new GoalService instance
    pub fn new(
        repository: Arc<dyn GoalRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }

    fn authorize_owner(ctx: &AuthContext, owner_id: &str) -> Result<()> {
        if ctx.user_id != owner_id {
            return Err(Error::access(format!(
                "user '{}' does not own goals of '{}'",
                ctx.user_id, owner_id
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GoalServiceTrait for GoalService {
    /// Lists the owner's goals, newest first.
    fn get_goals(&self, ctx: &AuthContext, owner_id: &str) -> Result<Vec<Goal>> {
        Self::authorize_owner(ctx, owner_id)?;
        self.repository.list_goals_by_owner(owner_id)
    }

    /// Creates a new goal owned by the authenticated user.
    async fn create_goal(&self, ctx: &AuthContext, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        debug!("Creating goal for owner {}", ctx.user_id);

        let goal = self
            .repository
            .insert_new_goal(ctx.user_id.clone(), new_goal)
            .await?;
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![goal.owner_id.clone()]));
        Ok(goal)
    }

    /// Sets the completion flag on a goal.
    ///
    /// Setting the flag to its current value is a successful no-op: no
    /// write is issued and no event is emitted.
    async fn set_completed(
        &self,
        ctx: &AuthContext,
        goal_id: &str,
        completed: bool,
    ) -> Result<Goal> {
        let goal = self.repository.get_goal(goal_id)?;
        Self::authorize_owner(ctx, &goal.owner_id)?;

        if goal.completed == completed {
            return Ok(goal);
        }

        let updated = self
            .repository
            .set_completed(goal_id.to_string(), completed)
            .await?;
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![updated.owner_id.clone()]));
        Ok(updated)
    }

    /// Deletes a goal permanently.
    ///
    /// Reports `NotFound` when the goal is already absent; callers decide
    /// whether double-delete is ignorable (the HTTP layer treats it as
    /// success).
    async fn delete_goal(&self, ctx: &AuthContext, goal_id: &str) -> Result<()> {
        let goal = self.repository.get_goal(goal_id)?;
        Self::authorize_owner(ctx, &goal.owner_id)?;

        self.repository.delete_goal(goal_id.to_string()).await?;
        self.event_sink
            .emit(DomainEvent::goals_changed(vec![goal.owner_id]));
        Ok(())
    }
}
