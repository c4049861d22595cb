use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::errors::{DatabaseError, Error, Result};
use crate::goals::goal_id::GoalId;
use crate::goals::goals_model::{
    FundsAdjustment, Goal, GoalTotals, GoalUpdate, NewGoal, Pagination,
};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    fn not_found(goal_id: &GoalId) -> Error {
        Error::Database(DatabaseError::NotFound(format!("Goal {} not found", goal_id)))
    }

    fn ensure_matched(goal_id: &GoalId, matched: usize) -> Result<()> {
        if matched == 0 {
            return Err(Self::not_found(goal_id));
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn list_goals(&self, page: Pagination) -> Result<Vec<Goal>> {
        if page.limit == 0 {
            return Ok(Vec::new());
        }
        self.goal_repo.list_goals(page)
    }

    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let goal_id: GoalId = goal_id.parse()?;
        self.goal_repo
            .get_goal(&goal_id)?
            .ok_or_else(|| Self::not_found(&goal_id))
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<GoalId> {
        new_goal.validate()?;
        let goal_id = self.goal_repo.insert_goal(new_goal).await?;
        info!("Created goal {}", goal_id);
        Ok(goal_id)
    }

    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<()> {
        let goal_id: GoalId = goal_id.parse()?;
        update.validate()?;
        let matched = self.goal_repo.replace_goal(goal_id, update).await?;
        Self::ensure_matched(&goal_id, matched)
    }

    /// Reads the goal, applies the adjustment and writes the new amount back.
    ///
    /// The read and the write are separate store operations, so two concurrent
    /// adjustments on the same goal can lose one of the updates.
    async fn adjust_funds(&self, goal_id: &str, adjustment: FundsAdjustment) -> Result<f64> {
        let goal_id: GoalId = goal_id.parse()?;
        adjustment.validate()?;

        let goal = self
            .goal_repo
            .get_goal(&goal_id)?
            .ok_or_else(|| Self::not_found(&goal_id))?;
        let new_amount = adjustment.apply_to(goal.current_amount)?;

        let matched = self
            .goal_repo
            .set_current_amount(goal_id, new_amount)
            .await?;
        Self::ensure_matched(&goal_id, matched)?;
        debug!(
            "Adjusted funds of goal {} by {}: {} -> {}",
            goal_id, adjustment.amount, goal.current_amount, new_amount
        );
        Ok(new_amount)
    }

    async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        let goal_id: GoalId = goal_id.parse()?;
        let deleted = self.goal_repo.delete_goal(goal_id).await?;
        Self::ensure_matched(&goal_id, deleted)?;
        info!("Deleted goal {}", goal_id);
        Ok(())
    }

    /// Totals over the first default-sized page of goals only.
    fn get_totals(&self) -> Result<GoalTotals> {
        let goals = self.list_goals(Pagination::default())?;
        GoalTotals::from_goals(&goals)?
            .ok_or_else(|| Error::Database(DatabaseError::NotFound("No goals found".to_string())))
    }
}
