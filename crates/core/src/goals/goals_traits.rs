use crate::errors::Result;
use crate::goals::goal_id::GoalId;
use crate::goals::goals_model::{
    FundsAdjustment, Goal, GoalTotals, GoalUpdate, NewGoal, Pagination,
};
use async_trait::async_trait;

/// Trait for goal repository operations
///
/// Every method is a single store round-trip. Write methods that target an
/// existing record report how many records matched so the service can tell a
/// missing goal apart from a successful no-op.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn list_goals(&self, page: Pagination) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &GoalId) -> Result<Option<Goal>>;
    async fn insert_goal(&self, new_goal: NewGoal) -> Result<GoalId>;
    async fn replace_goal(&self, goal_id: GoalId, update: GoalUpdate) -> Result<usize>;
    async fn set_current_amount(&self, goal_id: GoalId, current_amount: f64) -> Result<usize>;
    async fn delete_goal(&self, goal_id: GoalId) -> Result<usize>;
}

/// Trait for goal service operations
///
/// Identifiers arrive as raw strings and are parsed before any store access.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn list_goals(&self, page: Pagination) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<GoalId>;
    async fn update_goal(&self, goal_id: &str, update: GoalUpdate) -> Result<()>;
    async fn adjust_funds(&self, goal_id: &str, adjustment: FundsAdjustment) -> Result<f64>;
    async fn delete_goal(&self, goal_id: &str) -> Result<()>;
    fn get_totals(&self) -> Result<GoalTotals>;
}
