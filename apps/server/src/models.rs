//! Wire types for the HTTP API. These mirror the core models and carry the
//! OpenAPI schema annotations.

use savings_goals_core::goals as core_goals;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl From<core_goals::Goal> for Goal {
    fn from(g: core_goals::Goal) -> Self {
        Self {
            id: g.id.to_string(),
            name: g.name,
            target_amount: g.target_amount,
            current_amount: g.current_amount,
        }
    }
}

/// Request body for both creating and fully replacing a goal.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GoalPayload {
    pub name: String,
    /// Must be greater than zero.
    pub target_amount: f64,
    /// Must be greater than or equal to zero.
    pub current_amount: f64,
}

impl From<GoalPayload> for core_goals::NewGoal {
    fn from(p: GoalPayload) -> Self {
        Self {
            name: p.name,
            target_amount: p.target_amount,
            current_amount: p.current_amount,
        }
    }
}

impl From<GoalPayload> for core_goals::GoalUpdate {
    fn from(p: GoalPayload) -> Self {
        Self {
            name: p.name,
            target_amount: p.target_amount,
            current_amount: p.current_amount,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
pub struct FundsPayload {
    /// Amount to add (positive) or withdraw (negative). Must be non-zero.
    pub amount: f64,
}

impl From<FundsPayload> for core_goals::FundsAdjustment {
    fn from(p: FundsPayload) -> Self {
        Self { amount: p.amount }
    }
}

#[derive(Deserialize, IntoParams, Debug, Clone, Copy, Default)]
#[into_params(parameter_in = Query)]
pub struct ListGoalsQuery {
    /// Maximum number of goals to return (default 100).
    pub limit: Option<u32>,
    /// Number of goals to skip (default 0).
    pub skip: Option<u32>,
}

impl From<ListGoalsQuery> for core_goals::Pagination {
    fn from(q: ListGoalsQuery) -> Self {
        let defaults = core_goals::Pagination::default();
        Self {
            limit: q.limit.unwrap_or(defaults.limit),
            skip: q.skip.unwrap_or(defaults.skip),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreatedGoal {
    pub id: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct FundsUpdated {
    pub message: String,
    pub current_amount: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy)]
pub struct GoalTotals {
    pub current_total: f64,
    pub target_total: f64,
}

impl From<core_goals::GoalTotals> for GoalTotals {
    fn from(t: core_goals::GoalTotals) -> Self {
        Self {
            current_total: t.current_total,
            target_total: t.target_total,
        }
    }
}
