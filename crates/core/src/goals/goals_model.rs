//! Goals domain models.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goal_id::GoalId;
use crate::errors::{Error, Result, ValidationError};

/// Default page size for listing goals.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl NewGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.name, self.target_amount, self.current_amount)
    }
}

/// Replacement values for every mutable field of an existing goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl GoalUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.name, self.target_amount, self.current_amount)
    }
}

impl From<NewGoal> for GoalUpdate {
    fn from(goal: NewGoal) -> Self {
        Self {
            name: goal.name,
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
        }
    }
}

fn validate_goal_fields(name: &str, target_amount: f64, current_amount: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::field("name", "cannot be empty").into());
    }
    if !target_amount.is_finite() || target_amount <= 0.0 {
        return Err(ValidationError::field("target_amount", "must be greater than zero").into());
    }
    if !current_amount.is_finite() || current_amount < 0.0 {
        return Err(ValidationError::field(
            "current_amount",
            "must be greater than or equal to zero",
        )
        .into());
    }
    Ok(())
}

/// A signed change applied to a goal's current amount.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FundsAdjustment {
    pub amount: f64,
}

impl FundsAdjustment {
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount == 0.0 {
            return Err(ValidationError::field("amount", "must be a non-zero number").into());
        }
        Ok(())
    }

    /// Applies the adjustment to `current`, rejecting results below zero or
    /// beyond the representable range.
    pub fn apply_to(&self, current: f64) -> Result<f64> {
        let new_amount = current + self.amount;
        if !new_amount.is_finite() {
            return Err(ValidationError::InvalidInput(format!(
                "adjusting {} by {} overflows the amount range",
                current, self.amount
            ))
            .into());
        }
        if new_amount < 0.0 {
            return Err(Error::Validation(ValidationError::InsufficientFunds {
                available: current,
                requested: self.amount,
            }));
        }
        Ok(new_amount)
    }
}

/// Offset/limit window over the goals collection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub limit: u32,
    pub skip: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            skip: 0,
        }
    }
}

/// Aggregate amounts across goals, rounded to cents.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GoalTotals {
    pub current_total: f64,
    pub target_total: f64,
}

impl GoalTotals {
    /// Sums current and target amounts. Returns `Ok(None)` for an empty slice
    /// and an error when either sum leaves the finite range.
    pub fn from_goals(goals: &[Goal]) -> Result<Option<Self>> {
        if goals.is_empty() {
            return Ok(None);
        }
        let current: f64 = goals.iter().map(|g| g.current_amount).sum();
        let target: f64 = goals.iter().map(|g| g.target_amount).sum();
        if !current.is_finite() || !target.is_finite() {
            return Err(
                ValidationError::InvalidInput("goal totals overflow the amount range".into())
                    .into(),
            );
        }
        Ok(Some(Self {
            current_total: round_to_cents(current),
            target_total: round_to_cents(target),
        }))
    }
}

/// Rounds the exact binary value of `value` half-to-even at two decimal places,
/// so 2.675 (stored as 2.67499...) becomes 2.67. Values outside the decimal
/// range are returned unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
