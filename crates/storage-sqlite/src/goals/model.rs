//! Database models for goals.

use diesel::prelude::*;
use savings_goals_core::errors::{DatabaseError, Error, Result};
use savings_goals_core::goals::{Goal, GoalId, GoalUpdate, NewGoal};

/// Database model for goals
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

/// Changeset replacing every mutable column of a goal
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
pub struct GoalChangesetDB {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

impl GoalDB {
    pub fn from_new(goal_id: GoalId, new_goal: NewGoal) -> Self {
        Self {
            id: goal_id.to_string(),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: new_goal.current_amount,
        }
    }
}

// Conversion to domain models
impl TryFrom<GoalDB> for Goal {
    type Error = Error;

    fn try_from(db: GoalDB) -> Result<Self> {
        let id = db.id.parse::<GoalId>().map_err(|e| {
            Error::Database(DatabaseError::Internal(format!("Corrupt goal row: {}", e)))
        })?;
        Ok(Self {
            id,
            name: db.name,
            target_amount: db.target_amount,
            current_amount: db.current_amount,
        })
    }
}

impl From<GoalUpdate> for GoalChangesetDB {
    fn from(update: GoalUpdate) -> Self {
        Self {
            name: update.name,
            target_amount: update.target_amount,
            current_amount: update.current_amount,
        }
    }
}
