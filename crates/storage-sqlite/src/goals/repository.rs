use savings_goals_core::goals::{Goal, GoalId, GoalRepositoryTrait, GoalUpdate, NewGoal, Pagination};
use savings_goals_core::Result;

use super::model::{GoalChangesetDB, GoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::goals;
use crate::schema::goals::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_goals(&self, page: Pagination) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        // Ids are time-ordered, so ordering by id yields insertion order.
        let goals_db = goals
            .order(id.asc())
            .limit(i64::from(page.limit))
            .offset(i64::from(page.skip))
            .select(GoalDB::as_select())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        goals_db.into_iter().map(Goal::try_from).collect()
    }

    fn get_goal(&self, goal_id: &GoalId) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        goals
            .find(goal_id.to_string())
            .select(GoalDB::as_select())
            .first::<GoalDB>(&mut conn)
            .optional()
            .into_core()?
            .map(Goal::try_from)
            .transpose()
    }

    async fn insert_goal(&self, new_goal: NewGoal) -> Result<GoalId> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<GoalId> {
                let goal_id = GoalId::generate();
                diesel::insert_into(goals::table)
                    .values(GoalDB::from_new(goal_id, new_goal))
                    .execute(conn)
                    .into_core()?;
                Ok(goal_id)
            })
            .await
    }

    async fn replace_goal(&self, goal_id: GoalId, update: GoalUpdate) -> Result<usize> {
        let changeset = GoalChangesetDB::from(update);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::update(goals.find(goal_id.to_string()))
                    .set(&changeset)
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn set_current_amount(&self, goal_id: GoalId, new_amount: f64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::update(goals.find(goal_id.to_string()))
                    .set(current_amount.eq(new_amount))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    async fn delete_goal(&self, goal_id: GoalId) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(goals.find(goal_id.to_string()))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
