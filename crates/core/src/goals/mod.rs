//! Goals module - domain models, services, and traits.

mod goal_id;
mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use goal_id::GoalId;
pub use goals_model::{
    round_to_cents, FundsAdjustment, Goal, GoalTotals, GoalUpdate, NewGoal, Pagination,
    DEFAULT_PAGE_LIMIT,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
