use std::sync::Arc;

use crate::{
    error::{ApiJson, ApiResult, ErrorBody},
    main_lib::AppState,
    models::{
        CreatedGoal, FundsPayload, FundsUpdated, Goal, GoalPayload, GoalTotals, ListGoalsQuery,
        MessageResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

#[utoipa::path(
    post,
    path = "/goals/",
    tag = "goals",
    request_body = GoalPayload,
    responses(
        (status = 201, body = CreatedGoal),
        (status = 422, description = "Validation failed or unreadable body", body = ErrorBody)
    )
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<GoalPayload>,
) -> ApiResult<(StatusCode, Json<CreatedGoal>)> {
    let id = state.goal_service.create_goal(payload.into()).await?;
    tracing::info!(goal_id = %id, "Goal created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedGoal { id: id.to_string() }),
    ))
}

#[utoipa::path(
    get,
    path = "/goals/",
    tag = "goals",
    params(ListGoalsQuery),
    responses((status = 200, body = [Goal]))
)]
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListGoalsQuery>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.list_goals(query.into())?;
    Ok(Json(goals.into_iter().map(Goal::from).collect()))
}

#[utoipa::path(
    get,
    path = "/goals/{id}",
    tag = "goals",
    params(("id" = String, Path, description = "Goal id")),
    responses(
        (status = 200, body = Goal),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Goal not found", body = ErrorBody)
    )
)]
pub async fn get_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.get_goal(&id)?;
    Ok(Json(Goal::from(goal)))
}

#[utoipa::path(
    put,
    path = "/goals/{id}",
    tag = "goals",
    params(("id" = String, Path, description = "Goal id")),
    request_body = GoalPayload,
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Goal not found", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody)
    )
)]
pub async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<GoalPayload>,
) -> ApiResult<Json<MessageResponse>> {
    state.goal_service.update_goal(&id, payload.into()).await?;
    Ok(Json(MessageResponse::new("Goal updated")))
}

#[utoipa::path(
    patch,
    path = "/goals/{id}/funds/",
    tag = "goals",
    params(("id" = String, Path, description = "Goal id")),
    request_body = FundsPayload,
    responses(
        (status = 200, body = FundsUpdated),
        (status = 400, description = "Malformed id or insufficient funds", body = ErrorBody),
        (status = 404, description = "Goal not found", body = ErrorBody),
        (status = 422, description = "Zero amount", body = ErrorBody)
    )
)]
pub async fn adjust_funds(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<FundsPayload>,
) -> ApiResult<Json<FundsUpdated>> {
    let current_amount = state.goal_service.adjust_funds(&id, payload.into()).await?;
    tracing::debug!(goal_id = %id, amount = payload.amount, current_amount, "Funds adjusted");
    Ok(Json(FundsUpdated {
        message: "Funds updated".to_string(),
        current_amount,
    }))
}

#[utoipa::path(
    delete,
    path = "/goals/{id}",
    tag = "goals",
    params(("id" = String, Path, description = "Goal id")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Goal not found", body = ErrorBody)
    )
)]
pub async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageResponse>> {
    state.goal_service.delete_goal(&id).await?;
    tracing::info!(goal_id = %id, "Goal deleted");
    Ok(Json(MessageResponse::new("Goal deleted")))
}

#[utoipa::path(
    get,
    path = "/total/",
    tag = "goals",
    responses(
        (status = 200, body = GoalTotals),
        (status = 404, description = "No goals to total", body = ErrorBody)
    )
)]
pub async fn get_totals(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalTotals>> {
    let totals = state.goal_service.get_totals()?;
    Ok(Json(GoalTotals::from(totals)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/", get(list_goals).post(create_goal))
        .route(
            "/goals/{id}",
            get(get_goal).put(update_goal).delete(delete_goal),
        )
        .route("/goals/{id}/funds", patch(adjust_funds))
        .route("/goals/{id}/funds/", patch(adjust_funds))
        .route("/total", get(get_totals))
        .route("/total/", get(get_totals))
}
