use std::sync::Arc;

use crate::{
    config::Config,
    error::ErrorBody,
    main_lib::AppState,
    models::{CreatedGoal, FundsPayload, FundsUpdated, Goal, GoalPayload, GoalTotals, MessageResponse},
};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod goals;
pub mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        goals::create_goal,
        goals::list_goals,
        goals::get_goal,
        goals::update_goal,
        goals::adjust_funds,
        goals::delete_goal,
        goals::get_totals,
    ),
    components(schemas(
        Goal,
        GoalPayload,
        FundsPayload,
        CreatedGoal,
        MessageResponse,
        FundsUpdated,
        GoalTotals,
        ErrorBody
    )),
    tags((name = "goals", description = "Savings goals"), (name = "health"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(health::router())
        .merge(goals::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
