use std::sync::Arc;

use crate::config::{Config, LogFormat};
use savings_goals_core::goals::{GoalService, GoalServiceTrait};
use savings_goals_storage_sqlite::{db, goals::GoalRepository, DbPool};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    /// Kept for readiness probes; the repository holds its own handle.
    pub db_pool: Arc<DbPool>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Opens the store, applies migrations and wires the goal service.
///
/// Must run inside a Tokio runtime: the database writer actor is spawned here
/// and lives until the returned state (and every clone of it) is dropped.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.database_url)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone())?;

    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer));
    let goal_service = Arc::new(GoalService::new(goal_repository));

    Ok(Arc::new(AppState {
        goal_service,
        db_pool: pool,
    }))
}
