//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    /// `ok`, or `degraded` when the store is unreachable or still on a
    /// legacy schema after a failed startup migration.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    pub schema_migrated: bool,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let db_healthy = tasklist_db::health_check(&state.pool).await.is_ok();
    let schema_migrated = db_healthy
        && tasklist_db::is_migrated(&state.pool)
            .await
            .unwrap_or(false);

    Json(HealthStatus {
        status: if schema_migrated { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        schema_migrated,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
