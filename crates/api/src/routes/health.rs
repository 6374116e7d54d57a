//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use brainlogger_db::repositories::LogEntryRepo;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the entry store cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Open task count; absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_tasks: Option<i64>,
}

/// GET /health
///
/// Counts open tasks, which exercises both the connection and the
/// `log_entries` schema in a single round trip.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let open_tasks = match LogEntryRepo::count_open_tasks(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not query log entries");
            None
        }
    };
    let db_healthy = open_tasks.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        open_tasks,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
