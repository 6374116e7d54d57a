pub mod health;
pub mod log;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /log                     append entry (POST)
/// /log/{id}                get entry (GET)
/// /log/{id}/complete       mark complete (PATCH)
///
/// /tasks                   open tasks, newest first (GET)
///
/// /flush                   placeholder, always "not implemented" (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/log", log::router())
        .route("/tasks", get(handlers::log::list_open_tasks))
        .route("/flush", post(handlers::log::flush))
}
