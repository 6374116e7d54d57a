//! Route definitions for log entries.
//!
//! Mounted at `/log` by `api_routes()`.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::log;
use crate::state::AppState;

/// Log entry routes.
///
/// ```text
/// POST   /                   -> append_entry
/// GET    /{id}               -> get_entry
/// PATCH  /{id}/complete      -> complete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(log::append_entry))
        .route("/{id}", get(log::get_entry))
        .route("/{id}/complete", patch(log::complete_entry))
}
