//! Handlers for log entries: append, open-task listing, lookup, completion,
//! and the flush placeholder.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use brainlogger_core::entry::{validate_content, validate_user_id};
use brainlogger_core::error::CoreError;
use brainlogger_core::types::DbId;
use brainlogger_db::models::log_entry::{CreateLogEntry, NewLogEntry};
use brainlogger_db::repositories::LogEntryRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fixed acknowledgement returned by the flush placeholder.
pub const FLUSH_NOT_IMPLEMENTED: &str = "Flush not implemented yet";

/// Body of the `POST /api/flush` response.
#[derive(Debug, Serialize)]
pub struct FlushResponse {
    pub message: &'static str,
}

/// Path of the resource for a single entry, used in the `Location` header.
pub fn entry_location(id: DbId) -> String {
    format!("/api/log/{id}")
}

/// POST /api/log
///
/// Append a new entry. The server stamps the timestamp and the store
/// assigns the id; neither is taken from the client. A body that is not
/// valid JSON, or names an unknown type, is answered with 422.
pub async fn append_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateLogEntry>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    validate_content(&input.content).map_err(AppError::BadRequest)?;
    validate_user_id(input.user_id).map_err(AppError::BadRequest)?;

    let new_entry = NewLogEntry::from_request(input, Utc::now());
    let entry = LogEntryRepo::create(&state.pool, &new_entry).await?;

    tracing::info!(
        user_id = entry.user_id,
        entry_id = entry.id,
        entry_type = %entry.entry_type,
        "Log entry created"
    );

    let location = entry_location(entry.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(entry),
    ))
}

/// GET /api/tasks
///
/// List every open task, most recent first.
pub async fn list_open_tasks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tasks = LogEntryRepo::list_open_tasks(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/log/{id}
///
/// Get a single entry by ID.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = LogEntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LogEntry",
            id,
        }))?;

    Ok(Json(entry))
}

/// PATCH /api/log/{id}/complete
///
/// Mark an entry as completed. Completing an already-completed entry keeps
/// its original completion time.
pub async fn complete_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = LogEntryRepo::mark_complete(&state.pool, id, Utc::now())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LogEntry",
            id,
        }))?;

    tracing::info!(entry_id = id, completed_at = ?entry.completed_at, "Log entry completed");

    Ok(Json(entry))
}

/// POST /api/flush
///
/// Reserved for a future batch/sync operation. Never touches the store.
pub async fn flush() -> Json<FlushResponse> {
    Json(FlushResponse {
        message: FLUSH_NOT_IMPLEMENTED,
    })
}
