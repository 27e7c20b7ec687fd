use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use taskdeck_service::TaskService;

use super::tasks::to_error;
use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

/// Unauthenticated liveness probe; also reports the store size.
async fn health(State(state): State<AppState>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let tasks = state.service.list_tasks().await.map_err(to_error)?;
    Ok(Json(json!({ "status": "ok", "tasks": tasks.len() })))
}
