use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use taskdeck_core::Task;
use taskdeck_service::{ServiceError, TaskService};
use tracing::warn;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}

async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, (StatusCode, Json<Value>)> {
    state.service.list_tasks().await.map(Json).map_err(to_error)
}

async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    state.service.get_task(&id).await.map(Json).map_err(to_error)
}

async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<Task>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<Value>)> {
    state
        .service
        .create_task(&input)
        .await
        .map(|t| (StatusCode::CREATED, Json(t)))
        .map_err(to_error)
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Task>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    state
        .service
        .update_task(&id, &input)
        .await
        .map(Json)
        .map_err(to_error)
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    state
        .service
        .delete_task(&id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(to_error)
}

pub(super) fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!("request rejected ({status}): {e}");
    (status, Json(json!({ "error": e.to_string() })))
}
