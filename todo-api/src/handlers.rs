use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::instrument;

use todo_domain::{DomainError, TodoId, TodoItem, TodoPostRequest, TodoPostResponse};

use crate::error::{json_response, ApiError};
use crate::AppState;

/// GET /todo/{id}
///
/// 見つからなければ 204、取得できれば 200 + JSON を返します。
#[instrument(skip(state))]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let todo_id: TodoId = id.parse().map_err(|e: DomainError| {
        tracing::debug!(raw_id = %id, "invalid id in request");
        ApiError::from(e)
    })?;

    let result = state.store.get(todo_id).map_err(|e| {
        tracing::error!(todo_id = %todo_id, error = %e, "failed to get todo item");
        ApiError::BadRequest("Error retrieving record".to_string())
    })?;

    match result {
        Some(item) => Ok(json_response(StatusCode::OK, &item)),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// DELETE /todo/{id}
///
/// 影響行数 0 なら 204、削除できれば 200（空ボディ）を返します。
#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let todo_id: TodoId = id.parse().map_err(|e: DomainError| {
        tracing::debug!(raw_id = %id, "invalid id in request");
        ApiError::from(e)
    })?;

    let count = state.store.delete(todo_id).map_err(|e| {
        tracing::error!(todo_id = %todo_id, error = %e, "failed to delete todo item");
        ApiError::Internal
    })?;

    if count == 0 {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    tracing::debug!(todo_id = %todo_id, count, "rows deleted");

    Ok(StatusCode::OK.into_response())
}

/// POST /todo
///
/// ボディを検証し、ストアに挿入して採番された ID を返します。
#[instrument(skip(state, body))]
pub async fn post_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: TodoPostRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "failed to decode todo body");
        ApiError::BadRequest("invalid body".to_string())
    })?;

    request.validate().map_err(|e| {
        tracing::debug!(error = %e, "invalid post");
        ApiError::from(e)
    })?;

    let item = TodoItem {
        todo: request.todo,
        created_on: Utc::now(),
    };
    let id = state.store.insert(item).map_err(|e| {
        tracing::error!(error = %e, "failed to insert todo record");
        ApiError::Internal
    })?;

    Ok(json_response(StatusCode::OK, &TodoPostResponse { id }))
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

/// ヘルスチェック用ハンドラ
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}
