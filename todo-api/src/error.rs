use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use todo_domain::DomainError;

/// エラーエンベロープ `{"message": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error with request")]
    Internal,
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, &self.to_string())
    }
}

/// エンベロープ付きエラーレスポンスを構築します。
/// エンコードに失敗した場合はボディなしの 500 に縮退します。
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        message: message.to_string(),
    };
    match serde_json::to_string(&body) {
        Ok(json) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode error response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// JSON ボディ付きレスポンスを構築します。
/// エンコードに失敗した場合はボディなしの 500 に縮退します。
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(json) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode json response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
