use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Every failure the HTTP surface can report. The store itself is total:
/// both variants are detected at the operation boundary, before any state
/// is touched.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("pattern not found")]
    NotFound,

    #[error("request body is not valid json")]
    InvalidJson,

    #[error("command text is required")]
    MissingText,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Pattern reads surface absence as a JSON null body.
            ApiError::NotFound => (StatusCode::NOT_FOUND, Json(Value::Null)).into_response(),
            ApiError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "invalid json"})),
            )
                .into_response(),
            ApiError::MissingText => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "text required"})),
            )
                .into_response(),
        }
    }
}
