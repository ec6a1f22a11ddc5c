use axum::{Json, extract::Path, extract::State};
use serde_json::Value;

use crate::modules::sequencer::core::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((user, name)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    match state.store.pattern(&user, &name).await {
        Some(pattern) => Ok(Json(pattern)),
        None => Err(ApiError::NotFound),
    }
}
