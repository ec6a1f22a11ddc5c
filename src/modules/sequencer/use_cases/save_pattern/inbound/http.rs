use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::modules::sequencer::core::errors::ApiError;
use crate::shell::state::AppState;

/// Any parseable JSON value is accepted and stored verbatim; shape checks
/// belong to the UI. The body is parsed before the store lock is taken, so a
/// bad body never touches shared state.
pub async fn handle(
    State(state): State<AppState>,
    Path((user, name)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let pattern: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;
    state.store.save_pattern(&user, &name, pattern).await;
    Ok(Json(json!({})))
}
