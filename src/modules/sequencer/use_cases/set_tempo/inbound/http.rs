use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::modules::sequencer::core::errors::ApiError;
use crate::modules::sequencer::core::pattern::tempo_from_body;
use crate::shell::state::AppState;

/// A body that is not JSON at all is rejected; a body without a usable
/// `tempo` field stores the default, so `{}` means "reset to 120".
pub async fn handle(
    State(state): State<AppState>,
    Path(user): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let body: Value = serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;
    state.store.set_tempo(&user, tempo_from_body(&body)).await;
    Ok(Json(json!({})))
}
