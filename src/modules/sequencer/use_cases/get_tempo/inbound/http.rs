use axum::{Json, extract::Path, extract::State};

use crate::shell::state::AppState;

/// Never fails: unknown users read as the default tempo.
pub async fn handle(State(state): State<AppState>, Path(user): Path<String>) -> Json<i64> {
    Json(state.store.tempo(&user).await)
}
