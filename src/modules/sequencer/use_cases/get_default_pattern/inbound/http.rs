use axum::Json;
use serde_json::Value;

use crate::modules::sequencer::core::pattern::default_pattern;

pub async fn handle() -> Json<Value> {
    Json(default_pattern())
}
