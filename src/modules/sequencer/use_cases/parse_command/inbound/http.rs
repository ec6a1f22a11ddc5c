use axum::{Json, body::Bytes};
use serde::Serialize;
use serde_json::Value;

use crate::modules::sequencer::core::command::{CommandPlan, parse_command};
use crate::modules::sequencer::core::errors::ApiError;

#[derive(Serialize)]
pub struct CommandResponse {
    pub plan: CommandPlan,
    pub source: &'static str,
}

/// Stateless: the plan is returned to the UI, which applies it to its own
/// copy of the pattern. An unreadable body is treated as an empty one, so
/// the only rejection is missing text.
pub async fn handle(body: Bytes) -> Result<Json<CommandResponse>, ApiError> {
    let body: Value = serde_json::from_slice(&body).unwrap_or_default();
    let text = body.get("text").and_then(Value::as_str).unwrap_or("").trim();
    if text.is_empty() {
        return Err(ApiError::MissingText);
    }
    Ok(Json(CommandResponse {
        plan: parse_command(text),
        source: "rules",
    }))
}
