use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::sequencer::use_cases::get_default_pattern::inbound::http as default_pattern_http;
use crate::modules::sequencer::use_cases::get_pattern::inbound::http as get_pattern_http;
use crate::modules::sequencer::use_cases::get_tempo::inbound::http as get_tempo_http;
use crate::modules::sequencer::use_cases::parse_command::inbound::http as parse_command_http;
use crate::modules::sequencer::use_cases::save_pattern::inbound::http as save_pattern_http;
use crate::modules::sequencer::use_cases::set_tempo::inbound::http as set_tempo_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/defaultPattern", get(default_pattern_http::handle))
        .route(
            "/pattern/{user}/{name}",
            get(get_pattern_http::handle).post(save_pattern_http::handle),
        )
        .route(
            "/tempo/{user}",
            get(get_tempo_http::handle).post(set_tempo_http::handle),
        )
        .route("/api/command", post(parse_command_http::handle))
        .route("/health", get(health))
        // Browser and Electron clients call this from another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
