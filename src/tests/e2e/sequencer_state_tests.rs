// End to end tests driving the full router, one request per oneshot call,
// with the store shared through a cloned AppState.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn post(path: &str, body: &str) -> Request<Body> {
    Request::post(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn it_should_serve_the_default_pattern_without_touching_state() {
    let state = AppState::new();
    let (status, body) = send(&state, get("/defaultPattern")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert!(body.as_array().unwrap().iter().all(|row| {
        let row = row.as_array().unwrap();
        row.len() == 16 && row.iter().all(|step| step == &json!(false))
    }));
    // Serving the default creates nothing.
    let (status, _) = send(&state, get("/pattern/u-1/intro")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_round_trip_a_pattern_through_the_http_surface() {
    let state = AppState::new();
    let pattern = json!([[true, false, true, false], [false, true, false, true]]);

    let (status, body) = send(&state, post("/pattern/u-1/intro", &pattern.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = send(&state, get("/pattern/u-1/intro")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, pattern);
}

#[tokio::test]
async fn it_should_replace_a_pattern_wholesale_on_overwrite() {
    let state = AppState::new();
    send(&state, post("/pattern/u-1/intro", r#"[[true, true]]"#)).await;
    send(&state, post("/pattern/u-1/intro", r#"[[false]]"#)).await;

    let (_, body) = send(&state, get("/pattern/u-1/intro")).await;
    assert_eq!(body, json!([[false]]));
}

#[tokio::test]
async fn it_should_keep_user_state_isolated() {
    let state = AppState::new();
    send(&state, post("/pattern/u-1/intro", r#"[[true]]"#)).await;
    send(&state, post("/tempo/u-1", r#"{"tempo":90}"#)).await;

    let (status, body) = send(&state, get("/pattern/u-2/intro")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&state, get("/tempo/u-2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(120));
}

#[tokio::test]
async fn it_should_round_trip_the_tempo_and_reset_on_empty_body() {
    let state = AppState::new();

    send(&state, post("/tempo/u-1", r#"{"tempo":140}"#)).await;
    let (_, body) = send(&state, get("/tempo/u-1")).await;
    assert_eq!(body, json!(140));

    send(&state, post("/tempo/u-1", "{}")).await;
    let (_, body) = send(&state, get("/tempo/u-1")).await;
    assert_eq!(body, json!(120));
}

#[tokio::test]
async fn it_should_reject_invalid_json_without_mutating_state() {
    let state = AppState::new();
    send(&state, post("/pattern/u-1/intro", r#"[[true]]"#)).await;

    let (status, body) = send(&state, post("/pattern/u-1/intro", "\"{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid json"}));

    let (_, body) = send(&state, get("/pattern/u-1/intro")).await;
    assert_eq!(body, json!([[true]]));
}

#[tokio::test]
async fn it_should_report_health() {
    let state = AppState::new();
    let (status, body) = send(&state, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn it_should_plan_commands_through_the_api() {
    let state = AppState::new();
    let (status, body) = send(&state, post("/api/command", r#"{"text":"add kick"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"plan": {"type": "add", "instrument": "kick"}, "source": "rules"})
    );
}

#[tokio::test]
async fn it_should_settle_on_one_submitted_tempo_under_concurrent_posts() {
    let state = AppState::new();

    let mut handles = Vec::new();
    for bpm in 100..132 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            let body = json!({ "tempo": bpm }).to_string();
            let (status, _) = send(&state, post("/tempo/u-1", &body)).await;
            assert_eq!(status, StatusCode::OK);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let (_, body) = send(&state, get("/tempo/u-1")).await;
    let tempo = body.as_i64().unwrap();
    assert!((100..132).contains(&tempo));
}
