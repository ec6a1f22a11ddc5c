use serde_json::Value;

/// Tempo applied when a user has never set one, and when a tempo write
/// carries no usable `tempo` field.
pub const DEFAULT_TEMPO: i64 = 120;

pub const PATTERN_ROWS: usize = 4;
pub const PATTERN_STEPS: usize = 16;

/// The reference 4x16 grid, every step off. Pure; touches no shared state.
pub fn default_pattern() -> Value {
    let row = vec![Value::Bool(false); PATTERN_STEPS];
    Value::Array(vec![Value::Array(row); PATTERN_ROWS])
}

/// Tempo taken from a parsed write body. A missing or non integer `tempo`
/// field resets to the default instead of failing the write, so posting `{}`
/// is the same as posting `{"tempo":120}`.
pub fn tempo_from_body(body: &Value) -> i64 {
    body.get("tempo")
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_TEMPO)
}
