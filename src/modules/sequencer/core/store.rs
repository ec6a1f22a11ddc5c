// In memory store for per user sequencer state.
//
// Purpose
// - Hold named step patterns and a tempo per user for the process lifetime.
//
// Responsibilities
// - Serialize every read and write behind a single lock so concurrent
//   requests never observe a half applied write.
// - Replace whole values on write; never merge.

use crate::modules::sequencer::core::pattern::DEFAULT_TEMPO;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct PatternStore {
    slots: RwLock<Slots>,
}

/// Both maps live behind the one lock, matching the single mutex the
/// operations need for linearizability.
#[derive(Default)]
struct Slots {
    patterns: HashMap<String, HashMap<String, Value>>,
    tempos: HashMap<String, i64>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two level lookup. `None` when the user or the name was never written;
    /// absence is reported, not masked with a default.
    pub async fn pattern(&self, user: &str, name: &str) -> Option<Value> {
        let slots = self.slots.read().await;
        slots.patterns.get(user)?.get(name).cloned()
    }

    /// Full replacement of the (user, name) slot. Creates the user entry on
    /// first write. Callers parse the body before calling in, so the lock is
    /// only held for the map insert.
    pub async fn save_pattern(&self, user: &str, name: &str, pattern: Value) {
        let mut slots = self.slots.write().await;
        slots
            .patterns
            .entry(user.to_string())
            .or_default()
            .insert(name.to_string(), pattern);
    }

    /// Stored tempo, or the default for users that never set one.
    pub async fn tempo(&self, user: &str) -> i64 {
        let slots = self.slots.read().await;
        slots.tempos.get(user).copied().unwrap_or(DEFAULT_TEMPO)
    }

    pub async fn set_tempo(&self, user: &str, tempo: i64) {
        let mut slots = self.slots.write().await;
        slots.tempos.insert(user.to_string(), tempo);
    }
}
