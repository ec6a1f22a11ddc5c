// Rules based parser turning free text into a sequencer command plan.
//
// Purpose
// - Let the UI send plain phrases ("add kick", "set tempo to 128") and get
//   back a structured plan it can apply locally.
//
// Responsibilities
// - Match a fixed set of case insensitive phrase shapes.
// - Fall through to an `unknown` plan carrying the raw text.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const INSTRUMENT: &str = r"808|kick|snare|hi\s*hat|hihat|clap|bass|piano|pad";

static ADD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)^(add|put in)\s+(an?\s+)?({INSTRUMENT})$")).unwrap());
static REMOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(remove|delete)\s+(the\s+)?({INSTRUMENT})$")).unwrap()
});
static MUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)^mute\s+(the\s+)?({INSTRUMENT})$")).unwrap());
static UNMUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)^unmute\s+(the\s+)?({INSTRUMENT})$")).unwrap());
static TEMPO_ABS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^set\s+tempo\s+to\s+(\d{2,3})$").unwrap());
static TEMPO_DELTA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(increase|decrease)\s+tempo\s+by\s+(\d{1,2})$").unwrap());
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^set\s+key\s+to\s+(C|G|A\s*minor|E\s*minor)$").unwrap());
static SWING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^swing\s+(5[0-9]|6[0-5])%$").unwrap());

/// Tagged plan matching the wire shapes the UI already understands, e.g.
/// `{"type":"tempo:set","bpm":128}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CommandPlan {
    Add { instrument: String },
    Remove { instrument: String },
    Mute { instrument: String },
    Unmute { instrument: String },
    #[serde(rename = "tempo:set")]
    TempoSet { bpm: i64 },
    #[serde(rename = "tempo:delta")]
    TempoDelta { delta: i64 },
    #[serde(rename = "key:set")]
    KeySet { key: String },
    #[serde(rename = "swing:set")]
    SwingSet { percent: i64 },
    Unknown { raw: String },
}

pub fn parse_command(text: &str) -> CommandPlan {
    let t = text.trim();
    if let Some(m) = ADD_RE.captures(t) {
        return CommandPlan::Add {
            instrument: instrument_name(&m[3]),
        };
    }
    if let Some(m) = REMOVE_RE.captures(t) {
        return CommandPlan::Remove {
            instrument: instrument_name(&m[3]),
        };
    }
    if let Some(m) = MUTE_RE.captures(t) {
        return CommandPlan::Mute {
            instrument: instrument_name(&m[2]),
        };
    }
    if let Some(m) = UNMUTE_RE.captures(t) {
        return CommandPlan::Unmute {
            instrument: instrument_name(&m[2]),
        };
    }
    if let Some(m) = TEMPO_ABS_RE.captures(t) {
        return CommandPlan::TempoSet {
            bpm: m[1].parse().unwrap(),
        };
    }
    if let Some(m) = TEMPO_DELTA_RE.captures(t) {
        let sign = if m[1].eq_ignore_ascii_case("increase") {
            1
        } else {
            -1
        };
        return CommandPlan::TempoDelta {
            delta: sign * m[2].parse::<i64>().unwrap(),
        };
    }
    if let Some(m) = KEY_RE.captures(t) {
        return CommandPlan::KeySet {
            key: title_case(&m[1]),
        };
    }
    if let Some(m) = SWING_RE.captures(t) {
        return CommandPlan::SwingSet {
            percent: m[1].parse().unwrap(),
        };
    }
    CommandPlan::Unknown { raw: t.to_string() }
}

/// "hi hat" and "hihat" both name the same track.
fn instrument_name(matched: &str) -> String {
    matched.replace(' ', "")
}

/// "a minor" -> "A Minor", collapsing any run of whitespace.
fn title_case(key: &str) -> String {
    key.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
