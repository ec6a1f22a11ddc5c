// Composition root for the sequencer backend.
//
// Responsibilities:
// - Instantiate the pattern store once at startup.
// - Wire it into the HTTP routes through AppState.

pub mod http;
pub mod state;
