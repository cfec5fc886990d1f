//! Reply hygiene and strict parsing for remote completions.

use crate::game::Move;
use derive_more::{Display, Error};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Strips markdown code fences from a completion reply.
///
/// Models habitually wrap JSON in fenced blocks. Stripping is pure
/// text hygiene done before parsing; it never repairs the payload.
#[instrument(skip(reply))]
pub fn strip_code_fences(reply: &str) -> String {
    reply
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parses a fenced-or-bare JSON reply into the expected shape.
///
/// Parsing is strict: malformed JSON, unknown fields, or values
/// outside the contract are errors, never defaulted.
#[instrument(skip(reply))]
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, WireError> {
    let clean = strip_code_fences(reply);
    debug!(reply_length = clean.len(), "Parsing completion reply");
    serde_json::from_str(&clean).map_err(|e| {
        error!(error = %e, reply = %clean, "Reply did not match expected shape");
        WireError::new(format!("Reply did not match expected shape: {}", e))
    })
}

/// The intent extractor's reply contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntentReply {
    /// The extracted canonical move.
    pub intent: Move,
}

/// Wire format error.
#[derive(Debug, Clone, Display, Error)]
#[display("Wire error: {} at {}:{}", message, file, line)]
pub struct WireError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WireError {
    /// Creates a new wire format error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
