//! Natural-language rendering of ruled rounds.

use crate::game::{RoundRecord, VerdictStatus, Winner};
use crate::llm_client::{Completion, LlmError};
use crate::prompts::RESPONSE_GENERATOR_PROMPT;
use crate::wire;
use tracing::{debug, info, instrument};

/// Renders round outcomes as friendly prose via the completion service.
///
/// Rendering is decoration over an already-settled verdict. When the
/// remote call fails the engine falls back to [`render_plain`] and the
/// round still completes.
#[derive(Debug, Clone)]
pub struct Narrator<C> {
    client: C,
}

impl<C: Completion> Narrator<C> {
    /// Creates a new narrator over a completion client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Renders the round record through the remote model.
    #[instrument(skip(self, record), fields(round = record.round()))]
    pub async fn render(&self, record: &RoundRecord) -> Result<String, LlmError> {
        debug!("Creating user output");
        let data = serde_json::to_string_pretty(record)
            .map_err(|e| LlmError::new(format!("Failed to serialize round record: {}", e)))?;
        let content = format!("Game data: {}\n\nGenerate response:", data);
        let reply = self
            .client
            .generate(RESPONSE_GENERATOR_PROMPT, &content)
            .await?;

        let clean = wire::strip_code_fences(&reply);
        info!(output_length = clean.len(), "Round narrative generated");
        Ok(clean)
    }
}

/// Deterministic fallback rendering of a round record.
///
/// Mirrors the shape the remote instruction asks for, so the player
/// sees the same layout whether or not the narrator was reachable.
#[instrument(skip(record), fields(round = record.round()))]
pub fn render_plain(record: &RoundRecord) -> String {
    let result = match record.winner() {
        Winner::User => "You win!",
        Winner::Bot => "Bot wins!",
        Winner::Draw => "Draw!",
        Winner::None => "No winner.",
    };

    let mut output = format!(
        "Round {}\nYou played: {}\nBot played: {}\nResult: {}\nExplanation: {}",
        record.round(),
        record.user_move(),
        record.bot_move(),
        result,
        record.reason()
    );

    if record.status() == VerdictStatus::Unclear {
        output.push_str("\nNote: Unclear moves waste your turn.");
    }
    if record.bomb_now_used() {
        output.push_str("\nNote: Bomb has been used.");
    }

    output
}
