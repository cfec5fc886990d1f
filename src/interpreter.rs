//! Free-text move interpretation through the completion service.

use crate::engine::RoundError;
use crate::game::Move;
use crate::llm_client::Completion;
use crate::prompts::INTENT_EXTRACTOR_PROMPT;
use crate::wire::{self, IntentReply};
use tracing::{debug, info, instrument};

/// Turns free-text player input into a canonical move.
///
/// The remote model does the reading; the wire parser enforces the
/// reply contract. `Unclear` comes back only when the model itself
/// classified the input that way, never as a local parse fallback.
#[derive(Debug, Clone)]
pub struct MoveInterpreter<C> {
    client: C,
}

impl<C: Completion> MoveInterpreter<C> {
    /// Creates a new interpreter over a completion client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Interprets one line of player input as a canonical move.
    #[instrument(skip(self, user_input), fields(input_length = user_input.len()))]
    pub async fn interpret(&self, user_input: &str) -> Result<Move, RoundError> {
        debug!(input = %user_input, "Extracting intent");
        let content = format!("User input: {}\n\nExtract intent as JSON:", user_input);
        let reply = self
            .client
            .generate(INTENT_EXTRACTOR_PROMPT, &content)
            .await?;

        let parsed: IntentReply = wire::parse_reply(&reply)?;
        info!(intent = %parsed.intent, "Intent extracted");
        Ok(parsed.intent)
    }
}
