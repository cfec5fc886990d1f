//! RPS Judge library - Rock-Paper-Scissors Plus with an LLM text surface
//!
//! This library implements a terminal game where moves are typed in free
//! natural language. A remote completion service interprets the text into
//! a canonical move and optionally narrates each round; the rules
//! themselves are local and deterministic.
//!
//! # Architecture
//!
//! - **Client**: one-shot text completions (Gemini, OpenAI)
//! - **Interpreter**: free-text input to canonical move
//! - **Game**: rule table, bot selection, match state
//! - **Narrator**: friendly prose over settled verdicts
//! - **Engine**: the sequential round pipeline
//! - **Repl**: the interactive terminal loop
//!
//! # Example
//!
//! ```no_run
//! use rps_judge::{BotPlayer, GameConfig, LlmClient, MatchEngine};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Configure the completion client
//! let config = GameConfig::default();
//! let client = LlmClient::new(config.create_llm_config()?);
//!
//! // Play a round
//! let mut engine = MatchEngine::new(client, BotPlayer::new());
//! let report = engine.play_round("smash it with a boulder").await?;
//! println!("{}", report.narrative());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod engine;
mod game;
mod interpreter;
mod llm_client;
mod narrator;
mod prompts;
mod repl;
mod wire;

// Crate-level exports - CLI surface
pub use cli::{Cli, Command};

// Crate-level exports - Game configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Round pipeline
pub use engine::{MatchEngine, RoundError, RoundReport};

// Crate-level exports - Interpreter and narrator stages
pub use interpreter::MoveInterpreter;
pub use narrator::{Narrator, render_plain};

// Crate-level exports - LLM client
pub use llm_client::{Completion, LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Prompts
pub use prompts::{INTENT_EXTRACTOR_PROMPT, RESPONSE_GENERATOR_PROMPT};

// Crate-level exports - Interactive loop
pub use repl::Repl;

// Crate-level exports - Wire parsing
pub use wire::{IntentReply, WireError, parse_reply, strip_code_fences};

// Crate-level exports - Game types
pub use game::{
    BOMB_ODDS, BotPlayer, MatchState, MatchSummary, Move, RoundRecord, RoundVerdict,
    VerdictStatus, WINNING_SCORE, Winner, adjudicate,
};
