//! Command-line interface for rps_judge.

use crate::llm_client::LlmProvider;
use clap::{Parser, Subcommand};

/// RPS Judge - Rock-Paper-Scissors Plus with LLM-interpreted moves
#[derive(Parser, Debug)]
#[command(name = "rps_judge")]
#[command(about = "Rock-Paper-Scissors Plus with LLM-interpreted moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match in the terminal
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "rps_judge.toml")]
        config: std::path::PathBuf,

        /// Override the LLM provider (gemini or openai)
        #[arg(long)]
        provider: Option<LlmProvider>,

        /// Override the LLM model name
        #[arg(long)]
        model: Option<String>,

        /// Seed the bot's randomness for a reproducible match
        #[arg(long)]
        seed: Option<u64>,
    },
}
