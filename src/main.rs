//! RPS Judge - terminal Rock-Paper-Scissors Plus
//!
//! Moves are typed in natural language and interpreted by an LLM;
//! the rules themselves run locally.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rps_judge::{BotPlayer, Cli, Command, GameConfig, LlmClient, MatchEngine, Repl};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            provider,
            model,
            seed,
        } => run_play(config, provider, model, seed).await,
    }
}

/// Run an interactive match in the terminal
async fn run_play(
    config_path: std::path::PathBuf,
    provider: Option<rps_judge::LlmProvider>,
    model: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    // Logs go to stderr so game output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting RPS judge");

    let mut game_config = if config_path.exists() {
        GameConfig::from_file(&config_path)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        GameConfig::default()
    };

    // CLI flags override the config file
    if provider.is_some() || model.is_some() {
        game_config = GameConfig::new(
            provider.unwrap_or(*game_config.provider()),
            model.unwrap_or_else(|| game_config.model().clone()),
            *game_config.max_tokens(),
        );
    }

    let llm_config = game_config.create_llm_config()?;
    let client = LlmClient::new(llm_config);

    let bot = match seed {
        Some(seed) => {
            info!(seed, "Seeding bot randomness");
            BotPlayer::seeded(seed)
        }
        None => BotPlayer::new(),
    };

    let engine = MatchEngine::new(client, bot);
    let mut repl = Repl::new(engine, game_config);
    repl.run().await
}
