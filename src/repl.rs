//! Interactive terminal loop for playing matches.

use crate::config::GameConfig;
use crate::engine::MatchEngine;
use crate::game::WINNING_SCORE;
use crate::llm_client::Completion;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

/// Line-oriented game loop over stdin and stdout.
///
/// Reads one line per round, dispatches the out-of-band commands
/// (`summary`, `reset`, `quit`, case-insensitive), and sends
/// everything else to the engine as a move. Round failures are
/// printed and the loop keeps going; only `quit`, end of input, or
/// Ctrl-C leaves it.
pub struct Repl<C> {
    engine: MatchEngine<C>,
    config: GameConfig,
}

impl<C: Completion + Clone> Repl<C> {
    /// Creates a new loop over a match engine.
    pub fn new(engine: MatchEngine<C>, config: GameConfig) -> Self {
        Self { engine, config }
    }

    /// Runs the loop until quit, end of input, or Ctrl-C.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        self.print_banner();

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        loop {
            if self.engine.state().game_over() {
                print!("\nEnter command: ");
            } else {
                print!(
                    "\n[Round {}] Enter your move: ",
                    self.engine.state().round_number()
                );
            }
            std::io::stdout().flush()?;

            let line = tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("\n\n👋 Game interrupted. Goodbye!");
                    return Ok(());
                }
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                info!("Input stream closed");
                break;
            };

            let input = line.trim();
            match input.to_lowercase().as_str() {
                "quit" => break,
                "summary" => self.print_summary(),
                "reset" => {
                    self.engine.reset();
                    println!("\n🔄 Game reset. New game started!");
                }
                "" => {
                    if self.engine.state().game_over() {
                        println!("Invalid. Use: reset, summary, or quit");
                    } else {
                        println!("Please enter a move!");
                    }
                }
                _ => {
                    if self.engine.state().game_over() {
                        println!("Invalid. Use: reset, summary, or quit");
                    } else {
                        self.play_round(input).await;
                    }
                }
            }
        }

        Ok(())
    }

    /// Plays one round and prints its outcome.
    async fn play_round(&mut self, input: &str) {
        match self.engine.play_round(input).await {
            Ok(report) => {
                println!("\n{}", "=".repeat(30));
                println!("ROUND RESULT:");
                println!("{}", "=".repeat(30));
                println!("{}", report.narrative());
                println!(
                    "\n📈 SCORE: You {} - {} Bot",
                    self.engine.state().user_score(),
                    self.engine.state().bot_score()
                );
                if self.engine.state().game_over() {
                    self.print_game_over();
                }
            }
            Err(e) => {
                warn!(error = %e, "Round aborted");
                println!("\n❌ ROUND FAILED: {}", e.message);
                println!("   Match state unchanged. Enter your move again.");
            }
        }
    }

    fn print_banner(&self) {
        let bar = "=".repeat(50);
        println!("🤖 ROCK-PAPER-SCISSORS PLUS");
        println!("{}", bar);
        println!("RULES:");
        println!("  • Valid moves: rock, paper, scissors, bomb");
        println!("  • Bomb beats everything");
        println!("  • Bomb can be used only ONCE per game");
        println!("  • Unclear/invalid moves waste your turn");
        println!("  • First to {} wins takes the match!", WINNING_SCORE);
        println!("{}", bar);
        println!("COMMANDS:");
        println!("  • Enter your move in natural language");
        println!("  • Type 'summary' to see game stats");
        println!("  • Type 'reset' to start new game");
        println!("  • Type 'quit' to exit");
        println!("{}", bar);
        println!("   Model: {} ({:?})", self.config.model(), self.config.provider());
        println!("{}", bar);
    }

    fn print_summary(&self) {
        let summary = self.engine.summary();
        println!("\n📊 GAME SUMMARY:");
        println!("   Rounds played: {}", summary.rounds_played());
        println!("   Your score: {}", summary.user_score());
        println!("   Bot score: {}", summary.bot_score());
        println!("   Bomb used: {}", summary.user_bomb_used());
        println!("   Bot bomb used: {}", summary.bot_bomb_used());
    }

    fn print_game_over(&self) {
        let state = self.engine.state();
        if state.user_score() >= WINNING_SCORE {
            println!("\n{}", "🎉".repeat(12));
            println!("🎉 YOU WIN THE GAME! 🎉");
            println!("{}", "🎉".repeat(12));
        } else {
            println!("\n{}", "🤖".repeat(12));
            println!("🤖 BOT WINS THE GAME! 🤖");
            println!("{}", "🤖".repeat(12));
        }
        println!("\n🏆 Game complete in {} rounds!", state.round_number() - 1);
        println!("Commands: 'reset' (new game), 'summary' (stats), 'quit' (exit)");
    }
}
