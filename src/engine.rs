//! Round pipeline wiring the interpreter, bot, judge, and narrator.

use crate::game::{self, BotPlayer, MatchState, MatchSummary, Move, RoundRecord};
use crate::interpreter::MoveInterpreter;
use crate::llm_client::{Completion, LlmError};
use crate::narrator::{self, Narrator};
use crate::wire::WireError;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// What a played round hands back to the caller.
#[derive(Debug, Clone)]
pub struct RoundReport {
    record: RoundRecord,
    narrative: String,
}

impl RoundReport {
    /// Returns the round record.
    pub fn record(&self) -> &RoundRecord {
        &self.record
    }

    /// Returns the rendered narrative.
    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}

/// Runs matches of Rock-Paper-Scissors Plus.
///
/// Owns every pipeline component plus the match state, and runs rounds
/// strictly in sequence: interpret, select, judge, update, render. An
/// interpreter failure aborts the round with the state untouched; a
/// narrator failure degrades to plain rendering after the state is
/// already updated.
#[derive(Debug)]
pub struct MatchEngine<C> {
    interpreter: MoveInterpreter<C>,
    narrator: Narrator<C>,
    bot: BotPlayer,
    state: MatchState,
}

impl<C: Completion + Clone> MatchEngine<C> {
    /// Creates an engine over a completion client and bot player.
    pub fn new(client: C, bot: BotPlayer) -> Self {
        Self {
            interpreter: MoveInterpreter::new(client.clone()),
            narrator: Narrator::new(client),
            bot,
            state: MatchState::new(),
        }
    }

    /// Returns the current match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Snapshots the match for display.
    pub fn summary(&self) -> MatchSummary {
        self.state.summary()
    }

    /// Replaces the match state wholesale for a fresh match.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting match state");
        self.state = MatchState::new();
    }

    /// Plays one round from a line of free-text input.
    ///
    /// Refuses to play once the match is over. The round counter only
    /// advances when the round completes; an aborted round leaves no
    /// trace in the match state.
    #[instrument(skip(self, user_input), fields(round = self.state.round_number()))]
    pub async fn play_round(&mut self, user_input: &str) -> Result<RoundReport, RoundError> {
        if self.state.game_over() {
            return Err(RoundError::new(
                "Match is already over, reset to start a new one".to_string(),
            ));
        }

        let round = self.state.round_number();
        info!(round, "Playing round");

        let user_move = self.interpreter.interpret(user_input).await?;

        let bot_move = self.bot.select(self.state.bot_bomb_used());
        if bot_move == Move::Bomb {
            self.state.mark_bot_bomb_used();
        }

        let verdict = game::adjudicate(user_move, bot_move, self.state.user_bomb_used());
        debug!(status = %verdict.status(), winner = %verdict.winner(), "Round ruled");

        let record = RoundRecord::new(round, user_move, bot_move, &verdict);
        self.state.apply(&verdict);

        let narrative = match self.narrator.render(&record).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Narrator unavailable, using plain rendering");
                narrator::render_plain(&record)
            }
        };

        info!(
            round,
            user_score = self.state.user_score(),
            bot_score = self.state.bot_score(),
            game_over = self.state.game_over(),
            "Round complete"
        );
        Ok(RoundReport { record, narrative })
    }
}

/// Round pipeline error.
#[derive(Debug, Clone, Display, Error)]
#[display("Round error: {} at {}:{}", message, file, line)]
pub struct RoundError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RoundError {
    /// Creates a new round error.
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

impl From<LlmError> for RoundError {
    fn from(e: LlmError) -> Self {
        Self {
            message: e.message,
            line: e.line,
            file: e.file,
        }
    }
}

impl From<WireError> for RoundError {
    fn from(e: WireError) -> Self {
        Self {
            message: e.message,
            line: e.line,
            file: e.file,
        }
    }
}
