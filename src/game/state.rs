//! Match bookkeeping across rounds.

use super::types::{RoundVerdict, Winner};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Round wins required to take the match.
pub const WINNING_SCORE: u32 = 3;

/// Complete match state.
///
/// Created fresh at match start, mutated exactly once per completed
/// round by [`MatchState::apply`], and replaced wholesale on reset.
/// Aborted rounds never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Round number (1-based, counts the round about to be played).
    round_number: u32,
    /// Rounds won by the user.
    user_score: u32,
    /// Rounds won by the bot.
    bot_score: u32,
    /// Whether the user has spent their bomb.
    user_bomb_used: bool,
    /// Whether the bot has spent its bomb.
    bot_bomb_used: bool,
    /// Whether either player has reached the winning score.
    game_over: bool,
}

impl MatchState {
    /// Creates the state for a fresh match.
    pub fn new() -> Self {
        Self {
            round_number: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
        }
    }

    /// Returns the current round number.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Returns the user's score.
    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    /// Returns the bot's score.
    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Returns whether the user has spent their bomb.
    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    /// Returns whether the bot has spent its bomb.
    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    /// Returns whether the match is over.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Folds a completed round's verdict into the match.
    ///
    /// Sets the user's bomb flag if the verdict consumed it, credits
    /// the winner, flips `game_over` the instant a score reaches
    /// [`WINNING_SCORE`], and advances the round counter. The counter
    /// advances for every completed round, draws and forfeits included.
    #[instrument(skip(self, verdict), fields(round = self.round_number, winner = %verdict.winner()))]
    pub fn apply(&mut self, verdict: &RoundVerdict) {
        if verdict.bomb_now_used() {
            self.user_bomb_used = true;
        }

        match verdict.winner() {
            Winner::User => self.user_score += 1,
            Winner::Bot => self.bot_score += 1,
            Winner::Draw | Winner::None => {}
        }

        if self.user_score >= WINNING_SCORE || self.bot_score >= WINNING_SCORE {
            self.game_over = true;
        }

        self.round_number += 1;
        debug!(
            user_score = self.user_score,
            bot_score = self.bot_score,
            game_over = self.game_over,
            "Round folded into match state"
        );
    }

    /// Records that the bot has played its bomb.
    ///
    /// Called by the round pipeline the moment the selector returns
    /// bomb, so the flag flips exactly once per match.
    #[instrument(skip(self))]
    pub fn mark_bot_bomb_used(&mut self) {
        self.bot_bomb_used = true;
    }

    /// Snapshots the match for the `summary` command.
    #[instrument(skip(self))]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            rounds_played: self.round_number - 1,
            user_score: self.user_score,
            bot_score: self.bot_score,
            user_bomb_used: self.user_bomb_used,
            bot_bomb_used: self.bot_bomb_used,
            game_over: self.game_over,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only snapshot of a match for display.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Completed rounds (the current round number minus one).
    rounds_played: u32,
    /// Rounds won by the user.
    user_score: u32,
    /// Rounds won by the bot.
    bot_score: u32,
    /// Whether the user has spent their bomb.
    user_bomb_used: bool,
    /// Whether the bot has spent its bomb.
    bot_bomb_used: bool,
    /// Whether the match is over.
    game_over: bool,
}
