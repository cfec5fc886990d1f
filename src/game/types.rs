//! Core domain types for Rock-Paper-Scissors Plus.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A canonical move.
///
/// Produced only by the move interpreter (user side) or the bot
/// selector (bot side). `Unclear` is the interpreter's classification
/// for input that names no single move; the bot never plays it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Rock (beats scissors).
    Rock,
    /// Paper (beats rock).
    Paper,
    /// Scissors (beats paper).
    Scissors,
    /// Bomb (beats everything, usable once per player per match).
    Bomb,
    /// No single move could be read from the input.
    Unclear,
}

impl Move {
    /// The three standard moves the bot draws from uniformly.
    pub const PLAYABLE: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Get label for this move (for display and wire formats).
    #[instrument]
    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
            Move::Unclear => "unclear",
        }
    }

    /// Whether this move beats `other` under the standard three-way rule.
    ///
    /// Only meaningful for rock/paper/scissors pairs. Bomb and unclear
    /// are ruled on before this comparison is ever reached.
    #[instrument]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Legality classification for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerdictStatus {
    /// Both moves were legal.
    Valid,
    /// The user replayed an already-spent bomb.
    Invalid,
    /// The user's input named no single move.
    Unclear,
}

impl VerdictStatus {
    /// Get label for this status (for display and wire formats).
    pub fn label(&self) -> &'static str {
        match self {
            VerdictStatus::Valid => "VALID",
            VerdictStatus::Invalid => "INVALID",
            VerdictStatus::Unclear => "UNCLEAR",
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Winner {
    /// The human player.
    User,
    /// The bot.
    Bot,
    /// Equal moves, nobody scores.
    Draw,
    /// No winner assigned.
    None,
}

impl Winner {
    /// Get label for this winner (for display and wire formats).
    pub fn label(&self) -> &'static str {
        match self {
            Winner::User => "USER",
            Winner::Bot => "BOT",
            Winner::Draw => "DRAW",
            Winner::None => "NONE",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The adjudicator's ruling for one round.
///
/// Produced once per round and never mutated afterwards; match state
/// and the narrator both consume it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundVerdict {
    /// Legality of the round.
    status: VerdictStatus,
    /// Round winner.
    winner: Winner,
    /// Human-readable explanation of the ruling.
    reason: String,
    /// True when this round consumed the user's bomb.
    bomb_now_used: bool,
}

impl RoundVerdict {
    /// Creates a new verdict.
    pub fn new(
        status: VerdictStatus,
        winner: Winner,
        reason: impl Into<String>,
        bomb_now_used: bool,
    ) -> Self {
        Self {
            status,
            winner,
            reason: reason.into(),
            bomb_now_used,
        }
    }

    /// Returns the legality status.
    pub fn status(&self) -> VerdictStatus {
        self.status
    }

    /// Returns the round winner.
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Returns the explanation text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns whether this round consumed the user's bomb.
    pub fn bomb_now_used(&self) -> bool {
        self.bomb_now_used
    }
}

/// Everything known about one completed round.
///
/// This is the record handed to the narrator (serialized as JSON) and
/// echoed back to the player when the narrator is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (1-based).
    round: u32,
    /// The user's interpreted move.
    user_move: Move,
    /// The bot's move.
    bot_move: Move,
    /// Legality of the round.
    status: VerdictStatus,
    /// Round winner.
    winner: Winner,
    /// Explanation of the ruling.
    reason: String,
    /// True when this round consumed the user's bomb.
    bomb_now_used: bool,
}

impl RoundRecord {
    /// Creates a round record from the played moves and their verdict.
    pub fn new(round: u32, user_move: Move, bot_move: Move, verdict: &RoundVerdict) -> Self {
        Self {
            round,
            user_move,
            bot_move,
            status: verdict.status(),
            winner: verdict.winner(),
            reason: verdict.reason().to_string(),
            bomb_now_used: verdict.bomb_now_used(),
        }
    }

    /// Returns the round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the user's move.
    pub fn user_move(&self) -> Move {
        self.user_move
    }

    /// Returns the bot's move.
    pub fn bot_move(&self) -> Move {
        self.bot_move
    }

    /// Returns the legality status.
    pub fn status(&self) -> VerdictStatus {
        self.status
    }

    /// Returns the round winner.
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Returns the explanation text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns whether this round consumed the user's bomb.
    pub fn bomb_now_used(&self) -> bool {
        self.bomb_now_used
    }
}
