mod bot;
mod judge;
mod state;
mod types;

pub use bot::{BOMB_ODDS, BotPlayer};
pub use judge::adjudicate;
pub use state::{MatchState, MatchSummary, WINNING_SCORE};
pub use types::{Move, RoundRecord, RoundVerdict, VerdictStatus, Winner};
