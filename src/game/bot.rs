//! Randomized bot move selection.

use super::types::Move;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Probability that the bot plays its bomb while it still has one.
pub const BOMB_ODDS: f64 = 0.12;

/// The bot player.
///
/// Draws with no knowledge of the user's move: bomb at fixed odds
/// while the bot's bomb is unspent, otherwise a uniform pick from
/// rock/paper/scissors. Never returns unclear.
#[derive(Debug, Clone)]
pub struct BotPlayer {
    rng: StdRng,
    bomb_odds: f64,
}

impl BotPlayer {
    /// Creates a bot seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            bomb_odds: BOMB_ODDS,
        }
    }

    /// Creates a bot with a fixed seed for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bomb_odds: BOMB_ODDS,
        }
    }

    /// Creates a seeded bot with custom bomb odds.
    pub fn with_bomb_odds(seed: u64, bomb_odds: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bomb_odds,
        }
    }

    /// Selects the bot's move for this round.
    ///
    /// The caller passes the bot's current bomb flag and is responsible
    /// for marking it spent when bomb comes back.
    #[instrument(skip(self))]
    pub fn select(&mut self, bomb_used: bool) -> Move {
        if !bomb_used && self.rng.gen_bool(self.bomb_odds) {
            debug!("Bot chose bomb");
            return Move::Bomb;
        }

        let chosen = Move::PLAYABLE
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::Rock);
        debug!(bot_move = %chosen, "Bot chose move");
        chosen
    }
}

impl Default for BotPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = BotPlayer::seeded(7);
        let mut b = BotPlayer::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.select(false), b.select(false));
        }
    }

    #[test]
    fn test_spent_bomb_never_returns_bomb() {
        let mut bot = BotPlayer::seeded(42);
        for _ in 0..1_000 {
            let mv = bot.select(true);
            assert!(Move::PLAYABLE.contains(&mv));
        }
    }

    #[test]
    fn test_bomb_odds_near_twelve_percent() {
        let mut bot = BotPlayer::seeded(42);
        let draws = 10_000;
        let bombs = (0..draws)
            .filter(|_| bot.select(false) == Move::Bomb)
            .count();
        let fraction = bombs as f64 / draws as f64;
        assert!(
            (0.09..=0.15).contains(&fraction),
            "bomb fraction {} outside tolerance",
            fraction
        );
    }

    #[test]
    fn test_uniform_draw_covers_all_standard_moves() {
        let mut bot = BotPlayer::seeded(3);
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            match bot.select(true) {
                Move::Rock => seen[0] = true,
                Move::Paper => seen[1] = true,
                Move::Scissors => seen[2] = true,
                other => panic!("unexpected move {}", other),
            }
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_zero_odds_never_bombs() {
        let mut bot = BotPlayer::with_bomb_odds(11, 0.0);
        for _ in 0..500 {
            assert_ne!(bot.select(false), Move::Bomb);
        }
    }
}
