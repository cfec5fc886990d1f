//! Round adjudication for Rock-Paper-Scissors Plus.

use super::types::{Move, RoundVerdict, VerdictStatus, Winner};
use tracing::instrument;

/// Rules the round locally and deterministically.
///
/// Rule order matters: unclear input is ruled first, then bomb
/// legality, then bomb dominance, then the standard three-way
/// comparison. A freshly played user bomb wins outright, whatever the
/// bot threw. A replayed bomb forfeits the round and leaves the flag
/// untouched.
#[instrument]
pub fn adjudicate(user_move: Move, bot_move: Move, user_bomb_used: bool) -> RoundVerdict {
    if user_move == Move::Unclear {
        return RoundVerdict::new(
            VerdictStatus::Unclear,
            Winner::Bot,
            "Input did not name a single move, so the round goes to the bot",
            false,
        );
    }

    if user_move == Move::Bomb {
        if user_bomb_used {
            return RoundVerdict::new(
                VerdictStatus::Invalid,
                Winner::Bot,
                "Bomb already spent, replaying it forfeits the round",
                false,
            );
        }
        return RoundVerdict::new(
            VerdictStatus::Valid,
            Winner::User,
            format!("bomb beats {}", bot_move),
            true,
        );
    }

    // user_move is rock, paper, or scissors from here on
    if bot_move == Move::Bomb {
        return RoundVerdict::new(
            VerdictStatus::Valid,
            Winner::Bot,
            format!("bomb beats {}", user_move),
            false,
        );
    }

    if user_move == bot_move {
        return RoundVerdict::new(
            VerdictStatus::Valid,
            Winner::Draw,
            format!("both played {}", user_move),
            false,
        );
    }

    if user_move.beats(bot_move) {
        RoundVerdict::new(
            VerdictStatus::Valid,
            Winner::User,
            format!("{} beats {}", user_move, bot_move),
            false,
        )
    } else {
        RoundVerdict::new(
            VerdictStatus::Valid,
            Winner::Bot,
            format!("{} beats {}", bot_move, user_move),
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unclear_always_goes_to_bot() {
        for bot in Move::iter() {
            let verdict = adjudicate(Move::Unclear, bot, false);
            assert_eq!(verdict.status(), VerdictStatus::Unclear);
            assert_eq!(verdict.winner(), Winner::Bot);
            assert!(!verdict.bomb_now_used());
        }
    }

    #[test]
    fn test_fresh_bomb_beats_everything() {
        for bot in Move::iter() {
            let verdict = adjudicate(Move::Bomb, bot, false);
            assert_eq!(verdict.status(), VerdictStatus::Valid);
            assert_eq!(verdict.winner(), Winner::User);
            assert!(verdict.bomb_now_used());
        }
    }

    #[test]
    fn test_spent_bomb_is_invalid() {
        for bot in Move::iter() {
            let verdict = adjudicate(Move::Bomb, bot, true);
            assert_eq!(verdict.status(), VerdictStatus::Invalid);
            assert_eq!(verdict.winner(), Winner::Bot);
            assert!(!verdict.bomb_now_used());
        }
    }

    #[test]
    fn test_bot_bomb_beats_standard_moves() {
        for user in Move::PLAYABLE {
            let verdict = adjudicate(user, Move::Bomb, false);
            assert_eq!(verdict.status(), VerdictStatus::Valid);
            assert_eq!(verdict.winner(), Winner::Bot);
            assert!(!verdict.bomb_now_used());
        }
    }

    #[test]
    fn test_standard_cycle() {
        let wins = [
            (Move::Rock, Move::Scissors),
            (Move::Scissors, Move::Paper),
            (Move::Paper, Move::Rock),
        ];
        for (user, bot) in wins {
            assert_eq!(adjudicate(user, bot, false).winner(), Winner::User);
            assert_eq!(adjudicate(bot, user, false).winner(), Winner::Bot);
        }
    }

    #[test]
    fn test_equal_moves_draw() {
        for mv in Move::PLAYABLE {
            let verdict = adjudicate(mv, mv, false);
            assert_eq!(verdict.status(), VerdictStatus::Valid);
            assert_eq!(verdict.winner(), Winner::Draw);
        }
    }

    #[test]
    fn test_spent_bomb_applies_only_to_bomb() {
        // A spent bomb restricts replaying the bomb, not the standard moves.
        let verdict = adjudicate(Move::Rock, Move::Scissors, true);
        assert_eq!(verdict.status(), VerdictStatus::Valid);
        assert_eq!(verdict.winner(), Winner::User);
    }

    #[test]
    fn test_reason_mentions_moves() {
        let verdict = adjudicate(Move::Paper, Move::Rock, false);
        assert_eq!(verdict.reason(), "paper beats rock");
        let verdict = adjudicate(Move::Rock, Move::Paper, false);
        assert_eq!(verdict.reason(), "paper beats rock");
    }
}
