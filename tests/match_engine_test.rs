//! Integration tests for the round pipeline over a scripted client.

use rps_judge::{
    BotPlayer, Completion, INTENT_EXTRACTOR_PROMPT, LlmError, MatchEngine, Move, VerdictStatus,
    Winner,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted completion client.
///
/// Intent calls consume queued replies in order; narration calls
/// return a fixed line, or fail when scripted to.
#[derive(Debug, Clone)]
struct ScriptedClient {
    intent_replies: Arc<Mutex<VecDeque<String>>>,
    fail_narration: bool,
}

impl ScriptedClient {
    fn new(replies: Vec<String>) -> Self {
        Self {
            intent_replies: Arc::new(Mutex::new(replies.into_iter().collect())),
            fail_narration: false,
        }
    }

    fn with_failing_narration(replies: Vec<String>) -> Self {
        let mut client = Self::new(replies);
        client.fail_narration = true;
        client
    }
}

#[async_trait::async_trait]
impl Completion for ScriptedClient {
    async fn generate(
        &self,
        system_prompt: &str,
        _user_message: &str,
    ) -> Result<String, LlmError> {
        if system_prompt == INTENT_EXTRACTOR_PROMPT {
            self.intent_replies
                .lock()
                .expect("script lock poisoned")
                .pop_front()
                .ok_or_else(|| LlmError::new("intent script exhausted".to_string()))
        } else if self.fail_narration {
            Err(LlmError::new("narrator offline".to_string()))
        } else {
            Ok("Scripted narration.".to_string())
        }
    }
}

/// Builds the JSON reply the intent extractor is contracted to return.
fn intent(word: &str) -> String {
    format!("{{\"intent\": \"{}\"}}", word)
}

/// Engine whose bot never bombs, driven by the given intent replies.
fn engine_with(replies: Vec<String>) -> MatchEngine<ScriptedClient> {
    MatchEngine::new(
        ScriptedClient::new(replies),
        BotPlayer::with_bomb_odds(1, 0.0),
    )
}

#[tokio::test]
async fn test_fresh_bomb_wins_round() {
    let mut engine = engine_with(vec![intent("bomb")]);

    let report = engine
        .play_round("drop the big one")
        .await
        .expect("Round failed");

    assert_eq!(report.record().round(), 1);
    assert_eq!(report.record().user_move(), Move::Bomb);
    assert_eq!(report.record().status(), VerdictStatus::Valid);
    assert_eq!(report.record().winner(), Winner::User);
    assert!(report.record().bomb_now_used());
    assert_eq!(report.narrative(), "Scripted narration.");

    assert_eq!(engine.state().user_score(), 1);
    assert_eq!(engine.state().round_number(), 2);
    assert!(engine.state().user_bomb_used());
}

#[tokio::test]
async fn test_replayed_bomb_forfeits() {
    let mut engine = engine_with(vec![intent("bomb"), intent("bomb")]);

    engine.play_round("boom").await.expect("Round failed");
    let report = engine.play_round("boom again").await.expect("Round failed");

    assert_eq!(report.record().status(), VerdictStatus::Invalid);
    assert_eq!(report.record().winner(), Winner::Bot);
    assert!(!report.record().bomb_now_used());

    assert_eq!(engine.state().user_score(), 1);
    assert_eq!(engine.state().bot_score(), 1);
    assert!(engine.state().user_bomb_used());
}

#[tokio::test]
async fn test_unclear_scores_for_bot() {
    let mut engine = engine_with(vec![intent("unclear")]);

    let report = engine.play_round("asdf qwerty").await.expect("Round failed");

    assert_eq!(report.record().status(), VerdictStatus::Unclear);
    assert_eq!(report.record().winner(), Winner::Bot);
    assert_eq!(engine.state().bot_score(), 1);
    assert_eq!(engine.state().user_score(), 0);
}

#[tokio::test]
async fn test_three_bot_wins_end_the_match() {
    let mut engine = engine_with(vec![
        intent("unclear"),
        intent("unclear"),
        intent("unclear"),
        intent("rock"),
    ]);

    for _ in 0..3 {
        engine.play_round("???").await.expect("Round failed");
    }

    assert!(engine.state().game_over());
    assert_eq!(engine.state().bot_score(), 3);
    assert_eq!(engine.state().round_number(), 4);

    // The match is over; further rounds are refused without touching state.
    let result = engine.play_round("rock").await;
    assert!(result.is_err());
    assert_eq!(engine.state().round_number(), 4);
    assert_eq!(engine.state().bot_score(), 3);
}

#[tokio::test]
async fn test_off_schema_reply_aborts_round() {
    let mut engine = engine_with(vec![
        "The user clearly wants to play rock.".to_string(),
        intent("bomb"),
    ]);

    let result = engine.play_round("rock").await;
    assert!(result.is_err());
    assert_eq!(engine.state().round_number(), 1);
    assert_eq!(engine.state().user_score(), 0);
    assert_eq!(engine.state().bot_score(), 0);

    // The loop retries with the next input; the counter picks up where it was.
    let report = engine.play_round("bomb").await.expect("Round failed");
    assert_eq!(report.record().round(), 1);
    assert_eq!(engine.state().round_number(), 2);
}

#[tokio::test]
async fn test_unknown_field_reply_aborts_round() {
    let mut engine = engine_with(vec![
        "{\"intent\": \"rock\", \"confidence\": 0.9}".to_string(),
    ]);

    let result = engine.play_round("rock").await;
    assert!(result.is_err());
    assert_eq!(engine.state().round_number(), 1);
}

#[tokio::test]
async fn test_fenced_reply_accepted() {
    let mut engine = engine_with(vec![
        "```json\n{\"intent\": \"bomb\"}\n```".to_string(),
    ]);

    let report = engine.play_round("kaboom").await.expect("Round failed");
    assert_eq!(report.record().user_move(), Move::Bomb);
    assert_eq!(report.record().winner(), Winner::User);
}

#[tokio::test]
async fn test_narration_failure_falls_back_to_plain() {
    let client = ScriptedClient::with_failing_narration(vec![intent("bomb")]);
    let mut engine = MatchEngine::new(client, BotPlayer::with_bomb_odds(1, 0.0));

    let report = engine.play_round("bomb").await.expect("Round failed");

    // The round still completed and the state advanced.
    assert_eq!(engine.state().user_score(), 1);
    assert_eq!(engine.state().round_number(), 2);

    // Plain rendering mirrors the narrator's output shape.
    assert!(report.narrative().starts_with("Round 1\n"));
    assert!(report.narrative().contains("Result: You win!"));
    assert!(report.narrative().contains("Note: Bomb has been used."));
}

#[tokio::test]
async fn test_forced_bot_bomb_wins() {
    let client = ScriptedClient::new(vec![intent("rock"), intent("rock")]);
    let mut engine = MatchEngine::new(client, BotPlayer::with_bomb_odds(1, 1.0));

    let report = engine.play_round("rock").await.expect("Round failed");

    assert_eq!(report.record().bot_move(), Move::Bomb);
    assert_eq!(report.record().winner(), Winner::Bot);
    assert_eq!(report.record().reason(), "bomb beats rock");
    assert!(*engine.summary().bot_bomb_used());

    // The bot's bomb is spent; the next draw is a standard move.
    let report = engine.play_round("rock").await.expect("Round failed");
    assert_ne!(report.record().bot_move(), Move::Bomb);
}

#[tokio::test]
async fn test_user_bomb_beats_bot_bomb() {
    let client = ScriptedClient::new(vec![intent("bomb")]);
    let mut engine = MatchEngine::new(client, BotPlayer::with_bomb_odds(1, 1.0));

    let report = engine.play_round("bomb").await.expect("Round failed");

    assert_eq!(report.record().user_move(), Move::Bomb);
    assert_eq!(report.record().bot_move(), Move::Bomb);
    assert_eq!(report.record().winner(), Winner::User);
    assert!(engine.state().user_bomb_used());
    assert!(engine.state().bot_bomb_used());
}

#[tokio::test]
async fn test_reset_replaces_state_wholesale() {
    let mut engine = engine_with(vec![
        intent("bomb"),
        intent("unclear"),
        intent("unclear"),
        intent("unclear"),
    ]);

    for input in ["bomb", "a", "b", "c"] {
        engine.play_round(input).await.expect("Round failed");
    }
    assert!(engine.state().game_over());

    engine.reset();

    assert_eq!(engine.state().round_number(), 1);
    assert_eq!(engine.state().user_score(), 0);
    assert_eq!(engine.state().bot_score(), 0);
    assert!(!engine.state().user_bomb_used());
    assert!(!engine.state().bot_bomb_used());
    assert!(!engine.state().game_over());
}

#[tokio::test]
async fn test_summary_snapshot() {
    let mut engine = engine_with(vec![intent("bomb")]);
    engine.play_round("bomb").await.expect("Round failed");

    let summary = engine.summary();
    assert_eq!(*summary.rounds_played(), 1);
    assert_eq!(*summary.user_score(), 1);
    assert_eq!(*summary.bot_score(), 0);
    assert!(*summary.user_bomb_used());
    assert!(!*summary.game_over());
}
