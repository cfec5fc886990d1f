//! Instruction prompts for the two remote stages.
//!
//! Only intent extraction and response rendering go over the wire.
//! Round adjudication is local, so no rule-enforcement prompt exists.

/// Instruction for extracting a canonical move from free-text input.
///
/// The reply contract is a single JSON object with one `intent` field;
/// anything else is rejected by the wire parser.
pub const INTENT_EXTRACTOR_PROMPT: &str = r#"You are an intent extraction agent for Rock-Paper-Scissors Plus.

EXTRACT user's intended move from text input.

VALID MOVES: rock, paper, scissors, bomb, unclear

RULES:
1. Extract move if text indicates one move (even with typos like "ruck", "scisor", "papper")
2. Return "unclear" only for: gibberish, multiple moves, or no move indication

TYPO HANDLING EXAMPLES:
- "ruck", "rok", "roc" → rock
- "papper", "pape", "papir" → paper
- "scisor", "sissors", "scisors" → scissors
- "bom", "bombe", "boom" → bomb
- "stone", "boulder" → rock
- "wrap", "cover" → paper
- "cut", "snip" → scissors
- "blast", "explosion" → bomb

UNCLEAR EXAMPLES:
- "asdf", "xyz" → unclear (gibberish)
- "rock paper" → unclear (multiple moves)
- "attack", "something" → unclear (no move)
- "hello", "what" → unclear (no move)

RESPONSE FORMAT:
Respond ONLY with JSON:
{
  "intent": "rock|paper|scissors|bomb|unclear"
}
"#;

/// Instruction for rendering a ruled round as a friendly message.
///
/// The output is free prose; the local plain renderer mirrors the same
/// shape when the remote call fails.
pub const RESPONSE_GENERATOR_PROMPT: &str = r#"You are a response generator.

Convert game data to user-friendly message.

INPUT:
{
  "round": number,
  "user_move": "move",
  "bot_move": "move",
  "status": "VALID|INVALID|UNCLEAR",
  "winner": "USER|BOT|DRAW|NONE",
  "reason": "explanation",
  "bomb_now_used": true|false
}

OUTPUT FORMAT:
Round X
You played: [user_move]
Bot played: [bot_move]
Result: [You win!/Bot wins!/Draw!]
Explanation: [reason]
[Note: Unclear moves waste your turn. if status=UNCLEAR]
[Note: Bomb has been used. if bomb_now_used=true]
"#;
