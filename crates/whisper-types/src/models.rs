use serde::{Deserialize, Serialize};

/// A chat message between the two members of a pair.
/// Created upstream by the chat feature; never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Document id of the whisper, when the event source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub pair_id: String,
    pub sender_id: String,
    pub text: String,
}

/// Two matched users. Owned by the pairing subsystem, read-only to the
/// notification path.
///
/// Nicknames and tokens correspond positionally to `user_a` / `user_b`.
/// A token is `None` when that user has no registered device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    pub user_a: String,
    pub user_b: String,
    pub nickname_a: String,
    pub nickname_b: String,
    #[serde(default)]
    pub token_a: Option<String>,
    #[serde(default)]
    pub token_b: Option<String>,
}
