use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of the `type` data entry on whisper notifications.
/// Clients route on it without opening the notification.
pub const WHISPER_TYPE: &str = "whisper";

/// Data key carrying the originating pair id.
pub const DATA_PAIR_ID: &str = "pairId";

/// Data key carrying the notification type discriminator.
pub const DATA_TYPE: &str = "type";

/// A push notification ready to hand to a push channel.
///
/// `data` is an ordered map so two payloads built from the same inputs
/// compare and serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}
