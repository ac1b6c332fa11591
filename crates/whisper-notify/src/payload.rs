use std::collections::BTreeMap;

use whisper_types::notification::{DATA_PAIR_ID, DATA_TYPE, NotificationPayload, WHISPER_TYPE};

/// Notification for a new whisper. Text is passed through untouched;
/// provider size limits are the push channel's concern.
pub fn whisper_payload(sender_nickname: &str, text: &str, pair_id: &str) -> NotificationPayload {
    let mut data = BTreeMap::new();
    data.insert(DATA_PAIR_ID.to_string(), pair_id.to_string());
    data.insert(DATA_TYPE.to_string(), WHISPER_TYPE.to_string());

    NotificationPayload {
        title: format!("New message from {}", sender_nickname),
        body: text.to_string(),
        data,
    }
}

/// Notification sent by the ad-hoc sender: no routing data.
pub fn direct_payload(sender_name: &str, body: &str) -> NotificationPayload {
    NotificationPayload {
        title: format!("A new message from {}", sender_name),
        body: body.to_string(),
        data: BTreeMap::new(),
    }
}
