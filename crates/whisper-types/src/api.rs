use serde::{Deserialize, Serialize};

// -- Trigger endpoint --

/// Response body of the whisper-created trigger.
///
/// Every dispatch is acknowledged; `outcome` only reports what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    /// One of `delivered`, `skipped`, `failed`.
    pub outcome: String,
    /// Skip reason or failure detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Receipt id returned by the push provider on delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}
