use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use whisper_types::api::DispatchReport;
use whisper_types::models::Message;

use crate::directory::PairDirectory;
use crate::error::{DirectoryError, PushError};
use crate::payload::whisper_payload;
use crate::push::PushChannel;
use crate::resolver::resolve;

/// Why a whisper produced no notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The whisper references a pair that does not exist.
    PairNotFound,
    /// The sender is not a member of the referenced pair.
    MalformedPairReference,
    /// The recipient has no registered device.
    NoRecipientToken,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PairNotFound => "pair_not_found",
            Self::MalformedPairReference => "malformed_pair_reference",
            Self::NoRecipientToken => "no_recipient_token",
        }
    }
}

#[derive(Debug, Error)]
pub enum DispatchFailure {
    // Inner error is rendered in the message, so no #[source]
    #[error("pair lookup failed: {0}")]
    Lookup(DirectoryError),

    #[error("delivery failed: {0}")]
    Delivery(PushError),
}

/// Terminal result of one dispatch. None of these is an error from the
/// trigger's point of view: the whisper already exists either way.
#[derive(Debug)]
pub enum DispatchOutcome {
    Delivered { message_id: String },
    Skipped(SkipReason),
    Failed(DispatchFailure),
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    pub fn report(&self) -> DispatchReport {
        match self {
            Self::Delivered { message_id } => DispatchReport {
                outcome: "delivered".into(),
                detail: None,
                message_id: Some(message_id.clone()),
            },
            Self::Skipped(reason) => DispatchReport {
                outcome: "skipped".into(),
                detail: Some(reason.as_str().into()),
                message_id: None,
            },
            Self::Failed(failure) => DispatchReport {
                outcome: "failed".into(),
                detail: Some(failure.to_string()),
                message_id: None,
            },
        }
    }
}

/// Turns newly created whispers into push notifications.
///
/// Holds no mutable state, so clones can dispatch concurrently.
pub struct Dispatcher<D, P> {
    inner: Arc<DispatcherInner<D, P>>,
}

struct DispatcherInner<D, P> {
    directory: D,
    push: P,
}

impl<D, P> Clone for Dispatcher<D, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<D: PairDirectory, P: PushChannel> Dispatcher<D, P> {
    pub fn new(directory: D, push: P) -> Self {
        Self {
            inner: Arc::new(DispatcherInner { directory, push }),
        }
    }

    /// Notify the other member of the whisper's pair.
    ///
    /// Every problem along the way is logged and folded into the returned
    /// outcome; this never fails.
    pub async fn dispatch(&self, message: &Message) -> DispatchOutcome {
        let pair_id = message.pair_id.as_str();
        let message_id = message.id.as_deref().unwrap_or("-");

        let pair = match self.inner.directory.get(pair_id).await {
            Ok(Some(pair)) => pair,
            Ok(None) => {
                warn!(pair_id, message_id, "Pair not found, no notification sent");
                return DispatchOutcome::Skipped(SkipReason::PairNotFound);
            }
            Err(e) => {
                error!(pair_id, message_id, error = %e, "Pair lookup failed");
                return DispatchOutcome::Failed(DispatchFailure::Lookup(e));
            }
        };

        let resolution = match resolve(message, &pair) {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!(pair_id, message_id, "Malformed pair reference: {}", e);
                return DispatchOutcome::Skipped(SkipReason::MalformedPairReference);
            }
        };

        let Some(token) = resolution.recipient_token else {
            debug!(pair_id, message_id, "Recipient has no registered device");
            return DispatchOutcome::Skipped(SkipReason::NoRecipientToken);
        };

        let payload = whisper_payload(resolution.sender_nickname, &message.text, pair_id);

        match self.inner.push.send(token, &payload).await {
            Ok(receipt) => {
                info!(pair_id, message_id, receipt = %receipt, "Notification sent");
                DispatchOutcome::Delivered { message_id: receipt }
            }
            Err(e) => {
                error!(pair_id, message_id, error = %e, "Error sending notification");
                DispatchOutcome::Failed(DispatchFailure::Delivery(e))
            }
        }
    }
}
