use std::future::Future;

use whisper_types::notification::NotificationPayload;

use crate::error::PushError;

/// A send-to-device capability.
///
/// Implementations own their own timeouts. On success they return the
/// provider's receipt id for the message.
pub trait PushChannel: Send + Sync + 'static {
    fn send(
        &self,
        token: &str,
        payload: &NotificationPayload,
    ) -> impl Future<Output = Result<String, PushError>> + Send;
}
