use thiserror::Error;

/// The sender of a whisper is neither member of the pair it references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sender {sender_id} is not a member of pair {pair_id}")]
pub struct MalformedPairReference {
    pub pair_id: String,
    pub sender_id: String,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("pair directory unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum PushError {
    #[error("push request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("push provider rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("push authorization failed: {0}")]
    Auth(String),
}

/// Problems building an FCM client from service-account credentials.
#[derive(Debug, Error)]
pub enum FcmConfigError {
    #[error("invalid service account JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid service account private key: {0}")]
    Key(#[from] jsonwebtoken::errors::Error),

    #[error("could not build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
