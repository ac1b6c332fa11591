//! Whisper notification dispatch.
//!
//! A newly created whisper is turned into at most one push notification for
//! the other member of its pair:
//! - [`directory`] looks the pair up
//! - [`resolver`] picks the recipient side
//! - [`payload`] builds the notification
//! - [`push`] hands it to a delivery channel ([`fcm`] in production)
//!
//! [`Dispatcher`] runs those steps and never reports an error to its caller.

pub mod directory;
pub mod dispatcher;
pub mod error;
pub mod fcm;
pub mod payload;
pub mod push;
pub mod resolver;

pub use directory::{PairDirectory, SqlitePairDirectory};
pub use dispatcher::{DispatchFailure, DispatchOutcome, Dispatcher, SkipReason};
pub use error::{DirectoryError, FcmConfigError, MalformedPairReference, PushError};
pub use fcm::{FcmClient, ServiceAccount};
pub use push::PushChannel;
pub use resolver::{Resolution, Side, resolve};
