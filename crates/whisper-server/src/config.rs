use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Server settings, read from the environment (after `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Service-account JSON for FCM.
    pub fcm_credentials: String,
    pub push_timeout: Duration,
    /// When set, trigger calls must present it as a bearer token.
    pub event_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("WHISPER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = var("WHISPER_PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .context("WHISPER_PORT must be a port number")?;
        let db_path: PathBuf = var("WHISPER_DB_PATH")
            .unwrap_or_else(|| "whisper.db".into())
            .into();
        let push_timeout_secs: u64 = var("WHISPER_PUSH_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .context("WHISPER_PUSH_TIMEOUT_SECS must be a whole number of seconds")?;

        let fcm_credentials = match (var("WHISPER_FCM_CREDENTIALS"), var("WHISPER_FCM_CREDENTIALS_PATH")) {
            (Some(json), _) => json,
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("reading FCM credentials from {}", path))?,
            (None, None) => bail!(
                "FCM credentials missing: set WHISPER_FCM_CREDENTIALS or WHISPER_FCM_CREDENTIALS_PATH"
            ),
        };

        Ok(Self {
            host,
            port,
            db_path,
            fcm_credentials,
            push_timeout: Duration::from_secs(push_timeout_secs),
            event_secret: var("WHISPER_EVENT_SECRET"),
        })
    }
}
