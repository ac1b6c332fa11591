//! Send a single push notification from environment input.
//!
//! Reads `FCM_SERVER_KEY` (service-account JSON), `MESSAGE`, `TOKEN` and
//! `SENDER_NAME`. Exits non-zero if any is missing or the send fails.

use std::process::ExitCode;
use std::time::Duration;

use tracing::{error, info};

use whisper_notify::payload::direct_payload;
use whisper_notify::{FcmClient, PushChannel, ServiceAccount};

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

const REQUIRED_VARS: [&str; 4] = ["FCM_SERVER_KEY", "MESSAGE", "TOKEN", "SENDER_NAME"];

#[derive(Debug, PartialEq, Eq)]
struct Inputs {
    credentials: String,
    message: String,
    token: String,
    sender_name: String,
}

/// Collect the required inputs, or the names of those that are missing.
/// Empty values count as missing.
fn read_inputs<F>(lookup: F) -> Result<Inputs, Vec<&'static str>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut missing = Vec::new();
    let mut values = REQUIRED_VARS.map(|key| match lookup(key).filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            missing.push(key);
            String::new()
        }
    });

    if !missing.is_empty() {
        return Err(missing);
    }

    Ok(Inputs {
        credentials: std::mem::take(&mut values[0]),
        message: std::mem::take(&mut values[1]),
        token: std::mem::take(&mut values[2]),
        sender_name: std::mem::take(&mut values[3]),
    })
}

async fn send(inputs: Inputs) -> anyhow::Result<String> {
    let account = ServiceAccount::from_json(&inputs.credentials)?;
    let client = FcmClient::new(account, SEND_TIMEOUT)?;
    let payload = direct_payload(&inputs.sender_name, &inputs.message);

    Ok(client.send(&inputs.token, &payload).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whisper_send=info,whisper_notify=info".into()),
        )
        .init();

    let inputs = match read_inputs(|key| std::env::var(key).ok()) {
        Ok(inputs) => inputs,
        Err(missing) => {
            eprintln!("Missing required environment variables: {}", missing.join(", "));
            return ExitCode::FAILURE;
        }
    };

    match send(inputs).await {
        Ok(message_id) => {
            info!("Successfully sent message: {}", message_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error sending message: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
