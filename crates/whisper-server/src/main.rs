mod config;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use whisper_db::Database;
use whisper_notify::{Dispatcher, FcmClient, ServiceAccount, SqlitePairDirectory};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whisper=debug,whisper_notify=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Pair directory
    let db = Arc::new(Database::open(&config.db_path)?);
    let directory = SqlitePairDirectory::new(db);

    // Push channel
    let account = ServiceAccount::from_json(&config.fcm_credentials)?;
    let fcm = FcmClient::new(account, config.push_timeout)?;
    info!("FCM client ready for project {}", fcm.project_id());

    let dispatcher = Dispatcher::new(directory, fcm);
    let app = routes::router(dispatcher, config.event_secret.clone());

    if config.event_secret.is_none() {
        info!("WHISPER_EVENT_SECRET not set, trigger endpoint is unauthenticated");
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Whisper notification server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(signal) => signal,
                Err(e) => {
                    tracing::warn!("Could not install SIGTERM handler: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
