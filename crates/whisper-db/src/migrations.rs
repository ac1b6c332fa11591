use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS pairs (
            id          TEXT PRIMARY KEY,
            user_a      TEXT NOT NULL,
            user_b      TEXT NOT NULL,
            nickname_a  TEXT NOT NULL,
            nickname_b  TEXT NOT NULL,
            token_a     TEXT,
            token_b     TEXT,
            updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
