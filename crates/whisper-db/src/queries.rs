use crate::Database;
use crate::models::PairRow;
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Pairs --

    pub fn get_pair(&self, id: &str) -> Result<Option<PairRow>> {
        self.with_conn(|conn| query_pair(conn, id))
    }

    /// Insert or replace a pair record. Written by the pairing side; the
    /// notification path only reads.
    pub fn upsert_pair(&self, pair: &PairRow) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO pairs (id, user_a, user_b, nickname_a, nickname_b, token_a, token_b)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 ON CONFLICT(id) DO UPDATE SET
                    user_a = excluded.user_a,
                    user_b = excluded.user_b,
                    nickname_a = excluded.nickname_a,
                    nickname_b = excluded.nickname_b,
                    token_a = excluded.token_a,
                    token_b = excluded.token_b,
                    updated_at = datetime('now')",
                rusqlite::params![
                    pair.id,
                    pair.user_a,
                    pair.user_b,
                    pair.nickname_a,
                    pair.nickname_b,
                    pair.token_a,
                    pair.token_b,
                ],
            )?;
            Ok(())
        })
    }
}

fn query_pair(conn: &Connection, id: &str) -> Result<Option<PairRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_a, user_b, nickname_a, nickname_b, token_a, token_b
         FROM pairs WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(PairRow {
                id: row.get(0)?,
                user_a: row.get(1)?,
                user_b: row.get(2)?,
                nickname_a: row.get(3)?,
                nickname_b: row.get(4)?,
                token_a: row.get(5)?,
                token_b: row.get(6)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
