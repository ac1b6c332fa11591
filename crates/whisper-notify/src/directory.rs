use std::future::Future;
use std::sync::Arc;

use whisper_db::Database;
use whisper_db::models::PairRow;
use whisper_types::models::Pair;

use crate::error::DirectoryError;

/// Read access to pair records, keyed by pair id.
pub trait PairDirectory: Send + Sync + 'static {
    /// `Ok(None)` when no pair with that id exists.
    fn get(
        &self,
        pair_id: &str,
    ) -> impl Future<Output = Result<Option<Pair>, DirectoryError>> + Send;
}

/// Pair directory backed by the local SQLite database.
#[derive(Clone)]
pub struct SqlitePairDirectory {
    db: Arc<Database>,
}

impl SqlitePairDirectory {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl PairDirectory for SqlitePairDirectory {
    async fn get(&self, pair_id: &str) -> Result<Option<Pair>, DirectoryError> {
        // Run blocking DB read off the async runtime
        let db = self.db.clone();
        let id = pair_id.to_string();
        let row = tokio::task::spawn_blocking(move || db.get_pair(&id))
            .await
            .map_err(|e| DirectoryError::Unavailable(format!("spawn_blocking join error: {}", e)))?
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        Ok(row.map(pair_from_row))
    }
}

fn pair_from_row(row: PairRow) -> Pair {
    Pair {
        user_a: row.user_a,
        user_b: row.user_b,
        nickname_a: row.nickname_a,
        nickname_b: row.nickname_b,
        token_a: row.token_a,
        token_b: row.token_b,
    }
}
