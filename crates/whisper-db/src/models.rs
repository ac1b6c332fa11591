/// Database row types — these map directly to SQLite rows.
/// Distinct from whisper-types models to keep the DB layer independent.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRow {
    pub id: String,
    pub user_a: String,
    pub user_b: String,
    pub nickname_a: String,
    pub nickname_b: String,
    pub token_a: Option<String>,
    pub token_b: Option<String>,
}
