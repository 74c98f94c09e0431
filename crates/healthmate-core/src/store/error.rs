use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid exercise record: {0}")]
    InvalidRecord(String),

    #[error("Corrupt exercise row {id}: {reason}")]
    CorruptRow { id: String, reason: String },

    #[error("Database schema version {found} is newer than the latest supported version {latest}")]
    UnsupportedSchemaVersion { found: i64, latest: u32 },

    #[error("No migration defined for schema version {0}")]
    UnknownVersion(u32),
}
