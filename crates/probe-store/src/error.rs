use thiserror::Error;

/// Errors that can occur when talking to the probe store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The probe write itself failed.
    #[error("Probe write failed: {0}")]
    WriteFailed(String),
}

/// Result type for probe store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
