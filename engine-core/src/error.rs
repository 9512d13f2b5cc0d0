use thiserror::Error;

/// Failure raised by the storage collaborator.
///
/// The engine propagates these unchanged; it has no recovery of its own
/// beyond not leaving partial writes where avoidable.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(anyhow::Error),

    #[error("row not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound,
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StorageError::Conflict(err.to_string())
            }
            _ => StorageError::Database(anyhow::Error::new(err)),
        }
    }
}

/// Error taxonomy for document engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Recoverable caller input error; carries a user-facing reason.
    #[error("validation error: {0}")]
    Validation(String),

    /// A plan-limited action was denied; carries the limit explanation.
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// An operation not valid in the document's current lifecycle state.
    #[error("state conflict: {0}")]
    StateConflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl EngineError {
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }

    pub fn quota_exceeded(msg: impl Into<String>) -> Self {
        EngineError::QuotaExceeded(msg.into())
    }

    pub fn state_conflict(msg: impl Into<String>) -> Self {
        EngineError::StateConflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        EngineError::NotFound(msg.into())
    }
}
