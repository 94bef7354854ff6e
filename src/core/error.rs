use thiserror::Error;

/// Failure of a storage operation.
///
/// Handlers branch on the variant, never on the message text.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Employee {0} not found")]
    NotFound(i64),

    #[error("Unique constraint violation: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an insert failure, splitting uniqueness violations out of
    /// the generic database bucket.
    pub fn from_insert(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
