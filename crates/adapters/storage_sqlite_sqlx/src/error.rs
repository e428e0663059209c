//! Storage-specific error type wrapping sqlx errors.

use sqlx::error::ErrorKind;

use cafehub_domain::error::{CafeHubError, WriteError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for CafeHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Classify a failed mutation by the constraint the database reported.
///
/// Relies on the driver's extended result codes, not on message text.
pub(crate) fn write_error(err: sqlx::Error) -> CafeHubError {
    let kind = err.as_database_error().map(|db_err| db_err.kind());
    let err = match kind {
        Some(ErrorKind::NotNullViolation) => WriteError::MissingInput,
        Some(ErrorKind::UniqueViolation) => WriteError::Duplicate,
        _ => WriteError::Database(Box::new(StorageError::from(err))),
    };
    err.into()
}
