//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CafeHubError`]
//! via `#[from]`. Adapters decide how each variant is presented.

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CafeHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("write rejected")]
    Write(#[from] WriteError),

    #[error("not authorized")]
    Unauthorized,

    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Request input rejected before reaching storage.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("coffee_price cannot be null.")]
    MissingPrice,

    /// The query string or form body could not be decoded.
    #[error("Malformed request parameters")]
    Malformed,
}

/// No record matched the given identifier.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A mutation the storage layer refused to commit.
///
/// The transaction has already been rolled back when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// A `NOT NULL` column received no value.
    #[error("Missing input parameters")]
    MissingInput,

    /// A `UNIQUE` column received a value that already exists.
    #[error("Duplicate entry")]
    Duplicate,

    /// Any other failure while writing.
    #[error("Error writing to database")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),
}
