use thiserror::Error;

#[derive(Debug, Error)]
/// Represents errors that can occur within the cursor store.
///
/// This enum consolidates error conditions specific to the backing store,
/// such as database failures and cursor (de)serialization failures.
pub enum CursorRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
