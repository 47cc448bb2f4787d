//! Error types for the WAX trigger application.
//! Consolidates errors from configuration, the polling engine, and the
//! cursor store behind one top-level type.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Poller error: {0}")]
    Poller(#[from] wax_trigger_pipeline::errors::PollerError),
    #[error("Cursor repository error: {0}")]
    CursorRepository(#[from] wax_trigger_repository::CursorRepositoryError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
