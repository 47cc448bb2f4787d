//! Error types for the poller.
use crate::errors::TaxonomyError;
use thiserror::Error;
use wax_trigger_repository::CursorRepositoryError;

/// Represents errors that can escape a poll tick.
///
/// Upstream query failures and missing optional configuration never appear
/// here: the poller absorbs them into an empty tick. What remains is
/// trigger misconfiguration, caught at setup, and the host's own cursor
/// store failing.
#[derive(Debug, Error)]
pub enum PollerError {
    #[error("Taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),
    #[error("Cursor store error: {0}")]
    CursorStore(#[from] CursorRepositoryError),
}
