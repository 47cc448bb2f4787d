//! Error types for history query construction.
use thiserror::Error;

/// Represents errors raised while translating an event definition into a
/// concrete history query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A parameter the definition binds is not configured. The poller
    /// treats this as "skip the tick": an unscoped account-wide query is
    /// never sent upstream.
    #[error("missing required parameter \"{parameter}\" for event \"{event}\"")]
    MissingRequiredParameter {
        event: &'static str,
        parameter: &'static str,
    },
}
