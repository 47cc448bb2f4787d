//! Error types for the outbound service clients.
use thiserror::Error;

/// Represents errors from the History / Chain-Info transports.
///
/// Decode failures surface as `Http` as well since the body is consumed
/// through the same request pipeline.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}
