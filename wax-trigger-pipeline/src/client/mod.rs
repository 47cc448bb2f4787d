//! Outbound transports: the History Service and the Chain-Info Service.
//!
//! Both sit behind traits so the poller can be driven by mocks in tests
//! and so every outbound call, the block check included, goes through one
//! injected client rather than ad hoc per-branch HTTP.

mod chain;
mod hyperion;

pub use chain::ChainApiClient;
pub use hyperion::HyperionClient;

use async_trait::async_trait;

use crate::errors::ClientError;
use wax_trigger_shared::types::{ChainInfo, HistoryQuery, RawAction};

/// Time-ranged, filtered action history reads.
#[async_trait]
pub trait HistoryClient: Send + Sync {
    /// Runs one history query.
    ///
    /// Returns the matching actions in the order the service produced
    /// them; with an ascending query that order is oldest-first.
    async fn get_actions(&self, query: &HistoryQuery) -> Result<Vec<RawAction>, ClientError>;
}

/// Chain head and irreversibility reads.
#[async_trait]
pub trait ChainInfoClient: Send + Sync {
    async fn get_info(&self) -> Result<ChainInfo, ClientError>;
}
