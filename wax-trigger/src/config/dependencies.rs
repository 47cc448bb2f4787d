use std::sync::Arc;

use tracing::info;
use wax_trigger_pipeline::client::{ChainApiClient, HyperionClient};
use wax_trigger_pipeline::poller::Poller;
use wax_trigger_pipeline::taxonomy::EventTaxonomy;
use wax_trigger_repository::{
    CursorRepository, InMemoryCursorRepository, PostgresCursorRepository,
};

use crate::config::TriggerConfig;
use crate::errors::TriggerError;

/// `Dependencies` holds the wired-up components for one trigger instance.
///
/// It owns the poller, with its clients and cursor store already injected,
/// plus the interval the host loop should tick at.
pub struct Dependencies {
    pub poller: Poller,
    pub poll_interval_secs: u64,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance from the given configuration.
    ///
    /// This asynchronous function is responsible for initializing and
    /// wiring up the service clients, the cursor store, and the poller.
    /// The cursor store is PostgreSQL when `DATABASE_URL` is configured
    /// and an in-process store otherwise.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `TriggerError` if any dependency fails to initialize — including an
    /// unknown (category, event) pair, which is rejected here rather than
    /// at poll time.
    pub async fn new(config: &TriggerConfig) -> Result<Self, TriggerError> {
        let http = reqwest::Client::new();
        let history = Arc::new(HyperionClient::new(
            http.clone(),
            config.hyperion_endpoint.clone(),
        ));
        let chain_info = Arc::new(ChainApiClient::new(
            http,
            config.chain_api_endpoint.clone(),
        ));

        let cursors: Arc<dyn CursorRepository> = match &config.database_url {
            Some(url) => {
                let pool = sqlx::PgPool::connect(url).await?;
                Arc::new(PostgresCursorRepository::new(pool).await?)
            }
            None => {
                info!("DATABASE_URL not set; keeping the cursor in process memory");
                Arc::new(InMemoryCursorRepository::new())
            }
        };

        let taxonomy = EventTaxonomy::new();
        let poller = Poller::new(
            &taxonomy,
            config.params.clone(),
            history,
            chain_info,
            cursors,
            config.trigger_id.clone(),
        )?;

        Ok(Self {
            poller,
            poll_interval_secs: config.poll_interval_secs,
        })
    }
}
