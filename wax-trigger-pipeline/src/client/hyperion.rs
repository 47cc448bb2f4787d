//! Hyperion-backed implementation of the history client.

use async_trait::async_trait;
use serde::Deserialize;

use super::HistoryClient;
use crate::errors::ClientError;
use wax_trigger_shared::types::{HistoryQuery, RawAction};

/// Wire shape of the Hyperion `get_actions` response; only the action list
/// is read.
#[derive(Debug, Deserialize)]
struct ActionsResponse {
    #[serde(default)]
    actions: Vec<RawAction>,
}

/// [`HistoryClient`] over a Hyperion endpoint.
pub struct HyperionClient {
    http: reqwest::Client,
    base_url: String,
}

impl HyperionClient {
    /// Creates a client against the given Hyperion base URL.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }
}

#[async_trait]
impl HistoryClient for HyperionClient {
    async fn get_actions(&self, query: &HistoryQuery) -> Result<Vec<RawAction>, ClientError> {
        let url = format!("{}/v2/history/get_actions", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let body: ActionsResponse = response.json().await?;
        Ok(body.actions)
    }
}
