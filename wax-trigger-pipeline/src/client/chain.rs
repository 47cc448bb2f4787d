//! Chain-API-backed implementation of the chain-info client.

use async_trait::async_trait;

use super::ChainInfoClient;
use crate::errors::ClientError;
use wax_trigger_shared::types::ChainInfo;

/// [`ChainInfoClient`] over a chain API endpoint.
pub struct ChainApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChainApiClient {
    /// Creates a client against the given chain API base URL.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }
}

#[async_trait]
impl ChainInfoClient for ChainApiClient {
    async fn get_info(&self) -> Result<ChainInfo, ClientError> {
        let url = format!("{}/v1/chain/get_info", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}
