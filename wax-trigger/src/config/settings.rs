//! Environment-backed trigger settings.
//!
//! All knobs come from the environment (or a `.env` file loaded by the
//! binary). Unset optional variables keep the `FilterParams` defaults;
//! the empty string counts as unset so a blank variable never turns into
//! an empty-string filter downstream.

use std::env;
use std::str::FromStr;

use thiserror::Error;
use wax_trigger_shared::types::{EventCategory, FilterParams};

pub const DEFAULT_HYPERION_ENDPOINT: &str = "https://wax.eosphere.io";
pub const DEFAULT_CHAIN_API_ENDPOINT: &str = "https://wax.greymass.com";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_TRIGGER_ID: &str = "wax-trigger";

/// Errors raised while reading the trigger configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    MissingVariable { name: &'static str },
    #[error("unknown event category \"{value}\"")]
    UnknownCategory { value: String },
    #[error("invalid value \"{value}\" for {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Everything the trigger application needs from the environment.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    pub params: FilterParams,
    pub hyperion_endpoint: String,
    pub chain_api_endpoint: String,
    pub database_url: Option<String>,
    pub poll_interval_secs: u64,
    pub trigger_id: String,
}

impl TriggerConfig {
    /// Reads the trigger configuration from the environment.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or a `ConfigError` naming the offending
    /// variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let category_raw = require("TRIGGER_EVENT_CATEGORY")?;
        let category = EventCategory::from_str(&category_raw)
            .map_err(|_| ConfigError::UnknownCategory {
                value: category_raw,
            })?;
        let event = require("TRIGGER_EVENT")?;

        let mut params = FilterParams::new(category, event);
        if let Some(value) = optional("TRIGGER_ACCOUNT_NAME") {
            params.account_name = value;
        }
        if let Some(value) = optional("TRIGGER_COLLECTION_NAME") {
            params.collection_name = value;
        }
        if let Some(value) = optional("TRIGGER_TOKEN_CONTRACT") {
            params.token_contract = value;
        }
        if let Some(value) = optional("TRIGGER_TOKEN_SYMBOL") {
            params.token_symbol = value;
        }
        if let Some(value) = optional("TRIGGER_GAME_CONTRACT") {
            params.game_contract = value;
        }
        if let Some(value) = optional("TRIGGER_STAKING_CONTRACT") {
            params.staking_contract = value;
        }
        if let Some(value) = optional("TRIGGER_ACTION_CONTRACT") {
            params.action_contract = value;
        }
        if let Some(value) = optional("TRIGGER_ACTION_NAME") {
            params.action_name = value;
        }
        if let Some(value) = optional("TRIGGER_MIN_AMOUNT") {
            params.min_amount = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "TRIGGER_MIN_AMOUNT",
                value: value.clone(),
            })?;
        }

        let poll_interval_secs = match optional("POLL_INTERVAL_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "POLL_INTERVAL_SECS",
                value: value.clone(),
            })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            params,
            hyperion_endpoint: optional("HYPERION_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_HYPERION_ENDPOINT.to_string()),
            chain_api_endpoint: optional("CHAIN_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CHAIN_API_ENDPOINT.to_string()),
            database_url: optional("DATABASE_URL"),
            poll_interval_secs,
            trigger_id: optional("TRIGGER_ID").unwrap_or_else(|| DEFAULT_TRIGGER_ID.to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVariable { name })
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: &[&str] = &[
        "TRIGGER_EVENT_CATEGORY",
        "TRIGGER_EVENT",
        "TRIGGER_ACCOUNT_NAME",
        "TRIGGER_COLLECTION_NAME",
        "TRIGGER_TOKEN_CONTRACT",
        "TRIGGER_TOKEN_SYMBOL",
        "TRIGGER_GAME_CONTRACT",
        "TRIGGER_STAKING_CONTRACT",
        "TRIGGER_ACTION_CONTRACT",
        "TRIGGER_ACTION_NAME",
        "TRIGGER_MIN_AMOUNT",
        "POLL_INTERVAL_SECS",
        "HYPERION_ENDPOINT",
        "CHAIN_API_ENDPOINT",
        "DATABASE_URL",
        "TRIGGER_ID",
    ];

    fn clear_env_vars() {
        for name in ALL_VARS {
            unsafe {
                env::remove_var(name);
            }
        }
    }

    fn set_var(name: &str, value: &str) {
        unsafe {
            env::set_var(name, value);
        }
    }

    #[test]
    #[serial]
    fn test_missing_category_is_an_error() {
        clear_env_vars();
        set_var("TRIGGER_EVENT", "assetReceived");

        let result = TriggerConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable {
                name: "TRIGGER_EVENT_CATEGORY"
            })
        ));
    }

    #[test]
    #[serial]
    fn test_unknown_category_is_an_error() {
        clear_env_vars();
        set_var("TRIGGER_EVENT_CATEGORY", "weather");
        set_var("TRIGGER_EVENT", "assetReceived");

        let result = TriggerConfig::from_env();
        assert!(matches!(result, Err(ConfigError::UnknownCategory { .. })));
    }

    #[test]
    #[serial]
    fn test_minimal_config_applies_defaults() {
        clear_env_vars();
        set_var("TRIGGER_EVENT_CATEGORY", "nft");
        set_var("TRIGGER_EVENT", "assetReceived");

        let config = TriggerConfig::from_env().unwrap();
        assert_eq!(config.params.category, EventCategory::Nft);
        assert_eq!(config.params.event, "assetReceived");
        assert_eq!(config.params.token_contract, "eosio.token");
        assert_eq!(config.params.token_symbol, "WAX");
        assert_eq!(config.hyperion_endpoint, DEFAULT_HYPERION_ENDPOINT);
        assert_eq!(config.chain_api_endpoint, DEFAULT_CHAIN_API_ENDPOINT);
        assert_eq!(config.database_url, None);
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.trigger_id, "wax-trigger");
    }

    #[test]
    #[serial]
    fn test_blank_optional_counts_as_unset() {
        clear_env_vars();
        set_var("TRIGGER_EVENT_CATEGORY", "nft");
        set_var("TRIGGER_EVENT", "assetReceived");
        set_var("TRIGGER_COLLECTION_NAME", "");

        let config = TriggerConfig::from_env().unwrap();
        assert_eq!(config.params.collection_name, "");
    }

    #[test]
    #[serial]
    fn test_unparseable_min_amount_is_an_error() {
        clear_env_vars();
        set_var("TRIGGER_EVENT_CATEGORY", "account");
        set_var("TRIGGER_EVENT", "waxpReceived");
        set_var("TRIGGER_MIN_AMOUNT", "plenty");

        let result = TriggerConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "TRIGGER_MIN_AMOUNT",
                ..
            })
        ));
    }
}
