use crate::types::EventCategory;

/// Read-only per-tick snapshot of the trigger's user configuration.
///
/// Which fields apply depends on the configured (category, event) pair;
/// the taxonomy decides which of them a query actually binds.
#[derive(Debug, Clone)]
pub struct FilterParams {
    pub category: EventCategory,
    pub event: String,
    pub account_name: String,
    pub collection_name: String,
    pub token_contract: String,
    pub token_symbol: String,
    pub game_contract: String,
    pub staking_contract: String,
    pub action_contract: String,
    pub action_name: String,
    pub min_amount: f64,
}

impl FilterParams {
    /// Baseline parameters for a (category, event) pair. The token contract
    /// and symbol defaults match the original trigger configuration.
    pub fn new(category: EventCategory, event: impl Into<String>) -> Self {
        Self {
            category,
            event: event.into(),
            account_name: String::new(),
            collection_name: String::new(),
            token_contract: "eosio.token".to_string(),
            token_symbol: "WAX".to_string(),
            game_contract: String::new(),
            staking_contract: String::new(),
            action_contract: String::new(),
            action_name: String::new(),
            min_amount: 0.0,
        }
    }
}
