//! Builds one History Service query from an event definition, the user's
//! filter parameters, and the tick's time window.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::errors::QueryError;
use wax_trigger_shared::types::{
    ContractSource, EventDefinition, FilterParams, HistoryQuery, SortOrder,
};

/// Upper bound on actions fetched per tick.
const QUERY_LIMIT: u32 = 100;

/// Translates taxonomy definitions into concrete history queries.
pub struct QueryBuilder;

impl QueryBuilder {
    /// Builds the query for one tick window.
    ///
    /// Optional scalar filters are included only when non-empty; an empty
    /// value is omitted entirely, never sent as an empty-string filter.
    /// Alternate action names are joined with a comma for OR matching.
    ///
    /// # Returns
    ///
    /// The query, or `QueryError::MissingRequiredParameter` when a
    /// parameter the definition requires is not configured.
    pub fn build(
        definition: &EventDefinition,
        params: &FilterParams,
        after: DateTime<Utc>,
        before: DateTime<Utc>,
    ) -> Result<HistoryQuery, QueryError> {
        let mut filters = BTreeMap::new();

        match definition.contract {
            ContractSource::Fixed(contract) => {
                filters.insert("act.account".to_string(), contract.to_string());
            }
            ContractSource::TokenContract => {
                if params.token_contract.is_empty() {
                    return Err(QueryError::MissingRequiredParameter {
                        event: definition.key,
                        parameter: "tokenContract",
                    });
                }
                filters.insert("act.account".to_string(), params.token_contract.clone());
            }
            ContractSource::StakingContract => {
                if !params.staking_contract.is_empty() {
                    filters.insert("act.account".to_string(), params.staking_contract.clone());
                }
            }
            ContractSource::GameContract => {
                if !params.game_contract.is_empty() {
                    filters.insert("act.account".to_string(), params.game_contract.clone());
                }
            }
            ContractSource::ActionContract => {
                if params.action_contract.is_empty() {
                    return Err(QueryError::MissingRequiredParameter {
                        event: definition.key,
                        parameter: "actionContract",
                    });
                }
                filters.insert("act.account".to_string(), params.action_contract.clone());
            }
            ContractSource::Unfiltered => {}
        }

        if !definition.action_names.is_empty() {
            filters.insert("act.name".to_string(), definition.action_names.join(","));
        } else if definition.contract == ContractSource::ActionContract
            && !params.action_name.is_empty()
        {
            filters.insert("act.name".to_string(), params.action_name.clone());
        }

        if let Some(field) = definition.account_field {
            if params.account_name.is_empty() {
                return Err(QueryError::MissingRequiredParameter {
                    event: definition.key,
                    parameter: "accountName",
                });
            }
            filters.insert(field.to_string(), params.account_name.clone());
        }

        if definition.collection_scoped && !params.collection_name.is_empty() {
            filters.insert(
                "data.collection_name".to_string(),
                params.collection_name.clone(),
            );
        }

        Ok(HistoryQuery {
            after,
            before,
            limit: QUERY_LIMIT,
            sort: SortOrder::Asc,
            filters,
        })
    }
}
