//! The per-tick poll state machine.
//!
//! One external invocation drives one full tick: read the cursor, branch
//! between the block check and the action query, filter and normalize the
//! results, and commit the advanced cursor. Ticks never overlap and never
//! partially commit; the cursor has a single writer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::client::{ChainInfoClient, HistoryClient};
use crate::errors::PollerError;
use crate::filter::passes_amount_filter;
use crate::normalizer::{normalize_action, normalize_block};
use crate::query::QueryBuilder;
use crate::taxonomy::EventTaxonomy;
use wax_trigger_repository::CursorRepository;
use wax_trigger_shared::types::{
    Cursor, EventCategory, EventDefinition, FilterParams, NormalizedEvent,
};

const NEW_BLOCK: &str = "newBlock";
const IRREVERSIBLE_BLOCK: &str = "irreversibleBlock";

/// `Poller` drives one configured trigger against the upstream services.
///
/// It owns the trigger's parameter snapshot and its resolved taxonomy
/// definition, and borrows the injected clients and cursor store. Per-tick
/// upstream failures are absorbed into an empty tick; the cursor advances
/// regardless (the dropped window is logged, see `query_actions`).
pub struct Poller {
    definition: &'static EventDefinition,
    params: FilterParams,
    history: Arc<dyn HistoryClient>,
    chain_info: Arc<dyn ChainInfoClient>,
    cursors: Arc<dyn CursorRepository>,
    cursor_id: String,
}

impl Poller {
    /// Creates a poller for one configured trigger.
    ///
    /// Resolves the (category, event) pair against the taxonomy up front so
    /// an unknown event surfaces at setup, never mid-tick.
    pub fn new(
        taxonomy: &EventTaxonomy,
        params: FilterParams,
        history: Arc<dyn HistoryClient>,
        chain_info: Arc<dyn ChainInfoClient>,
        cursors: Arc<dyn CursorRepository>,
        cursor_id: impl Into<String>,
    ) -> Result<Self, PollerError> {
        let definition = taxonomy.definition(params.category, &params.event)?;
        Ok(Self {
            definition,
            params,
            history,
            chain_info,
            cursors,
            cursor_id: cursor_id.into(),
        })
    }

    /// Runs one tick at the current instant.
    ///
    /// # Returns
    ///
    /// `None` when the tick produced no events, otherwise the normalized
    /// events in upstream order.
    pub async fn poll(&self) -> Result<Option<Vec<NormalizedEvent>>, PollerError> {
        self.poll_at(Utc::now()).await
    }

    /// Runs one tick as-of `now`. Split out from [`Poller::poll`] so tests
    /// can pin the clock.
    pub async fn poll_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<Vec<NormalizedEvent>>, PollerError> {
        let mut cursor = self
            .cursors
            .get_cursor(&self.cursor_id)
            .await?
            .unwrap_or_else(|| Cursor::initial(now));
        let window_end = now;

        let events = if self.is_block_check() {
            self.check_block(&mut cursor).await
        } else {
            self.query_actions(&cursor, window_end).await
        };

        // The timestamp advances whether or not the tick produced anything,
        // even after an upstream failure. A failed window is dropped, not
        // retried.
        cursor.last_timestamp = window_end;
        self.cursors.save_cursor(&self.cursor_id, &cursor).await?;

        if events.is_empty() {
            Ok(None)
        } else {
            Ok(Some(events))
        }
    }

    fn is_block_check(&self) -> bool {
        self.params.category == EventCategory::Block
            && (self.params.event == NEW_BLOCK || self.params.event == IRREVERSIBLE_BLOCK)
    }

    /// Block-progress branch: one chain-info call, at most one event.
    async fn check_block(&self, cursor: &mut Cursor) -> Vec<NormalizedEvent> {
        let info = match self.chain_info.get_info().await {
            Ok(info) => info,
            Err(error) => {
                warn!(error = %error, "chain info query failed; empty tick");
                return Vec::new();
            }
        };

        let (block_num, block_id) = if self.params.event == IRREVERSIBLE_BLOCK {
            (
                info.last_irreversible_block_num,
                info.last_irreversible_block_id.as_str(),
            )
        } else {
            (info.head_block_num, info.head_block_id.as_str())
        };

        let last_seen = cursor.last_block_num.unwrap_or(block_num.saturating_sub(1));
        if block_num <= last_seen {
            return Vec::new();
        }

        cursor.last_block_num = Some(block_num);
        vec![normalize_block(&info, &self.params.event, block_num, block_id)]
    }

    /// History branch: build the window query, fetch, filter, normalize.
    async fn query_actions(
        &self,
        cursor: &Cursor,
        window_end: DateTime<Utc>,
    ) -> Vec<NormalizedEvent> {
        let query = match QueryBuilder::build(
            self.definition,
            &self.params,
            cursor.last_timestamp,
            window_end,
        ) {
            Ok(query) => query,
            Err(error) => {
                debug!(error = %error, "required parameter not configured; skipping tick");
                return Vec::new();
            }
        };

        let actions = match self.history.get_actions(&query).await {
            Ok(actions) => actions,
            Err(error) => {
                warn!(
                    error = %error,
                    window_start = %query.after,
                    window_end = %query.before,
                    "history query failed; window dropped",
                );
                return Vec::new();
            }
        };

        actions
            .iter()
            .filter(|action| {
                passes_amount_filter(action, self.params.min_amount, &self.params.token_symbol)
            })
            .map(|action| normalize_action(action, &self.params.event, self.params.category))
            .collect()
    }
}
