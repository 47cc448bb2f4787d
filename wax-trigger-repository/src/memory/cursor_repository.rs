//! In-memory implementation of the cursor store.
//!
//! Holds cursors in process memory with the same lifetime as the trigger
//! registration, the way a workflow host's scoped static-data record would.
//! Also the store used by the engine's test suites.

use std::collections::HashMap;

use crate::CursorRepository;
use crate::errors::CursorRepositoryError;
use async_trait::async_trait;
use tokio::sync::RwLock;
use wax_trigger_shared::types::Cursor;

/// Cursor store backed by a process-local map.
#[derive(Default)]
pub struct InMemoryCursorRepository {
    cursors: RwLock<HashMap<String, Cursor>>,
}

impl InMemoryCursorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CursorRepository for InMemoryCursorRepository {
    async fn get_cursor(&self, id: &str) -> Result<Option<Cursor>, CursorRepositoryError> {
        Ok(self.cursors.read().await.get(id).cloned())
    }

    async fn save_cursor(&self, id: &str, cursor: &Cursor) -> Result<(), CursorRepositoryError> {
        self.cursors
            .write()
            .await
            .insert(id.to_string(), cursor.clone());
        Ok(())
    }
}
