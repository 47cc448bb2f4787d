use crate::errors::CursorRepositoryError;
use wax_trigger_shared::types::Cursor;

/// Trait for interacting with the cursor store.
///
/// This trait provides a clean abstraction over the host-provided backing
/// store for the resumption marker. The poller is the single writer: it
/// reads at tick start and writes at tick end, with no partial commit in
/// between. A host that allows overlapping ticks must add its own mutual
/// exclusion around that read-modify-write.
#[async_trait::async_trait]
pub trait CursorRepository: Send + Sync {
    async fn get_cursor(&self, id: &str) -> Result<Option<Cursor>, CursorRepositoryError>;
    async fn save_cursor(&self, id: &str, cursor: &Cursor) -> Result<(), CursorRepositoryError>;
}
