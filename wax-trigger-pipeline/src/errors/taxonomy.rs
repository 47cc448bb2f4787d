//! Error types for taxonomy lookups.
use thiserror::Error;
use wax_trigger_shared::types::EventCategory;

/// Represents errors raised while resolving a (category, event) pair.
///
/// An unknown pair is a configuration defect and surfaces when the trigger
/// is set up, never mid-tick.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("unknown event \"{event}\" in category \"{category}\"")]
    UnknownEvent {
        category: EventCategory,
        event: String,
    },
}
