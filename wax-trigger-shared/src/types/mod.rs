mod category;
mod chain_info;
mod cursor;
mod definition;
mod filter_params;
mod history_query;
mod normalized_event;
mod raw_action;

pub use category::{EventCategory, ParseEventCategoryError};
pub use chain_info::ChainInfo;
pub use cursor::Cursor;
pub use definition::{ContractSource, EventDefinition};
pub use filter_params::FilterParams;
pub use history_query::{HistoryQuery, SortOrder};
pub use normalized_event::{ActionSummary, NormalizedEvent};
pub use raw_action::{ActionBody, RawAction};
