mod client;
mod poller;
mod query;
mod taxonomy;

pub use client::ClientError;
pub use poller::PollerError;
pub use query::QueryError;
pub use taxonomy::TaxonomyError;
