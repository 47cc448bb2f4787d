//! # WAX Trigger Pipeline
//! This crate defines the core of the event trigger engine: it turns the
//! History Service's stateless, time-ranged query API into a resumable,
//! stateful event stream.
//! It includes modules for the event taxonomy, query construction, the
//! outbound service clients, result filtering, normalization, and the
//! poller that drives one tick end to end, along with error handling.
pub mod client;
pub mod filter;
pub mod normalizer;
pub mod poller;
pub mod query;
pub mod taxonomy;

pub mod errors;
