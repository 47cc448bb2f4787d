//! WAX Trigger Library
//!
//! This library provides the application shell for the WAX event trigger:
//! configuration management, error handling, and dependency injection
//! around the polling engine.

pub mod config;
pub mod errors;

pub use config::{Dependencies, TriggerConfig};
pub use errors::TriggerError;
