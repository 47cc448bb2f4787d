//! Configuration module for the WAX trigger.
//! Defines and manages application-wide settings and dependencies.
mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{ConfigError, TriggerConfig};
