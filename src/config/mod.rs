//! Service configuration for the Time Metrics Engine.
//!
//! This module provides loading of the service-level configuration,
//! which carries the default shift schedule applied when a request does
//! not supply one.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::ServiceConfig;
