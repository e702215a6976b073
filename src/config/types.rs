//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// The service-level configuration.
///
/// Currently holds only the default shift schedule; callers that omit a
/// schedule from their request are calculated against this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// The default shift schedule.
    pub schedule: Schedule,
}
