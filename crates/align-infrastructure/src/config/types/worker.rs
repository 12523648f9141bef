//! Worker configuration types

use crate::constants::DEFAULT_WORKER_MAX_IN_FLIGHT;
use serde::{Deserialize, Serialize};

/// Worker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Map requests processed concurrently
    pub max_in_flight: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            max_in_flight: DEFAULT_WORKER_MAX_IN_FLIGHT,
        }
    }
}
