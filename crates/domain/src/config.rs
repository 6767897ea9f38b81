//! Configuration structures
//!
//! Deserialized from environment variables or a config file by the infra
//! layer's loader; defaults point at the compiled-in roster endpoint.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROSTER_ENDPOINT;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub roster: RosterConfig,
}

/// Roster fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// URL of the JSON endpoint serving the group roster.
    pub endpoint: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ROSTER_ENDPOINT.to_string() }
    }
}
