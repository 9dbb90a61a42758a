//! People lookup service configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the external people lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleConfig {
    /// Base URL, e.g. `http://localhost:8081`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    5
}
