//! Client configuration.

use std::time::Duration;

/// Configuration for the remote API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the Sentinel backend, with trailing slash.
    pub base_url: String,
    /// Per-request timeout. Timeouts are treated as failures, which
    /// trigger fixture fallback on reads and propagate on writes.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration for the fixture store.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Apply the per-endpoint artificial latency that simulates
    /// realistic loading states. Disabled in tests.
    pub simulate_latency: bool,
    /// Seed for run-detail synthesis. `None` seeds from entropy, which
    /// is the demo behavior; tests pin a seed for reproducible
    /// sampling.
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            seed: None,
        }
    }
}
