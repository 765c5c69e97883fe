//! Routing configuration.
//!
//! Typically loaded from a TOML/JSON file by the application crate (with the
//! `serde` feature) and passed to graph construction and route queries.

use std::time::Duration;

use crate::{BmError, BmResult};

/// Default per-query search budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Top-level routing configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Wall-clock budget for one shortest-path search.  Checked between
    /// vertex expansions, so it is a soft limit.
    pub timeout: Duration,

    /// Seed for shuffling spatial-index insertion order.  `None` inserts in
    /// the order the vertices were added, which degrades to a linear tree on
    /// sorted input.
    pub shuffle_seed: Option<u64>,
}

impl RoutingConfig {
    /// Build a config from a timeout in fractional seconds.
    ///
    /// Rejects negative, NaN, and infinite timeouts.
    pub fn from_secs(timeout_secs: f64, shuffle_seed: Option<u64>) -> BmResult<Self> {
        let timeout = Duration::try_from_secs_f64(timeout_secs).map_err(|e| {
            BmError::Config(format!("invalid timeout {timeout_secs} s: {e}"))
        })?;
        Ok(Self { timeout, shuffle_seed })
    }

    /// Same config with a different search budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            timeout:      DEFAULT_TIMEOUT,
            shuffle_seed: Some(0x5eed),
        }
    }
}
