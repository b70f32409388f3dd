// ─────────────────────────────────────────────────────────────────────
// Algrid — Alignment Grid Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Default matrix side. Sentences must be strictly shorter on both sides.
pub const MAX_SENT_LEN: usize = 256;

/// Upper bound on `max_sentence_len`. The matrix holds `max²` cells, so
/// this keeps a misconfigured grid from eating the machine.
pub const MAX_SENT_LEN_LIMIT: usize = 4096;

/// Runtime configuration for an alignment grid and its pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Side of the square cell matrix, allocated once per grid.
    /// Default: 256.
    pub max_sentence_len: usize,

    /// Capacity reserved up front for the per-sentence span list.
    /// Default: 1024.
    pub span_capacity: usize,

    /// Idle grids a `GridPool` keeps around for reuse.
    /// Default: 8.
    pub pool_max_idle: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_sentence_len: MAX_SENT_LEN,
            span_capacity: 1024,
            pool_max_idle: 8,
        }
    }
}

impl GridConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> GridResult<()> {
        if !(1..=MAX_SENT_LEN_LIMIT).contains(&self.max_sentence_len) {
            return Err(GridError::Config(format!(
                "max_sentence_len must be in [1, {MAX_SENT_LEN_LIMIT}], got {}",
                self.max_sentence_len
            )));
        }
        if self.pool_max_idle < 1 {
            return Err(GridError::Config(format!(
                "pool_max_idle must be >= 1, got {}",
                self.pool_max_idle
            )));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GridError::Config(format!("JSON parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
