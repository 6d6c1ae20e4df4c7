//! Commentary loop configuration types.

use serde::{Deserialize, Serialize};

/// How much commentary context is kept and how malformed replies are handled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentaryConfig {
    /// Number of recent history entries sent with each narration request
    /// (valid range: 0-1000).
    pub history_retention: usize,
    /// Abort after this many malformed replies in a row. 0 retries forever.
    pub max_consecutive_failures: u32,
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            history_retention: 10,
            max_consecutive_failures: 0,
        }
    }
}
