//! Screen capture configuration types.

use serde::{Deserialize, Serialize};

/// Which monitor to grab and how large the submitted frame is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Index into the monitor list reported by the OS.
    pub monitor_index: usize,
    /// Width in pixels the frame is scaled to (valid range: 16-7680).
    pub frame_width: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            monitor_index: 0,
            frame_width: 1000,
        }
    }
}
