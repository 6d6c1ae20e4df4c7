//! Audio output and voice configuration types.

use serde::{Deserialize, Serialize};

/// Output device and the voice used for each commentator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AudioConfig {
    /// Output device name, or `"default"` for the host default.
    pub device: String,
    pub announcer_voice: String,
    pub color_voice: String,
}
