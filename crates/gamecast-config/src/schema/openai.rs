//! Completion and speech endpoint configuration types.

use std::fmt;

use gamecast_common::{ImageDetail, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

/// Endpoint credentials and model selection.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Vision-capable model that describes each frame.
    pub screenshot_model: String,
    pub image_detail: ImageDetail,
    /// Text model that writes the announcer/color lines.
    pub announcer_model: String,
    /// Speech synthesis model.
    pub tts_model: String,
    /// Completion token limit (valid range: 1-16384).
    pub max_tokens: u32,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("screenshot_model", &self.screenshot_model)
            .field("image_detail", &self.image_detail)
            .field("announcer_model", &self.announcer_model)
            .field("tts_model", &self.tts_model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.into(),
            screenshot_model: String::new(),
            image_detail: ImageDetail::Auto,
            announcer_model: String::new(),
            tts_model: String::new(),
            max_tokens: 400,
        }
    }
}
