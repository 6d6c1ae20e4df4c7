use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OpenAI-compatible API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// How much of a frame's resolution the vision model should analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    #[default]
    Auto,
    Low,
    High,
}

impl ImageDetail {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageDetail::Auto => "auto",
            ImageDetail::Low => "low",
            ImageDetail::High => "high",
        }
    }
}

impl fmt::Display for ImageDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageDetail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ImageDetail::Auto),
            "low" => Ok(ImageDetail::Low),
            "high" => Ok(ImageDetail::High),
            other => Err(format!(
                "unknown image detail '{other}' (expected auto, low or high)"
            )),
        }
    }
}
