//! Configuration schema types for gamecast.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Required values default to empty strings and are reported by
//! [`crate::validation::validate`] rather than by the deserializer, so a
//! single run lists every missing setting at once.

mod audio;
mod capture;
mod commentary;
mod matchup;
mod openai;

pub use audio::*;
pub use capture::*;
pub use commentary::*;
pub use matchup::*;
pub use openai::*;

use serde::{Deserialize, Serialize};

/// Root configuration for gamecast.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GamecastConfig {
    pub capture: CaptureConfig,
    pub openai: ApiConfig,
    pub audio: AudioConfig,
    pub commentary: CommentaryConfig,
    #[serde(rename = "match")]
    pub matchup: MatchConfig,
}

// =============================================================================
// Tests
// =============================================================================
