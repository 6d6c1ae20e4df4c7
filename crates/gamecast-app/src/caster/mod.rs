//! The commentary loop.
//!
//! A [`Caster`] owns everything one broadcast needs (clients, devices,
//! prompts, history) and runs capture → describe → narrate → parse →
//! speak forever, one step at a time.

mod devices;
mod session;
mod stages;


pub use devices::{ScreenFrames, SpeakerOutput};
pub use session::{Caster, CasterSettings, IterationOutcome};

use gamecast_common::PlatformError;

/// Produces one encoded frame per call.
pub trait FrameSource {
    /// Capture the configured monitor as base64 PNG text.
    fn capture_frame(&mut self) -> Result<String, PlatformError>;
}

/// Plays one synthesized clip per call.
pub trait AudioSink {
    /// Play `audio` and return once playback has finished.
    fn play(&mut self, audio: &[u8]) -> Result<(), PlatformError>;
}
