//! `FrameSource` / `AudioSink` implementations backed by real devices.
//!
//! Both calls block, so they run under `block_in_place` to keep the
//! runtime's other worker threads usable while they wait.

use gamecast_ai::SPEECH_SAMPLE_RATE;
use gamecast_common::PlatformError;
use gamecast_platform::{AudioPlayer, ScreenCapturer};

use super::{AudioSink, FrameSource};

/// Frames from a monitor, scaled to a fixed width.
pub struct ScreenFrames {
    capturer: ScreenCapturer,
    frame_width: u32,
}

impl ScreenFrames {
    pub fn new(capturer: ScreenCapturer, frame_width: u32) -> Self {
        Self {
            capturer,
            frame_width,
        }
    }
}

impl FrameSource for ScreenFrames {
    fn capture_frame(&mut self) -> Result<String, PlatformError> {
        tokio::task::block_in_place(|| self.capturer.capture_base64_png(self.frame_width))
    }
}

/// Speech played on an output device.
pub struct SpeakerOutput {
    player: AudioPlayer,
}

impl SpeakerOutput {
    pub fn new(player: AudioPlayer) -> Self {
        Self { player }
    }
}

impl AudioSink for SpeakerOutput {
    fn play(&mut self, audio: &[u8]) -> Result<(), PlatformError> {
        tokio::task::block_in_place(|| self.player.play_pcm16(audio, SPEECH_SAMPLE_RATE))
    }
}
