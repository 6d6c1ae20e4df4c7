//! Speech playback on a named output device.
//!
//! Synthesized speech arrives as 16-bit mono PCM. It is converted to the
//! device's native format, queued in full, and played on a `cpal` output
//! stream; the caller blocks until the queue drains.

mod device;
mod pcm;
mod playback;

pub use device::output_devices;
pub use pcm::{interleave, pcm16_le_to_samples, resample_linear};
pub use playback::AudioPlayer;
