//! Device access for gamecast: grabbing the game's monitor and playing
//! synthesized speech on a named output device.

pub mod audio;
pub mod capture;

pub use audio::{output_devices, AudioPlayer};
pub use capture::{encode_frame, scaled_height, MonitorInfo, ScreenCapturer};
