//! Monitor capture backed by `screenshots`.
//!
//! Each frame covers the selected monitor's full bounding rectangle, is
//! scaled to a fixed width with the aspect ratio kept, then encoded as a
//! base64 PNG ready to be inlined in a vision request.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use gamecast_common::PlatformError;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ColorType, ImageEncoder, RgbaImage};
use screenshots::Screen;
use tracing::{debug, info};

/// Position and size of one monitor on the virtual desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorInfo {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

/// Captures frames from a single monitor chosen at startup.
pub struct ScreenCapturer {
    screen: Screen,
}

impl ScreenCapturer {
    /// Select the monitor at `monitor_index`, failing if it does not exist.
    pub fn new(monitor_index: usize) -> Result<Self, PlatformError> {
        let mut screens = all_screens()?;
        let available = screens.len();
        if monitor_index >= available {
            return Err(PlatformError::MonitorOutOfRange {
                index: monitor_index,
                available,
            });
        }

        let screen = screens.swap_remove(monitor_index);
        let monitor = monitor_info(monitor_index, &screen);
        info!(
            index = monitor.index,
            x = monitor.x,
            y = monitor.y,
            width = monitor.width,
            height = monitor.height,
            "capturing monitor"
        );
        Ok(Self { screen })
    }

    /// List every monitor the OS reports, in index order.
    pub fn monitors() -> Result<Vec<MonitorInfo>, PlatformError> {
        Ok(all_screens()?
            .iter()
            .enumerate()
            .map(|(index, screen)| monitor_info(index, screen))
            .collect())
    }

    /// Grab the monitor and return it as a base64 PNG `frame_width` pixels wide.
    pub fn capture_base64_png(&self, frame_width: u32) -> Result<String, PlatformError> {
        let frame = self
            .screen
            .capture()
            .map_err(|e| PlatformError::CaptureError(e.to_string()))?;
        debug!(
            width = frame.width(),
            height = frame.height(),
            "captured frame"
        );
        encode_frame(&frame, frame_width)
    }
}

fn all_screens() -> Result<Vec<Screen>, PlatformError> {
    Screen::all().map_err(|e| PlatformError::CaptureError(format!("failed to list monitors: {e}")))
}

fn monitor_info(index: usize, screen: &Screen) -> MonitorInfo {
    let info = &screen.display_info;
    MonitorInfo {
        index,
        x: info.x,
        y: info.y,
        width: info.width,
        height: info.height,
        is_primary: info.is_primary,
    }
}

/// Height that keeps the aspect ratio of a `width` x `height` image when it
/// is scaled to `target_width`, rounded to the nearest pixel (at least 1).
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 1;
    }
    let scaled = (f64::from(target_width) * f64::from(height) / f64::from(width)).round();
    (scaled as u32).max(1)
}

/// Resize `frame` to `frame_width` and encode it as base64 PNG text.
pub fn encode_frame(frame: &RgbaImage, frame_width: u32) -> Result<String, PlatformError> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(PlatformError::CaptureError("captured an empty frame".into()));
    }

    let height = scaled_height(frame.width(), frame.height(), frame_width);
    let resized = image::imageops::resize(frame, frame_width, height, FilterType::CatmullRom);

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(resized.as_raw(), frame_width, height, ColorType::Rgba8)
        .map_err(|e| PlatformError::CaptureError(format!("PNG encoding failed: {e}")))?;

    Ok(BASE64_STANDARD.encode(png))
}
