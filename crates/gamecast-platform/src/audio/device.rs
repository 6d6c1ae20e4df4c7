//! Output device lookup by name.

use cpal::traits::{DeviceTrait, HostTrait};
use gamecast_common::PlatformError;

/// Name that selects the host's default output device.
pub(crate) const DEFAULT_DEVICE: &str = "default";

/// List the names of every output device on the default host.
pub fn output_devices() -> Result<Vec<String>, PlatformError> {
    let host = cpal::default_host();
    let devices = host
        .output_devices()
        .map_err(|e| PlatformError::AudioError(format!("failed to enumerate output devices: {e}")))?;

    Ok(devices.filter_map(|device| device.name().ok()).collect())
}

/// Find an output device whose name matches exactly.
pub(crate) fn find_output_device(name: &str) -> Result<cpal::Device, PlatformError> {
    let host = cpal::default_host();

    if name.eq_ignore_ascii_case(DEFAULT_DEVICE) {
        return host
            .default_output_device()
            .ok_or_else(|| PlatformError::DeviceNotFound("no default output device".into()));
    }

    let mut devices = host
        .output_devices()
        .map_err(|e| PlatformError::AudioError(format!("failed to enumerate output devices: {e}")))?;

    devices
        .find(|device| device.name().map(|n| n == name).unwrap_or(false))
        .ok_or_else(|| PlatformError::DeviceNotFound(name.to_string()))
}
