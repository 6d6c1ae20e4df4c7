//! Core TOML config loading: read from path or platform default.

use crate::schema::GamecastConfig;
use gamecast_common::ConfigError;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller so environment overrides can fill
/// in required values first.
pub fn load_from_path(path: &Path) -> Result<GamecastConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: GamecastConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/gamecast/config.toml`
/// On Linux: `~/.config/gamecast/config.toml`
///
/// A missing file is not an error: everything can come from the
/// environment, so defaults are returned.
pub fn load_default() -> Result<GamecastConfig, ConfigError> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            debug!("no platform config directory: {e}");
            return Ok(GamecastConfig::default());
        }
    };

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config file at {}, using defaults", path.display());
            Ok(GamecastConfig::default())
        }
        Err(e) => Err(e),
    }
}
