//! gamecast configuration system.
//!
//! Settings come from three layers, last one wins: built-in defaults, an
//! optional TOML file, and the process environment (optionally seeded from
//! a `.env` file). The merged result is validated once and then treated as
//! immutable for the life of the process.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gamecast_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("capturing monitor {}", config.capture.monitor_index);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use env::{apply_env_overrides, load_dotenv};
pub use schema::GamecastConfig;
pub use toml_loader::{create_default_config, default_config_path};

use gamecast_common::ConfigError;
use std::path::Path;

/// Load, merge and validate the configuration.
///
/// With `path`, that file must exist. Without it, the platform default
/// path is tried and silently skipped when absent. Environment variables
/// are applied on top before validation.
pub fn load_config(path: Option<&Path>) -> Result<GamecastConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

pub(crate) fn load_config_with<F>(
    path: Option<&Path>,
    lookup: F,
) -> Result<GamecastConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config, lookup)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/tmp/gamecast-missing/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn incomplete_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[capture]\nframe_width = 800\n").unwrap();

        let err = load_config_with(Some(&path), |_| None).unwrap_err();
        let ConfigError::ValidationError(msg) = err else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("api_key"));
    }

    #[test]
    fn environment_completes_a_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[openai]
screenshot_model = "gpt-4o"
announcer_model = "gpt-4o"
tts_model = "tts-1"

[audio]
device = "default"
announcer_voice = "onyx"
color_voice = "echo"

[match]
map = "Cursed Hollow"
blue_team = "Muradin, Jaina"
red_team = "Diablo, Valla"
"#,
        )
        .unwrap();

        let env = |name: &str| (name == "OPENAI_API_KEY").then(|| "sk-test".to_string());
        let config = load_config_with(Some(&path), env).unwrap();
        assert_eq!(config.openai.api_key, "sk-test");
        assert_eq!(config.matchup.map, "Cursed Hollow");
    }
}
