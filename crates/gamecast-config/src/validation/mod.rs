//! Full configuration validation.
//!
//! Each concern has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod limits;
mod required;


use crate::schema::GamecastConfig;
use gamecast_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GamecastConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    required::validate_required(&mut errors, config);
    limits::validate_capture(&mut errors, config);
    limits::validate_openai(&mut errors, config);
    limits::validate_commentary(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
