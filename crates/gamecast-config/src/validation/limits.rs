//! Numeric range and format checks for capture, endpoint and commentary settings.

use crate::schema::GamecastConfig;

use super::helpers::validate_range;

/// Validate capture constraints.
pub(crate) fn validate_capture(errors: &mut Vec<String>, config: &GamecastConfig) {
    validate_range(
        errors,
        "capture.frame_width",
        config.capture.frame_width,
        16,
        7680,
    );
}

/// Validate endpoint constraints.
pub(crate) fn validate_openai(errors: &mut Vec<String>, config: &GamecastConfig) {
    validate_range(
        errors,
        "openai.max_tokens",
        config.openai.max_tokens,
        1,
        16384,
    );

    let base_url = &config.openai.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!(
            "openai.base_url = {base_url:?} must start with http:// or https://"
        ));
    }
}

/// Validate commentary constraints.
pub(crate) fn validate_commentary(errors: &mut Vec<String>, config: &GamecastConfig) {
    validate_range(
        errors,
        "commentary.history_retention",
        config.commentary.history_retention,
        0,
        1000,
    );
}
