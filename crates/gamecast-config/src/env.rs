//! Environment layer: `.env` loading and per-setting overrides.
//!
//! Every setting has a flat upper-case variable name (`OPENAI_API_KEY`,
//! `MONITOR_INDEX`, ...). Values found in the environment replace whatever
//! the TOML file provided. Empty variables count as unset.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use gamecast_common::ConfigError;
use tracing::debug;

use crate::schema::GamecastConfig;

/// Load `KEY=VALUE` lines from a `.env` file into the process environment.
///
/// Variables that are already set are left alone. Returns the number of
/// variables applied; a missing file applies none.
pub fn load_dotenv(path: &Path) -> usize {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return 0;
    };

    let mut applied = 0;
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(&key, value);
            applied += 1;
        }
    }
    debug!(path = %path.display(), applied, "loaded .env file");
    applied
}

/// Parse `.env` contents into key/value pairs, skipping blanks and comments.
pub(crate) fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Taking the lookup as a function keeps this testable without mutating
/// the real process environment.
pub fn apply_env_overrides<F>(config: &mut GamecastConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    set_parsed(&mut config.capture.monitor_index, "MONITOR_INDEX", get("MONITOR_INDEX"))?;
    set_parsed(&mut config.capture.frame_width, "FRAME_WIDTH", get("FRAME_WIDTH"))?;

    set_string(&mut config.openai.api_key, get("OPENAI_API_KEY"));
    set_string(&mut config.openai.base_url, get("OPENAI_BASE_URL"));
    set_string(&mut config.openai.screenshot_model, get("SCREENSHOT_MODEL"));
    set_parsed(&mut config.openai.image_detail, "IMAGE_DETAIL", get("IMAGE_DETAIL"))?;
    set_string(&mut config.openai.announcer_model, get("ANNOUNCER_MODEL"));
    set_string(&mut config.openai.tts_model, get("TTS_MODEL"));
    set_parsed(&mut config.openai.max_tokens, "MAX_TOKENS", get("MAX_TOKENS"))?;

    set_string(&mut config.audio.device, get("AUDIO_DEVICE"));
    set_string(&mut config.audio.announcer_voice, get("ANNOUNCER_VOICE"));
    set_string(&mut config.audio.color_voice, get("COLOR_VOICE"));

    set_parsed(
        &mut config.commentary.history_retention,
        "HISTORY_RETENTION",
        get("HISTORY_RETENTION"),
    )?;
    set_parsed(
        &mut config.commentary.max_consecutive_failures,
        "MAX_CONSECUTIVE_FAILURES",
        get("MAX_CONSECUTIVE_FAILURES"),
    )?;

    set_string(&mut config.matchup.map, get("MAP"));
    set_string(&mut config.matchup.blue_team, get("BLUE_TEAM"));
    set_string(&mut config.matchup.red_team, get("RED_TEAM"));

    Ok(())
}

fn set_string(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn set_parsed<T>(slot: &mut T, name: &str, value: Option<String>) -> Result<(), ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    if let Some(raw) = value {
        *slot = raw
            .parse()
            .map_err(|e| ConfigError::ParseError(format!("{name}={raw:?}: {e}")))?;
    }
    Ok(())
}
