//! Presence checks for settings that have no usable default.

use crate::schema::GamecastConfig;

use super::helpers::require;

/// Validate that every required setting has a value.
pub(crate) fn validate_required(errors: &mut Vec<String>, config: &GamecastConfig) {
    let api = &config.openai;
    require(errors, "openai.api_key", "OPENAI_API_KEY", &api.api_key);
    require(errors, "openai.screenshot_model", "SCREENSHOT_MODEL", &api.screenshot_model);
    require(errors, "openai.announcer_model", "ANNOUNCER_MODEL", &api.announcer_model);
    require(errors, "openai.tts_model", "TTS_MODEL", &api.tts_model);

    let audio = &config.audio;
    require(errors, "audio.device", "AUDIO_DEVICE", &audio.device);
    require(errors, "audio.announcer_voice", "ANNOUNCER_VOICE", &audio.announcer_voice);
    require(errors, "audio.color_voice", "COLOR_VOICE", &audio.color_voice);

    let matchup = &config.matchup;
    require(errors, "match.map", "MAP", &matchup.map);
    require(errors, "match.blue_team", "BLUE_TEAM", &matchup.blue_team);
    require(errors, "match.red_team", "RED_TEAM", &matchup.red_team);
}
