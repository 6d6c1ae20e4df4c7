//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
///
/// Every key can also be set through the environment variable shown
/// next to it; the environment wins over this file.
pub fn default_config_toml() -> String {
    r##"# gamecast configuration
# Missing fields use defaults. Required values are marked (required).

[capture]
# monitor_index = 0        # MONITOR_INDEX, see `gamecast --list-monitors`
# frame_width = 1000       # FRAME_WIDTH, 16-7680

[openai]
# api_key = ""             # OPENAI_API_KEY (required)
# base_url = "https://api.openai.com/v1"   # OPENAI_BASE_URL
# screenshot_model = ""    # SCREENSHOT_MODEL (required), must accept images
# image_detail = "auto"    # IMAGE_DETAIL: auto, low, high
# announcer_model = ""     # ANNOUNCER_MODEL (required)
# tts_model = ""           # TTS_MODEL (required)
# max_tokens = 400         # MAX_TOKENS, 1-16384

[audio]
# device = "default"       # AUDIO_DEVICE (required), see `gamecast --list-audio-devices`
# announcer_voice = ""     # ANNOUNCER_VOICE (required)
# color_voice = ""         # COLOR_VOICE (required)

[commentary]
# history_retention = 10   # HISTORY_RETENTION, 0-1000
# max_consecutive_failures = 0   # MAX_CONSECUTIVE_FAILURES, 0 = retry forever

[match]
# map = ""                 # MAP (required)
# blue_team = ""           # BLUE_TEAM (required)
# red_team = ""            # RED_TEAM (required)
"##
    .to_string()
}
