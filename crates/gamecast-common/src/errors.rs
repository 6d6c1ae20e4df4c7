use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("capture error: {0}")]
    CaptureError(String),

    #[error("monitor index {index} is out of range ({available} monitors available)")]
    MonitorOutOfRange { index: usize, available: usize },

    #[error("audio error: {0}")]
    AudioError(String),

    #[error("audio device not found: {0}")]
    DeviceNotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GamecastError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("commentary model returned malformed JSON {0} times in a row")]
    MalformedCommentaryLimit(u32),
}
