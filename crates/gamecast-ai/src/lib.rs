//! Model endpoints for gamecast.
//!
//! Provides OpenAI-compatible chat completion and speech synthesis
//! clients with:
//! - Vision requests (one inline base64 PNG per message)
//! - Raw PCM speech output for direct playback
//! - A bounded commentary history
//! - Token usage tracking

pub mod history;
pub mod openai;
pub mod speech;
pub mod token_tracker;

use std::fmt;

use async_trait::async_trait;
use gamecast_common::ImageDetail;

pub use history::{ConversationHistory, ANNOUNCER_LABEL, COLOR_LABEL};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use speech::{SpeechClient, SpeechConfig, SPEECH_SAMPLE_RATE};
pub use token_tracker::{StageUsage, TokenTracker};

/// A chat completion endpoint.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<AiResponse, AiError>;
}

/// A speech synthesis endpoint.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize `text` with `voice`, returning raw audio bytes.
    async fn synthesize(&self, voice: &str, text: &str) -> Result<Vec<u8>, AiError>;
}

/// One turn exchanged with a completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Inline image sent alongside `content` (user turns only).
    pub image: Option<ImageAttachment>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            image: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, png_base64: impl Into<String>, detail: ImageDetail) -> Self {
        self.image = Some(ImageAttachment {
            png_base64: png_base64.into(),
            detail,
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A base64-encoded PNG plus the resolution hint for the vision model.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub png_base64: String,
    pub detail: ImageDetail,
}

impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("png_base64", &format_args!("<{} bytes>", self.png_base64.len()))
            .field("detail", &self.detail)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<AiError> for gamecast_common::GamecastError {
    fn from(err: AiError) -> Self {
        gamecast_common::GamecastError::Ai(err.to_string())
    }
}

/// Map a non-success HTTP status to an `AiError`, consuming the body for context.
pub(crate) async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_roles() {
        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::assistant("hello").role, Role::Assistant);
        assert!(Message::user("hi").image.is_none());
    }

    #[test]
    fn with_image_attaches_frame() {
        let msg = Message::user("describe").with_image("aGVsbG8=", ImageDetail::Low);
        let image = msg.image.unwrap();
        assert_eq!(image.png_base64, "aGVsbG8=");
        assert_eq!(image.detail, ImageDetail::Low);
    }

    #[test]
    fn image_debug_hides_payload() {
        let msg = Message::user("describe").with_image("A".repeat(5000), ImageDetail::Auto);
        let rendered = format!("{msg:?}");
        assert!(rendered.contains("<5000 bytes>"));
        assert!(rendered.len() < 500);
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_converts_to_gamecast_error() {
        let err: gamecast_common::GamecastError = AiError::RateLimited.into();
        assert_eq!(err.to_string(), "ai error: Rate limited");
    }
}
