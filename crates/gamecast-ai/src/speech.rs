//! OpenAI speech API client for text-to-speech.
//!
//! Used for the spoken half of each commentary pair: the announcer and
//! color lines are each synthesized with their own voice and handed to
//! the audio player as raw PCM.

use async_trait::async_trait;
use gamecast_common::DEFAULT_BASE_URL;
use tracing::debug;

use crate::{error_for_status, AiError, TextToSpeech};

/// Sample rate of the `pcm` response format (16-bit signed LE, mono).
pub const SPEECH_SAMPLE_RATE: u32 = 24_000;

const RESPONSE_FORMAT: &str = "pcm";

/// Speech API client configuration.
#[derive(Clone)]
pub struct SpeechConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl SpeechConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Text-to-speech client.
pub struct SpeechClient {
    config: SpeechConfig,
    http: reqwest::Client,
}

impl SpeechClient {
    pub fn new(config: SpeechConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }

    pub(crate) fn build_request_body(&self, voice: &str, text: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "voice": voice,
            "input": text,
            "response_format": RESPONSE_FORMAT,
        })
    }
}

#[async_trait]
impl TextToSpeech for SpeechClient {
    /// Returns PCM audio at [`SPEECH_SAMPLE_RATE`].
    async fn synthesize(&self, voice: &str, text: &str) -> Result<Vec<u8>, AiError> {
        debug!(
            model = %self.config.model,
            voice,
            chars = text.len(),
            "Speech synthesis request"
        );

        let response = self
            .http
            .post(self.speech_url())
            .bearer_auth(&self.config.api_key)
            .json(&self.build_request_body(voice, text))
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let response = error_for_status(response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        if bytes.is_empty() {
            return Err(AiError::ParseError("empty audio response".to_string()));
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_asks_for_pcm() {
        let client = SpeechClient::new(SpeechConfig::new("sk-test", "tts-1")).unwrap();
        let body = client.build_request_body("onyx", "What a play!");
        assert_eq!(body["model"], "tts-1");
        assert_eq!(body["voice"], "onyx");
        assert_eq!(body["input"], "What a play!");
        assert_eq!(body["response_format"], "pcm");
    }

    #[test]
    fn speech_url_joins_base() {
        let client = SpeechClient::new(
            SpeechConfig::new("sk-test", "tts-1").with_base_url("http://127.0.0.1:9/v1/"),
        )
        .unwrap();
        assert_eq!(client.speech_url(), "http://127.0.0.1:9/v1/audio/speech");
    }

    #[test]
    fn config_debug_redacts_key() {
        let rendered = format!("{:?}", SpeechConfig::new("sk-secret", "tts-1"));
        assert!(!rendered.contains("sk-secret"));
    }
}
