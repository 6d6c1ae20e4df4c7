//! AiClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{error_for_status, AiClient, AiError, AiResponse, Message};

use super::client::OpenAiClient;

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(model, messages);

        debug!(
            model,
            messages = messages.len(),
            images = messages.iter().filter(|m| m.image.is_some()).count(),
            "OpenAI completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let response = error_for_status(response).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
