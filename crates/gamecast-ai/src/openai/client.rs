//! OpenAI API client struct, request building, and response parsing.

use crate::{AiError, AiResponse, Message, TokenUsage};

use super::config::OpenAiConfig;

/// OpenAI chat completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    /// Build a client. No request timeout is set: a completion call waits
    /// as long as the endpoint takes.
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body for the chat completions API.
    pub(crate) fn build_request_body(&self, model: &str, messages: &[Message]) -> serde_json::Value {
        let msgs: Vec<_> = messages.iter().map(message_to_json).collect();

        serde_json::json!({
            "model": model,
            "messages": msgs,
            "max_tokens": self.config.max_tokens,
        })
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let message = &json["choices"][0]["message"];

        let content = message["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("no message content in response".to_string()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse {
            content,
            usage,
        })
    }
}

/// Plain turns carry a string; a turn with an image becomes a content array
/// of one text part and one `image_url` part holding a PNG data URL.
fn message_to_json(msg: &Message) -> serde_json::Value {
    match &msg.image {
        None => serde_json::json!({
            "role": msg.role.as_str(),
            "content": msg.content,
        }),
        Some(image) => {
            let mut parts = Vec::with_capacity(2);
            if !msg.content.is_empty() {
                parts.push(serde_json::json!({ "type": "text", "text": msg.content }));
            }
            parts.push(serde_json::json!({
                "type": "image_url",
                "image_url": {
                    "url": format!("data:image/png;base64,{}", image.png_base64),
                    "detail": image.detail.as_str(),
                },
            }));
            serde_json::json!({
                "role": msg.role.as_str(),
                "content": parts,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamecast_common::ImageDetail;

    fn client() -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new("sk-test").with_max_tokens(123)).unwrap()
    }

    #[test]
    fn completions_url_tolerates_trailing_slash() {
        let client = OpenAiClient::new(
            OpenAiConfig::new("sk-test").with_base_url("http://localhost:8080/v1/"),
        )
        .unwrap();
        assert_eq!(
            client.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn request_body_carries_model_and_token_limit() {
        let body = client().build_request_body("gpt-4o", &[Message::user("hello")]);
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 123);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn request_body_preserves_message_order() {
        let body = client().build_request_body(
            "gpt-4o",
            &[
                Message::assistant("first"),
                Message::user("second"),
                Message::assistant("third"),
            ],
        );
        let msgs = body["messages"].as_array().unwrap();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0]["role"], "assistant");
        assert_eq!(msgs[1]["content"], "second");
        assert_eq!(msgs[2]["content"], "third");
    }

    #[test]
    fn image_message_becomes_content_parts() {
        let msg = Message::user("what is happening?").with_image("iVBORw0=", ImageDetail::High);
        let body = client().build_request_body("gpt-4o", &[msg]);
        let parts = body["messages"][0]["content"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[0]["text"], "what is happening?");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(
            parts[1]["image_url"]["url"],
            "data:image/png;base64,iVBORw0="
        );
        assert_eq!(parts[1]["image_url"]["detail"], "high");
    }

    #[test]
    fn image_only_message_has_single_part() {
        let msg = Message::user("").with_image("iVBORw0=", ImageDetail::Auto);
        let body = client().build_request_body("gpt-4o", &[msg]);
        let parts = body["messages"][0]["content"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["image_url"]["detail"], "auto");
    }

    #[test]
    fn parse_response_extracts_content_and_usage() {
        let json = serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": "A team fight at the boss." }
            }],
            "usage": { "prompt_tokens": 812, "completion_tokens": 40 }
        });
        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "A team fight at the boss.");
        assert_eq!(response.usage.input_tokens, 812);
        assert_eq!(response.usage.output_tokens, 40);
    }

    #[test]
    fn parse_response_without_usage_defaults_to_zero() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
        });
        let response = client().parse_response(json).unwrap();
        assert_eq!(response.usage, TokenUsage::default());
    }

    #[test]
    fn parse_response_without_choices_fails() {
        let json = serde_json::json!({ "choices": [] });
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn parse_response_with_null_content_fails() {
        let json = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        });
        assert!(client().parse_response(json).is_err());
    }
}
