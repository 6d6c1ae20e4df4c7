//! OpenAI chat completions client.
//!
//! Implements the `AiClient` trait against `/chat/completions` on any
//! OpenAI-compatible API root.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
