//! Conversational backend adapter (local Ollama chat endpoint).
//!
//! Every call is a single-turn request: a persona system prompt plus one
//! user message. No conversation history is kept across calls.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::BackendSettings;

/// Single-turn chat with the conversational backend.
///
/// Replies may differ between identical calls; callers should only rely
/// on getting a non-empty string back.
pub trait ChatBackend: Send + Sync {
    fn chat(&self, system_prompt: &str, user_message: &str) -> Result<String>;
}

/// Chat client for a local Ollama server
pub struct OllamaBackend {
    base_url: String,
    model: String,
    client: ureq::Agent,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaBackend {
    /// Create a backend client from settings.
    ///
    /// Connection failures surface quickly; a reply in progress is waited
    /// on without a read timeout, so a hung model blocks only the calling
    /// thread.
    pub fn new(settings: &BackendSettings) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .build();

        Self {
            base_url: settings.url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            client,
        }
    }

    /// Check whether the Ollama server is reachable
    pub fn is_reachable(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        self.client.get(&url).call().is_ok()
    }
}

impl ChatBackend for OllamaBackend {
    fn chat(&self, system_prompt: &str, user_message: &str) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            stream: false,
        };

        let response: ChatResponse = self
            .client
            .post(&url)
            .send_json(&request)
            .context("Failed to reach the chat backend")?
            .into_json()
            .context("Failed to parse chat response")?;

        let reply = response.message.content.trim().to_string();
        if reply.is_empty() {
            bail!("Chat backend returned an empty reply");
        }

        Ok(reply)
    }
}
