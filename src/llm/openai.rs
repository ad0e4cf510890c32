//! OpenAI-compatible provider.
//!
//! One adapter serves every chat-completions style upstream; Mistral and
//! Groq differ only in endpoint, model, and system prompt.

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::error::{LLMError, api_error};
use super::provider::{ChatProvider, Provider, unexpected_reply};
use super::types::{ChatRequest, ChatResponse, Message, Role};

/// Fixed per-provider settings for an OpenAI-compatible endpoint.
pub struct OpenAICompatibleConfig {
    pub provider: Provider,
    pub base_url: String,
    pub model: &'static str,
    pub system_prompt: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Mistral is called with an explicit `Accept: application/json`.
    pub send_accept_header: bool,
}

impl OpenAICompatibleConfig {
    pub const MISTRAL_BASE_URL: &'static str = "https://api.mistral.ai/v1";
    pub const GROQ_BASE_URL: &'static str = "https://api.groq.com/openai/v1";

    pub fn mistral(base_url: String) -> Self {
        Self {
            provider: Provider::Mistral,
            base_url,
            model: "mistral-tiny",
            system_prompt: "You are a helpful and concise AI assistant powered by Mistral AI.",
            temperature: 0.7,
            max_tokens: 150,
            send_accept_header: true,
        }
    }

    pub fn groq(base_url: String) -> Self {
        Self {
            provider: Provider::Groq,
            base_url,
            model: "llama3-8b-8192",
            system_prompt: "You are a blazing fast and efficient AI assistant powered by Groq.",
            temperature: 0.7,
            max_tokens: 150,
            send_accept_header: false,
        }
    }
}

/// OpenAI-compatible provider with bearer-token auth.
pub struct OpenAICompatibleProvider {
    client: Client,
    config: OpenAICompatibleConfig,
    api_key: String,
}

impl OpenAICompatibleProvider {
    pub fn new(config: OpenAICompatibleConfig, api_key: String) -> Self {
        Self {
            client: Client::new(),
            config,
            api_key,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAICompatibleProvider {
    async fn relay(&self, message: &str) -> Result<String, LLMError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let request = ChatRequest {
            model: self.config.model.to_string(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: self.config.system_prompt.to_string(),
                },
                Message {
                    role: Role::User,
                    content: message.to_string(),
                },
            ],
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        };

        let mut req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key));

        if self.config.send_accept_header {
            req = req.header("Accept", "application/json");
        }

        let response = req.json(&request).send().await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: serde_json::Value = response.json().await?;
        let display_name = self.config.provider.display_name();
        let reply = serde_json::from_value::<ChatResponse>(body)
            .ok()
            .and_then(ChatResponse::reply_text)
            .unwrap_or_else(|| {
                warn!(provider = display_name, "unexpected response structure");
                unexpected_reply(display_name)
            });

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mistral_config_defaults() {
        let config = OpenAICompatibleConfig::mistral(
            OpenAICompatibleConfig::MISTRAL_BASE_URL.to_string(),
        );
        assert_eq!(config.model, "mistral-tiny");
        assert!(config.send_accept_header);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 150);
    }

    #[test]
    fn groq_config_defaults() {
        let config =
            OpenAICompatibleConfig::groq(OpenAICompatibleConfig::GROQ_BASE_URL.to_string());
        assert_eq!(config.model, "llama3-8b-8192");
        assert!(!config.send_accept_header);
    }
}
