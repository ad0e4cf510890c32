//! Gemini provider with native generateContent API format.

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::error::{LLMError, api_error};
use super::provider::{ChatProvider, Provider, unexpected_reply};

/// Gemini provider. The credential travels as a `key` query parameter
/// rather than a header.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";

    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn relay(&self, message: &str) -> Result<String, LLMError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let request = to_request(message);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: serde_json::Value = response.json().await?;
        let display_name = Provider::Gemini.display_name();
        let reply = serde_json::from_value::<Response>(body)
            .ok()
            .and_then(Response::reply_text)
            .unwrap_or_else(|| {
                warn!("unexpected Gemini response structure");
                unexpected_reply(display_name)
            });

        Ok(reply)
    }
}

// --- Gemini wire types ---

#[derive(serde::Serialize)]
struct Request {
    contents: Vec<Content>,
}

#[derive(serde::Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(serde::Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn to_request(message: &str) -> Request {
    Request {
        contents: vec![Content {
            role: "user",
            parts: vec![Part {
                text: message.to_string(),
            }],
        }],
    }
}

impl Response {
    /// Extract `candidates[0].content.parts[0].text`, if present.
    fn reply_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
    }
}
