//! Common types for chat-completions style APIs.

use serde::{Deserialize, Serialize};

/// A chat completion request (OpenAI-compatible format).
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The role of a message sender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A chat completion response.
///
/// Every field below the top level is optional: a body missing the expected
/// reply path deserializes cleanly and the extraction yields `None`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

/// The assistant message inside a choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Extract `choices[0].message.content`, if present.
    pub fn reply_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serialization() {
        let request = ChatRequest {
            model: "mistral-tiny".to_string(),
            messages: vec![
                Message {
                    role: Role::System,
                    content: "You are a helpful assistant.".to_string(),
                },
                Message {
                    role: Role::User,
                    content: "Hello!".to_string(),
                },
            ],
            temperature: Some(0.7),
            max_tokens: Some(150),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"mistral-tiny\""));
        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"temperature\":0.7"));
        assert!(json.contains("\"max_tokens\":150"));
    }

    #[test]
    fn chat_request_without_optional_fields() {
        let request = ChatRequest {
            model: "llama3-8b-8192".to_string(),
            messages: vec![Message {
                role: Role::User,
                content: "Hi".to_string(),
            }],
            temperature: None,
            max_tokens: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn reply_text_extraction() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "Hello! How can I help you today?"
                    },
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.reply_text().as_deref(),
            Some("Hello! How can I help you today?")
        );
    }

    #[test]
    fn reply_text_absent_on_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(response.reply_text().is_none());
    }

    #[test]
    fn reply_text_absent_on_unrelated_body() {
        let response: ChatResponse = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
        assert!(response.reply_text().is_none());
    }

    #[test]
    fn reply_text_absent_on_missing_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.reply_text().is_none());
    }
}
