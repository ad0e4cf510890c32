//! Provider trait and identifiers.

use std::fmt;

use async_trait::async_trait;

use super::error::LLMError;

/// Identifies one of the configured upstream providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Gemini,
    Mistral,
    Groq,
}

impl Provider {
    /// The name used in caller-facing reply and error text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Mistral => "Mistral AI",
            Provider::Groq => "Groq",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Trait for provider adapters with different wire formats.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Forward a single user message upstream and return the reply text.
    ///
    /// A success body missing the expected reply path is not an error: the
    /// adapter returns a fixed fallback reply instead.
    async fn relay(&self, message: &str) -> Result<String, LLMError>;
}

/// Fixed reply used when a success body does not carry the expected path.
pub(crate) fn unexpected_reply(display_name: &str) -> String {
    format!("I received an unexpected response from {display_name}. Please try again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Provider::Gemini.to_string(), "Gemini");
        assert_eq!(Provider::Mistral.to_string(), "Mistral AI");
        assert_eq!(Provider::Groq.to_string(), "Groq");
    }
}
