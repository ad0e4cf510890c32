//! LLM provider adapters for the chat relay.

mod error;
mod gemini;
mod openai;
mod provider;
mod registry;
mod types;

pub use error::LLMError;
pub use gemini::GeminiProvider;
pub use openai::{OpenAICompatibleConfig, OpenAICompatibleProvider};
pub use provider::{ChatProvider, Provider};
pub use registry::ProviderRegistry;
pub use types::{ChatRequest, Message, Role};
