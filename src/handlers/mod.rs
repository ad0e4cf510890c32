//! HTTP request handlers.

mod chat;
mod health;
mod version;

pub use chat::{gemini_chat, groq_chat, mistral_chat};
pub use health::{livez, readyz};
pub use version::version;
