//! Chat relay - a minimal backend that forwards a caller's chat message to a
//! third-party LLM API (Gemini, Mistral, or Groq) and relays the reply.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
pub mod transcript;
