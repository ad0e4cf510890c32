//! Provider registry for managing adapter instances.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::gemini::GeminiProvider;
use super::openai::{OpenAICompatibleConfig, OpenAICompatibleProvider};
use super::provider::{ChatProvider, Provider};

/// Registry of provider adapters, keyed by provider.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<Provider, Arc<dyn ChatProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize providers from environment variables, read once at startup.
    ///
    /// Each key registers only its own provider; a missing or empty key
    /// degrades that route alone.
    pub fn from_env() -> Self {
        let mut registry = Self::new();

        if let Some(api_key) = env_key("GEMINI_API_KEY") {
            let provider = GeminiProvider::new(
                GeminiProvider::DEFAULT_BASE_URL.to_string(),
                GeminiProvider::DEFAULT_MODEL.to_string(),
                api_key,
            );
            registry.register(Provider::Gemini, Arc::new(provider));
            info!("Registered Gemini provider");
        }

        if let Some(api_key) = env_key("MISTRAL_API_KEY") {
            let provider = OpenAICompatibleProvider::new(
                OpenAICompatibleConfig::mistral(
                    OpenAICompatibleConfig::MISTRAL_BASE_URL.to_string(),
                ),
                api_key,
            );
            registry.register(Provider::Mistral, Arc::new(provider));
            info!("Registered Mistral provider");
        }

        if let Some(api_key) = env_key("GROQ_API_KEY") {
            let provider = OpenAICompatibleProvider::new(
                OpenAICompatibleConfig::groq(OpenAICompatibleConfig::GROQ_BASE_URL.to_string()),
                api_key,
            );
            registry.register(Provider::Groq, Arc::new(provider));
            info!("Registered Groq provider");
        }

        if registry.providers.is_empty() {
            warn!(
                "No LLM providers configured. \
                Set GEMINI_API_KEY, MISTRAL_API_KEY, or GROQ_API_KEY."
            );
        }

        registry
    }

    /// Register a provider adapter.
    pub fn register(&mut self, provider: Provider, implementation: Arc<dyn ChatProvider>) {
        self.providers.insert(provider, implementation);
    }

    /// Get a provider adapter.
    pub fn get(&self, provider: &Provider) -> Option<Arc<dyn ChatProvider>> {
        self.providers.get(provider).cloned()
    }
}

/// An unset or empty variable counts as missing.
fn env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|key| !key.is_empty())
}
