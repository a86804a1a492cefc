//! Embedding Provider Registry
//!
//! Auto-registration system for embedding providers using linkme
//! distributed slices. Providers register themselves via
//! `#[linkme::distributed_slice]` and are discovered at runtime.

use std::sync::Arc;
use std::time::Duration;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::EmbeddingClient;

use crate::DEFAULT_TIMEOUT;
use crate::capability::capabilities_present;

/// Settings consumed by embedding provider factories
///
/// Contains all configuration options an embedding provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone)]
pub struct EmbeddingSettings {
    /// Provider name (e.g., "openai", "ollama", "null")
    pub provider: String,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Model name/identifier
    pub model: Option<String>,
    /// Request timeout for runtime calls
    pub timeout: Duration,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: String::new(),
            api_key: None,
            base_url: None,
            model: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl EmbeddingSettings {
    /// Create settings with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Registry entry for embedding providers
///
/// Each embedding provider implementation registers itself with this
/// entry using `#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]`.
pub struct EmbeddingProviderEntry {
    /// Unique provider name (e.g., "openai", "ollama", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Capability markers that must be present for activation
    pub requires: &'static [&'static str],
    /// Factory function to create a client instance
    pub factory: fn(&EmbeddingSettings) -> Result<Arc<dyn EmbeddingClient>>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Find an embedding provider entry by name
pub fn find_embedding_entry(name: &str) -> Option<&'static EmbeddingProviderEntry> {
    EMBEDDING_PROVIDERS.iter().find(|e| e.name == name)
}

/// Check whether a named embedding provider can activate in this process
pub fn embedding_provider_available(name: &str) -> bool {
    find_embedding_entry(name).is_some_and(|e| capabilities_present(e.requires))
}

/// Resolve an embedding client by name from the registry
///
/// # Errors
/// * Unknown provider name - configuration error listing available providers
/// * Factory failure - propagated (e.g. missing mandatory credential)
pub fn resolve_embedding_client(settings: &EmbeddingSettings) -> Result<Arc<dyn EmbeddingClient>> {
    if let Some(entry) = find_embedding_entry(&settings.provider) {
        return (entry.factory)(settings);
    }

    let available: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown embedding provider '{}'. Available providers: {:?}",
        settings.provider, available
    )))
}

/// List all registered embedding providers
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_builder() {
        let settings = EmbeddingSettings::new("ollama")
            .with_base_url("http://localhost:11434")
            .with_model("nomic-embed-text")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(settings.provider, "ollama");
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(settings.model.as_deref(), Some("nomic-embed-text"));
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert!(settings.api_key.is_none());
    }
}
