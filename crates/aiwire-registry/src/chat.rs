//! Chat Provider Registry
//!
//! Auto-registration system for chat providers using linkme distributed
//! slices. Providers register themselves via
//! `#[linkme::distributed_slice]` and are discovered at runtime.

use std::sync::Arc;
use std::time::Duration;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::ChatClient;

use crate::DEFAULT_TIMEOUT;
use crate::capability::capabilities_present;

/// Settings consumed by chat provider factories
///
/// Contains all configuration options a chat provider might need.
/// Providers should use what they need and ignore the rest. Fields are
/// fully populated (defaults applied) before any factory sees them.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Provider name (e.g., "openai", "huggingface")
    pub provider: String,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Model name/identifier
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Request timeout for runtime calls
    pub timeout: Duration,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            provider: String::new(),
            api_key: None,
            base_url: None,
            model: None,
            temperature: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ChatSettings {
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

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Registry entry for chat providers
///
/// Each chat provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(CHAT_PROVIDERS)]`. The entry
/// carries metadata, required capability markers, and a factory function
/// to create client instances.
pub struct ChatProviderEntry {
    /// Unique provider name (e.g., "openai", "huggingface")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Capability markers that must be present for activation
    pub requires: &'static [&'static str],
    /// Factory function to create a client instance
    ///
    /// Fails fast with a configuration error when mandatory credentials
    /// are missing for a hosted endpoint. Performs no network I/O.
    pub factory: fn(&ChatSettings) -> Result<Arc<dyn ChatClient>>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CHAT_PROVIDERS: [ChatProviderEntry] = [..];

/// Find a chat provider entry by name
pub fn find_chat_entry(name: &str) -> Option<&'static ChatProviderEntry> {
    CHAT_PROVIDERS.iter().find(|e| e.name == name)
}

/// Check whether a named chat provider can activate in this process
///
/// True when the entry is registered and all of its required capability
/// markers are present. This check never touches credentials.
pub fn chat_provider_available(name: &str) -> bool {
    find_chat_entry(name).is_some_and(|e| capabilities_present(e.requires))
}

/// Resolve a chat client by name from the registry
///
/// Searches the registry for a provider matching the configured name and
/// creates an instance using the provider's factory function.
///
/// # Errors
/// * Unknown provider name - configuration error listing available providers
/// * Factory failure - propagated (e.g. missing mandatory credential)
pub fn resolve_chat_client(settings: &ChatSettings) -> Result<Arc<dyn ChatClient>> {
    if let Some(entry) = find_chat_entry(&settings.provider) {
        return (entry.factory)(settings);
    }

    let available: Vec<&str> = CHAT_PROVIDERS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown chat provider '{}'. Available providers: {:?}",
        settings.provider, available
    )))
}

/// List all registered chat providers
///
/// Returns (name, description) tuples for CLI help and diagnostics.
pub fn list_chat_providers() -> Vec<(&'static str, &'static str)> {
    CHAT_PROVIDERS.iter().map(|e| (e.name, e.description)).collect()
}
