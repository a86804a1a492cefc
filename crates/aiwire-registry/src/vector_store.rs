//! Vector Store Provider Registry
//!
//! Auto-registration system for vector store providers. Unlike chat and
//! embedding factories, store factories do not build their own
//! collaborators: the embedding client and the transport client are
//! supplied by the composition root through [`VectorStoreDeps`].

use std::sync::Arc;
use std::time::Duration;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::{EmbeddingClient, VectorStore};

use crate::DEFAULT_TIMEOUT;
use crate::capability::capabilities_present;

/// Settings consumed by vector store provider factories
#[derive(Debug, Clone)]
pub struct VectorStoreSettings {
    /// Provider name (e.g., "elasticsearch", "memory")
    pub provider: String,
    /// Store server URL
    pub url: Option<String>,
    /// API key or token for authentication
    pub api_key: Option<String>,
    /// Index name; when unset the store uses its documented default
    pub index_name: Option<String>,
    /// Request timeout for runtime calls
    pub timeout: Duration,
}

impl Default for VectorStoreSettings {
    fn default() -> Self {
        Self {
            provider: String::new(),
            url: None,
            api_key: None,
            index_name: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl VectorStoreSettings {
    /// Create settings with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the store URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the index name
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Collaborators a vector store factory receives from the caller
///
/// The store never constructs these itself: the embedding capability and
/// the generic transport client belong to other integrations and are
/// owned by the composition root.
#[derive(Clone)]
pub struct VectorStoreDeps {
    /// Embedding client used to vectorize documents and queries
    pub embedding: Arc<dyn EmbeddingClient>,
    /// Shared HTTP transport for store API calls
    pub http: reqwest::Client,
}

impl std::fmt::Debug for VectorStoreDeps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorStoreDeps")
            .field("embedding", &self.embedding.provider_name())
            .finish_non_exhaustive()
    }
}

/// Registry entry for vector store providers
pub struct VectorStoreProviderEntry {
    /// Unique provider name (e.g., "elasticsearch", "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Capability markers that must be present for activation
    pub requires: &'static [&'static str],
    /// Factory function to create a store instance
    pub factory: fn(&VectorStoreSettings, &VectorStoreDeps) -> Result<Arc<dyn VectorStore>>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static VECTOR_STORE_PROVIDERS: [VectorStoreProviderEntry] = [..];

/// Find a vector store provider entry by name
pub fn find_vector_store_entry(name: &str) -> Option<&'static VectorStoreProviderEntry> {
    VECTOR_STORE_PROVIDERS.iter().find(|e| e.name == name)
}

/// Check whether a named vector store provider can activate in this process
pub fn vector_store_provider_available(name: &str) -> bool {
    find_vector_store_entry(name).is_some_and(|e| capabilities_present(e.requires))
}

/// Resolve a vector store by name from the registry
///
/// # Errors
/// * Unknown provider name - configuration error listing available providers
/// * Factory failure - propagated
pub fn resolve_vector_store(
    settings: &VectorStoreSettings,
    deps: &VectorStoreDeps,
) -> Result<Arc<dyn VectorStore>> {
    if let Some(entry) = find_vector_store_entry(&settings.provider) {
        return (entry.factory)(settings, deps);
    }

    let available: Vec<&str> = VECTOR_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown vector store provider '{}'. Available providers: {:?}",
        settings.provider, available
    )))
}

/// List all registered vector store providers
pub fn list_vector_store_providers() -> Vec<(&'static str, &'static str)> {
    VECTOR_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_builder() {
        let settings = VectorStoreSettings::new("elasticsearch")
            .with_url("http://localhost:9200")
            .with_api_key("token")
            .with_index_name("documents")
            .with_timeout(Duration::from_secs(15));

        assert_eq!(settings.provider, "elasticsearch");
        assert_eq!(settings.url.as_deref(), Some("http://localhost:9200"));
        assert_eq!(settings.api_key.as_deref(), Some("token"));
        assert_eq!(settings.index_name.as_deref(), Some("documents"));
        assert_eq!(settings.timeout, Duration::from_secs(15));
    }

    #[test]
    fn index_name_defaults_to_unset() {
        let settings = VectorStoreSettings::new("memory");
        assert!(settings.index_name.is_none());
    }
}
