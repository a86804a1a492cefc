//! Composition Root
//!
//! Turns an `AppConfig` into an `AppContext` whose registry holds the
//! surviving provider instances. For every integration the activation
//! sequence is:
//!
//! ```text
//! enabled flag → caller override → capability probe → settings → factory
//! ```
//!
//! A disabled or capability-less integration is simply absent from the
//! registry; a factory failure (missing mandatory credential) aborts
//! startup. Construction performs local setup only - no network I/O
//! happens before the first runtime call.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::{ChatClient, EmbeddingClient, VectorStore};
use aiwire_registry::{
    ChatSettings, EmbeddingSettings, VectorStoreDeps, VectorStoreSettings,
    chat_provider_available, embedding_provider_available, resolve_chat_client,
    resolve_embedding_client, resolve_vector_store, vector_store_provider_available,
};

use crate::config::{
    AppConfig, ChatIntegrationConfig, ConfigBuilder, EmbeddingIntegrationConfig,
    VectorStoreIntegrationConfig,
};

use super::registry::ProviderRegistry;

/// Application context holding configuration and wired providers
///
/// This is the composition root's product: a shared, read-only view of
/// the registry plus the configuration it was wired from.
pub struct AppContext {
    config: Arc<AppConfig>,
    registry: ProviderRegistry,
}

impl AppContext {
    /// Start building a context, optionally pre-supplying instances
    pub fn builder(config: AppConfig) -> AppContextBuilder {
        AppContextBuilder::new(config)
    }

    /// Application configuration this context was wired from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Wired chat client, if the integration activated
    pub fn chat(&self) -> Option<Arc<dyn ChatClient>> {
        self.registry.chat()
    }

    /// Wired embedding client, if the integration activated
    pub fn embedding(&self) -> Option<Arc<dyn EmbeddingClient>> {
        self.registry.embedding()
    }

    /// Wired vector store, if the integration activated
    pub fn vector_store(&self) -> Option<Arc<dyn VectorStore>> {
        self.registry.vector_store()
    }

    /// The underlying registry
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Re-run the activation sequence against the stored configuration
    ///
    /// Filled slots are never overwritten, so re-wiring with identical
    /// settings is a no-op; at most it fills roles that were skipped
    /// earlier and whose conditions now hold.
    pub fn rewire(&self) -> Result<()> {
        wire(&self.registry, &self.config)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AppContext`] supporting caller-supplied instances
///
/// An instance supplied here occupies its role's slot before wiring
/// runs, so the corresponding factory is never invoked and none of its
/// credential validation happens.
pub struct AppContextBuilder {
    config: AppConfig,
    registry: ProviderRegistry,
}

impl AppContextBuilder {
    /// Create a builder for the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registry: ProviderRegistry::new(),
        }
    }

    /// Pre-supply a chat client; automatic construction is suppressed
    pub fn with_chat_client(self, client: Arc<dyn ChatClient>) -> Self {
        self.registry.supply_chat(client);
        self
    }

    /// Pre-supply an embedding client; automatic construction is suppressed
    pub fn with_embedding_client(self, client: Arc<dyn EmbeddingClient>) -> Self {
        self.registry.supply_embedding(client);
        self
    }

    /// Pre-supply a vector store; automatic construction is suppressed
    pub fn with_vector_store(self, store: Arc<dyn VectorStore>) -> Self {
        self.registry.supply_vector_store(store);
        self
    }

    /// Wire all integrations and produce the context
    pub fn build(self) -> Result<AppContext> {
        wire(&self.registry, &self.config)?;
        Ok(AppContext {
            config: Arc::new(self.config),
            registry: self.registry,
        })
    }
}

/// Initialize an application context from configuration
///
/// Evaluates every declared integration in dependency order (chat,
/// embedding, then vector store, which consumes the embedding slot).
/// Registration is sequential and happens exactly once here; afterwards
/// the context is safe for concurrent read access.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");
    AppContext::builder(config).build()
}

/// Initialize a context wired for tests: offline providers only
pub fn init_test_app() -> Result<AppContext> {
    let config = ConfigBuilder::new()
        .with_chat(ChatIntegrationConfig {
            enabled: false,
            ..Default::default()
        })
        .with_embedding(EmbeddingIntegrationConfig {
            provider: "null".to_string(),
            ..Default::default()
        })
        .with_vector_store(VectorStoreIntegrationConfig {
            provider: "memory".to_string(),
            ..Default::default()
        })
        .build();
    init_app(config)
}

/// Run the activation sequence for every integration
fn wire(registry: &ProviderRegistry, config: &AppConfig) -> Result<()> {
    wire_chat(registry, &config.integrations.chat)?;
    wire_embedding(registry, &config.integrations.embedding)?;
    wire_vector_store(registry, &config.integrations.vector_store)?;
    Ok(())
}

fn wire_chat(registry: &ProviderRegistry, config: &ChatIntegrationConfig) -> Result<()> {
    if !config.enabled {
        info!(provider = %config.provider, "Chat integration disabled; skipping");
        return Ok(());
    }
    if registry.chat().is_some() {
        debug!("Chat client already supplied; automatic construction skipped");
        return Ok(());
    }
    if !chat_provider_available(&config.provider) {
        debug!(provider = %config.provider, "Chat provider capability absent; skipping");
        return Ok(());
    }

    let client = resolve_chat_client(&chat_settings(config))?;
    registry.supply_chat(client);
    info!(provider = %config.provider, "Chat client registered");
    Ok(())
}

fn wire_embedding(registry: &ProviderRegistry, config: &EmbeddingIntegrationConfig) -> Result<()> {
    if !config.enabled {
        info!(provider = %config.provider, "Embedding integration disabled; skipping");
        return Ok(());
    }
    if registry.embedding().is_some() {
        debug!("Embedding client already supplied; automatic construction skipped");
        return Ok(());
    }
    if !embedding_provider_available(&config.provider) {
        debug!(provider = %config.provider, "Embedding provider capability absent; skipping");
        return Ok(());
    }

    let client = resolve_embedding_client(&embedding_settings(config))?;
    registry.supply_embedding(client);
    info!(provider = %config.provider, "Embedding client registered");
    Ok(())
}

fn wire_vector_store(
    registry: &ProviderRegistry,
    config: &VectorStoreIntegrationConfig,
) -> Result<()> {
    if !config.enabled {
        info!(provider = %config.provider, "Vector store integration disabled; skipping");
        return Ok(());
    }
    if registry.vector_store().is_some() {
        debug!("Vector store already supplied; automatic construction skipped");
        return Ok(());
    }
    if !vector_store_provider_available(&config.provider) {
        debug!(provider = %config.provider, "Vector store provider capability absent; skipping");
        return Ok(());
    }

    // The store consumes the embedding capability; without it the
    // integration cannot activate and is skipped, not failed.
    let Some(embedding) = registry.embedding() else {
        debug!(provider = %config.provider, "No embedding client wired; vector store skipped");
        return Ok(());
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| Error::configuration_with_source("Failed to create transport client", e))?;

    let deps = VectorStoreDeps { embedding, http };
    let store = resolve_vector_store(&vector_store_settings(config), &deps)?;
    registry.supply_vector_store(store);
    info!(provider = %config.provider, "Vector store registered");
    Ok(())
}

/// Convert bound chat configuration into factory settings
fn chat_settings(config: &ChatIntegrationConfig) -> ChatSettings {
    ChatSettings {
        provider: config.provider.clone(),
        api_key: config.api_key.clone(),
        base_url: config.base_url.clone(),
        model: config.model.clone(),
        temperature: config.temperature,
        timeout: Duration::from_secs(config.timeout_secs),
    }
}

/// Convert bound embedding configuration into factory settings
fn embedding_settings(config: &EmbeddingIntegrationConfig) -> EmbeddingSettings {
    EmbeddingSettings {
        provider: config.provider.clone(),
        api_key: config.api_key.clone(),
        base_url: config.base_url.clone(),
        model: config.model.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
    }
}

/// Convert bound vector store configuration into factory settings
fn vector_store_settings(config: &VectorStoreIntegrationConfig) -> VectorStoreSettings {
    VectorStoreSettings {
        provider: config.provider.clone(),
        url: config.url.clone(),
        api_key: config.api_key.clone(),
        index_name: config.index_name.clone(),
        timeout: Duration::from_secs(config.timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_wires_offline_providers() {
        let context = init_test_app().unwrap();
        assert!(context.chat().is_none());
        assert_eq!(context.embedding().unwrap().provider_name(), "null");
        assert_eq!(context.vector_store().unwrap().provider_name(), "memory");
    }

    #[test]
    fn settings_conversion_applies_timeout() {
        let config = ChatIntegrationConfig {
            timeout_secs: 7,
            ..Default::default()
        };
        assert_eq!(chat_settings(&config).timeout, Duration::from_secs(7));
    }
}
