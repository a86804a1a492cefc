//! Application configuration
//!
//! Typed configuration structs populated from a flat, prefix-scoped
//! source. Binding is structural only: defaults are applied here,
//! semantic checks (credential policies) belong to the provider
//! factories.

mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chat integration configuration
///
/// Bound from the `[integrations.chat]` table / `AIWIRE_INTEGRATIONS__CHAT__*`
/// environment keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatIntegrationConfig {
    /// Enable the chat integration
    pub enabled: bool,
    /// Provider name selecting the registered implementation
    pub provider: String,
    /// API key (secret; mandatory only for hosted default endpoints)
    pub api_key: Option<String>,
    /// Base URL overriding the provider default
    pub base_url: Option<String>,
    /// Model identifier
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Request timeout in seconds for runtime calls
    pub timeout_secs: u64,
}

impl Default for ChatIntegrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "openai".to_string(),
            api_key: None,
            base_url: None,
            model: None,
            temperature: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Embedding integration configuration
///
/// Bound from the `[integrations.embedding]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingIntegrationConfig {
    /// Enable the embedding integration
    pub enabled: bool,
    /// Provider name selecting the registered implementation
    pub provider: String,
    /// API key (secret; mandatory only for hosted default endpoints)
    pub api_key: Option<String>,
    /// Base URL overriding the provider default
    pub base_url: Option<String>,
    /// Model identifier
    pub model: Option<String>,
    /// Request timeout in seconds for runtime calls
    pub timeout_secs: u64,
}

impl Default for EmbeddingIntegrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "openai".to_string(),
            api_key: None,
            base_url: None,
            model: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Vector store integration configuration
///
/// Bound from the `[integrations.vector_store]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreIntegrationConfig {
    /// Enable the vector store integration
    pub enabled: bool,
    /// Provider name selecting the registered implementation
    pub provider: String,
    /// Store server URL
    pub url: Option<String>,
    /// API key or token for authentication
    pub api_key: Option<String>,
    /// Index name; empty/unset means the store's documented default
    pub index_name: Option<String>,
    /// Request timeout in seconds for runtime calls
    pub timeout_secs: u64,
}

impl Default for VectorStoreIntegrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "elasticsearch".to_string(),
            url: None,
            api_key: None,
            index_name: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Provider integration configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Chat integration
    pub chat: ChatIntegrationConfig,
    /// Embedding integration
    pub embedding: EmbeddingIntegrationConfig,
    /// Vector store integration
    pub vector_store: VectorStoreIntegrationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
    /// Optional log file path (daily rotation)
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Provider integration configurations
    pub integrations: IntegrationsConfig,
}

/// Configuration builder for programmatic configuration
///
/// Primarily used by tests and embedders that do not read configuration
/// from files.
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Set chat integration configuration
    pub fn with_chat(mut self, chat: ChatIntegrationConfig) -> Self {
        self.config.integrations.chat = chat;
        self
    }

    /// Set embedding integration configuration
    pub fn with_embedding(mut self, embedding: EmbeddingIntegrationConfig) -> Self {
        self.config.integrations.embedding = embedding;
        self
    }

    /// Set vector store integration configuration
    pub fn with_vector_store(mut self, vector_store: VectorStoreIntegrationConfig) -> Self {
        self.config.integrations.vector_store = vector_store;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_defaults() {
        let config = AppConfig::default();
        assert!(config.integrations.chat.enabled);
        assert_eq!(config.integrations.chat.provider, "openai");
        assert_eq!(config.integrations.chat.timeout_secs, 30);
        assert!(config.integrations.vector_store.index_name.is_none());
    }

    #[test]
    fn builder_replaces_sections() {
        let config = ConfigBuilder::new()
            .with_chat(ChatIntegrationConfig {
                enabled: false,
                ..Default::default()
            })
            .build();
        assert!(!config.integrations.chat.enabled);
        assert!(config.integrations.embedding.enabled);
    }
}
