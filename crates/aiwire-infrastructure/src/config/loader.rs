//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use aiwire_domain::error::{Error, Result};

use super::AppConfig;

/// Default configuration file name
const DEFAULT_CONFIG_FILENAME: &str = "aiwire.toml";

/// Default configuration directory name
const DEFAULT_CONFIG_DIR: &str = "aiwire";

/// Environment variable prefix
const CONFIG_ENV_PREFIX: &str = "AIWIRE";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix, double underscore as the
    ///    nesting separator (e.g. `AIWIRE_INTEGRATIONS__CHAT__API_KEY`)
    ///
    /// Binding is structural: a missing file or absent keys fall back to
    /// defaults, and no semantic validation (URL shape, credential
    /// presence) happens here.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment.extract().map_err(|e| {
            Error::configuration_with_source("Failed to extract configuration", e)
        })?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::configuration_with_source("Failed to serialize config to TOML", e))?;

        std::fs::write(path.as_ref(), toml_string)
            .map_err(|e| Error::configuration_with_source("Failed to write config file", e))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find a default configuration file to use
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_without_file_yields_defaults() {
        let config = ConfigLoader::new()
            .with_config_path("/nonexistent/aiwire.toml")
            .load()
            .unwrap();
        assert!(config.integrations.chat.enabled);
        assert_eq!(config.integrations.embedding.provider, "openai");
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
[integrations.chat]
enabled = false
provider = "huggingface"
base_url = "http://localhost:8081"

[integrations.vector_store]
index_name = "my-index"
"#
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .unwrap();

        assert!(!config.integrations.chat.enabled);
        assert_eq!(config.integrations.chat.provider, "huggingface");
        assert_eq!(
            config.integrations.chat.base_url.as_deref(),
            Some("http://localhost:8081")
        );
        // Untouched sections keep their defaults
        assert!(config.integrations.embedding.enabled);
        assert_eq!(config.integrations.embedding.timeout_secs, 30);
        assert_eq!(
            config.integrations.vector_store.index_name.as_deref(),
            Some("my-index")
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aiwire.toml");

        let mut config = AppConfig::default();
        config.integrations.chat.model = Some("gpt-4o".to_string());

        let loader = ConfigLoader::new().with_config_path(&path);
        loader.save_to_file(&config, &path).unwrap();
        let loaded = loader.load().unwrap();

        assert_eq!(loaded.integrations.chat.model.as_deref(), Some("gpt-4o"));
    }
}
