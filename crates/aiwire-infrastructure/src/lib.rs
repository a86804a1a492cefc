//! # aiwire-infrastructure
//!
//! Infrastructure layer for aiwire: configuration binding, logging
//! setup, and the composition root that turns configuration into a
//! registry of wired provider instances.
//!
//! ## Startup flow
//!
//! ```text
//! ConfigLoader (figment: defaults → TOML → env)
//!        │
//!        ▼
//! AppConfig ──► init_app ──► per-integration activation:
//!                              enabled flag → caller override →
//!                              capability probe → settings → factory
//!        │
//!        ▼
//! AppContext { chat?, embedding?, vector_store? }
//! ```

// Providers must be linked into the final artifact for their linkme
// registrations to populate the slices this crate wires from.
use aiwire_providers as _;

pub mod config;
pub mod logging;
pub mod wiring;

pub use config::{
    AppConfig, ChatIntegrationConfig, ConfigBuilder, ConfigLoader, EmbeddingIntegrationConfig,
    IntegrationsConfig, LoggingConfig, VectorStoreIntegrationConfig,
};
pub use logging::{init_logging, parse_log_level};
pub use wiring::{AppContext, AppContextBuilder, ProviderRegistry, init_app, init_test_app};
