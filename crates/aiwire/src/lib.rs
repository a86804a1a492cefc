//! # aiwire
//!
//! Conditional wiring of AI provider clients - chat, embedding, vector
//! store - from externally supplied configuration. Integrations activate
//! only when their capability is compiled in, they are not disabled, and
//! no caller-supplied instance already occupies their role; mandatory
//! credentials are validated fail-fast at startup.
//!
//! ## Example
//!
//! ```no_run
//! use aiwire::ChatClient;
//! use aiwire::infrastructure::{ConfigLoader, init_app};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load()?;
//!     let context = init_app(config)?;
//!
//!     if let Some(chat) = context.chat() {
//!         println!("chat wired to {}", chat.provider_name());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - error taxonomy, value objects, and provider port traits
//! - `registry` - capability probe and linkme provider entry slices
//! - `providers` - provider implementations that self-register
//! - `infrastructure` - configuration binding, logging, composition root

/// Domain layer - errors, value objects, and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use aiwire_domain::*;
}

/// Registration layer - capability probe and provider slices
///
/// Re-exports from the registry crate for convenience
pub mod registry {
    pub use aiwire_registry::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use aiwire_providers::*;
}

/// Infrastructure layer - configuration, logging, composition root
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use aiwire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{ChatClient, ChatCompletion, ChatMessage, Document, Embedding, EmbeddingClient,
    Error, Result, ScoredDocument, VectorStore};

// Re-export the main entry points at the crate root
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};
