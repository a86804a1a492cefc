//! # aiwire-providers
//!
//! Provider implementations for aiwire. Each provider implements a port
//! (trait) defined in `aiwire-domain` and registers itself into the
//! linkme slices declared in `aiwire-registry`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Chat | `ChatClient` | OpenAI, Hugging Face |
//! | Embedding | `EmbeddingClient` | OpenAI, Ollama, Null |
//! | Vector Store | `VectorStore` | Elasticsearch, InMemory |
//!
//! ## Feature Flags
//!
//! Each provider can be enabled/disabled via feature flags for minimal
//! builds. A disabled feature removes both the implementation and its
//! capability marker, so the corresponding integration silently skips
//! activation instead of failing:
//!
//! ```toml
//! [dependencies]
//! aiwire-providers = { version = "0.1", default-features = false, features = ["chat-openai", "vectorstore-memory"] }
//! ```

// Re-export aiwire-domain types commonly used with providers
pub use aiwire_domain::error::{Error, Result};
pub use aiwire_domain::ports::{ChatClient, EmbeddingClient, VectorStore};

/// Provider-specific constants
pub mod constants;

/// Capability markers advertised to the probe
pub mod markers;

/// Shared utilities for provider implementations
pub mod util;

/// Chat provider implementations
///
/// Implements the `ChatClient` trait for conversational APIs.
pub mod chat;

/// Embedding provider implementations
///
/// Implements the `EmbeddingClient` trait for embedding APIs.
pub mod embedding;

/// Vector store provider implementations
///
/// Implements the `VectorStore` trait for storage backends.
pub mod vector_store;
