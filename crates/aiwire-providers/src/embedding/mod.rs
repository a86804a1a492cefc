//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings. Each provider offers
//! different tradeoffs between quality, cost, and privacy.
//!
//! ## Available Providers
//!
//! | Provider | Type | Credential Policy |
//! |----------|------|-------------------|
//! | NullEmbeddingClient | Testing | None |
//! | OllamaEmbeddingClient | Local | None |
//! | OpenAiEmbeddingClient | Cloud / self-hosted | Key mandatory on the hosted host |
//!
//! ## Provider Selection Guide
//!
//! - **Testing**: `NullEmbeddingClient` keeps tests deterministic and offline
//! - **Local / privacy-first**: `OllamaEmbeddingClient`
//! - **Cloud / production**: `OpenAiEmbeddingClient`

pub mod null;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;
#[cfg(feature = "embedding-openai")]
pub mod openai;

pub use null::NullEmbeddingClient;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingClient;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAiEmbeddingClient;
