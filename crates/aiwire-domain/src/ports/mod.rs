//! Provider Port Traits
//!
//! Business contracts implemented by constructed provider clients. The
//! wiring layer only ever hands out `Arc<dyn Trait>` values of these
//! ports; concrete types stay inside the providers crate.

/// Chat client port
pub mod chat;
/// Embedding client port
pub mod embedding;
/// Vector store port
pub mod vector_store;

pub use chat::ChatClient;
pub use embedding::EmbeddingClient;
pub use vector_store::VectorStore;
