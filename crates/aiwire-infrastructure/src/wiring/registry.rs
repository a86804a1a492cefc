//! Provider Registry - first-writer-wins singleton slots
//!
//! One slot per integration role. A slot, once filled - whether by a
//! caller-supplied instance or by automatic construction - is never
//! overwritten, which gives both the override semantics (a pre-supplied
//! instance suppresses the factory) and idempotent re-wiring (a second
//! pass over identical settings changes nothing).

use std::sync::{Arc, OnceLock};

use aiwire_domain::ports::{ChatClient, EmbeddingClient, VectorStore};

/// Registry of wired provider instances
///
/// Instances are shared, effectively-immutable singletons: at most one
/// per role for the registry's lifetime. Lookup is lock-free after the
/// startup write.
#[derive(Default)]
pub struct ProviderRegistry {
    chat: OnceLock<Arc<dyn ChatClient>>,
    embedding: OnceLock<Arc<dyn EmbeddingClient>>,
    vector_store: OnceLock<Arc<dyn VectorStore>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the chat slot; returns false when already occupied
    pub fn supply_chat(&self, client: Arc<dyn ChatClient>) -> bool {
        self.chat.set(client).is_ok()
    }

    /// Fill the embedding slot; returns false when already occupied
    pub fn supply_embedding(&self, client: Arc<dyn EmbeddingClient>) -> bool {
        self.embedding.set(client).is_ok()
    }

    /// Fill the vector store slot; returns false when already occupied
    pub fn supply_vector_store(&self, store: Arc<dyn VectorStore>) -> bool {
        self.vector_store.set(store).is_ok()
    }

    /// Look up the wired chat client
    pub fn chat(&self) -> Option<Arc<dyn ChatClient>> {
        self.chat.get().cloned()
    }

    /// Look up the wired embedding client
    pub fn embedding(&self) -> Option<Arc<dyn EmbeddingClient>> {
        self.embedding.get().cloned()
    }

    /// Look up the wired vector store
    pub fn vector_store(&self) -> Option<Arc<dyn VectorStore>> {
        self.vector_store.get().cloned()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("chat", &self.chat().map(|c| c.provider_name().to_string()))
            .field(
                "embedding",
                &self.embedding().map(|e| e.provider_name().to_string()),
            )
            .field(
                "vector_store",
                &self.vector_store().map(|v| v.provider_name().to_string()),
            )
            .finish()
    }
}
