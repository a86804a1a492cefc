//! In-memory vector store provider implementation
//!
//! Provides an in-memory storage backend for development and testing.
//! Data is not persisted and will be lost on restart.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use aiwire_domain::error::Result;
use aiwire_domain::ports::{EmbeddingClient, VectorStore};
use aiwire_domain::value_objects::{Document, ScoredDocument};
use aiwire_registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreDeps, VectorStoreProviderEntry, VectorStoreSettings,
};

use crate::constants::DEFAULT_INDEX_NAME;

/// In-memory vector store
///
/// Stores documents and their embeddings in a concurrent map and ranks
/// matches by cosine similarity. Useful for development and testing
/// where persistence is not required.
pub struct InMemoryVectorStore {
    index: String,
    embedding: Arc<dyn EmbeddingClient>,
    entries: DashMap<String, (Document, Vec<f32>)>,
}

impl InMemoryVectorStore {
    /// Build a store from validated settings and injected collaborators
    pub fn from_settings(settings: &VectorStoreSettings, deps: &VectorStoreDeps) -> Self {
        let index = settings
            .index_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_INDEX_NAME)
            .to_string();

        Self {
            index,
            embedding: deps.embedding.clone(),
            entries: DashMap::new(),
        }
    }

    /// Number of documents currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn upsert(&self, documents: &[Document]) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let embeddings = self.embedding.embed_batch(&texts).await?;

        for (document, embedding) in documents.iter().zip(embeddings) {
            self.entries
                .insert(document.id.clone(), (document.clone(), embedding.vector));
        }

        Ok(())
    }

    async fn similarity_search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredDocument>> {
        let query_embedding = self.embedding.embed(query).await?;
        let query_norm = norm(&query_embedding.vector);

        let mut scored: Vec<ScoredDocument> = self
            .entries
            .iter()
            .map(|entry| {
                let (document, vector) = entry.value();
                ScoredDocument {
                    document: document.clone(),
                    score: cosine_similarity(&query_embedding.vector, vector, query_norm),
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn delete(&self, ids: &[String]) -> Result<()> {
        for id in ids {
            self.entries.remove(id);
        }
        Ok(())
    }

    fn index_name(&self) -> &str {
        &self.index
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

/// Euclidean norm of a vector
fn norm(vector: &[f32]) -> f32 {
    vector.iter().map(|v| v * v).sum::<f32>().sqrt()
}

/// Cosine similarity with a precomputed query norm
fn cosine_similarity(query: &[f32], candidate: &[f32], query_norm: f32) -> f32 {
    let dot: f32 = query.iter().zip(candidate).map(|(a, b)| a * b).sum();
    let denominator = query_norm * norm(candidate);
    if denominator == 0.0 { 0.0 } else { dot / denominator }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static MEMORY_STORE: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "memory",
    description: "In-memory store for development and testing (cosine similarity)",
    requires: &[],
    factory: |settings, deps| Ok(Arc::new(InMemoryVectorStore::from_settings(settings, deps))),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::NullEmbeddingClient;
    use reqwest::Client;

    fn store(settings: VectorStoreSettings) -> InMemoryVectorStore {
        let deps = VectorStoreDeps {
            embedding: Arc::new(NullEmbeddingClient::new()),
            http: Client::new(),
        };
        InMemoryVectorStore::from_settings(&settings, &deps)
    }

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let store = store(VectorStoreSettings::new("memory"));
        store
            .upsert(&[Document::with_id("d1", "first"), Document::with_id("d1", "second")])
            .await
            .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn search_returns_at_most_top_k() {
        let store = store(VectorStoreSettings::new("memory"));
        let docs: Vec<Document> = (0..5)
            .map(|i| Document::with_id(format!("d{i}"), format!("document number {i}")))
            .collect();
        store.upsert(&docs).await.unwrap();

        let results = store.similarity_search("document", 3).await.unwrap();
        assert_eq!(results.len(), 3);
        // Scores arrive in descending order
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn identical_text_ranks_first() {
        let store = store(VectorStoreSettings::new("memory"));
        store
            .upsert(&[
                Document::with_id("a", "the quick brown fox"),
                Document::with_id("b", "completely unrelated payload entry"),
            ])
            .await
            .unwrap();

        let results = store.similarity_search("the quick brown fox", 2).await.unwrap();
        assert_eq!(results[0].document.id, "a");
    }

    #[tokio::test]
    async fn delete_removes_entries() {
        let store = store(VectorStoreSettings::new("memory"));
        store.upsert(&[Document::with_id("d1", "text")]).await.unwrap();
        store.delete(&["d1".to_string()]).await.unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn index_name_defaults() {
        let store = store(VectorStoreSettings::new("memory"));
        assert_eq!(store.index_name(), DEFAULT_INDEX_NAME);

        let named = self::store(VectorStoreSettings::new("memory").with_index_name("kb"));
        assert_eq!(named.index_name(), "kb");
    }

    #[test]
    fn cosine_similarity_handles_zero_vectors() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0], 0.0), 0.0);
    }
}
