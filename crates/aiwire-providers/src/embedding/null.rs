//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;

use aiwire_domain::error::Result;
use aiwire_domain::ports::EmbeddingClient;
use aiwire_domain::value_objects::Embedding;
use aiwire_registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry};

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding client for testing
///
/// Returns fixed-size vectors filled with deterministic values based on
/// input text hash. Useful for unit tests and development without
/// requiring an actual embedding service.
///
/// # Example
///
/// ```rust
/// use aiwire_providers::embedding::NullEmbeddingClient;
/// use aiwire_domain::ports::EmbeddingClient;
///
/// let client = NullEmbeddingClient::new();
/// assert_eq!(client.dimensions(), 384);
/// assert_eq!(client.provider_name(), "null");
/// ```
#[derive(Default)]
pub struct NullEmbeddingClient;

impl NullEmbeddingClient {
    /// Create a new null embedding client
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmbeddingClient for NullEmbeddingClient {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                // Deterministic test embeddings based on text hash
                let hash = text.chars().map(|c| c as u32).sum::<u32>();
                let base_value = (hash % 1000) as f32 / 1000.0;

                let vector = (0..EMBEDDING_DIMENSION_NULL)
                    .map(|j| {
                        let variation = ((i as f32 + j as f32) * 0.01).sin();
                        (base_value + variation * 0.1).clamp(0.0, 1.0)
                    })
                    .collect();

                Embedding {
                    vector,
                    model: "null-test".to_string(),
                    dimensions: EMBEDDING_DIMENSION_NULL,
                }
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_EMBEDDING: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    requires: &[],
    factory: |_settings| Ok(Arc::new(NullEmbeddingClient::new())),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embeddings_are_deterministic() {
        let client = NullEmbeddingClient::new();
        let a = client.embed("hello world").await.unwrap();
        let b = client.embed("hello world").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dimensions, EMBEDDING_DIMENSION_NULL);
    }

    #[tokio::test]
    async fn batch_preserves_order_and_count() {
        let client = NullEmbeddingClient::new();
        let texts = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let embeddings = client.embed_batch(&texts).await.unwrap();
        assert_eq!(embeddings.len(), 3);
    }
}
