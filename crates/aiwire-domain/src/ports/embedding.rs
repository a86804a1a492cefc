//! Embedding Client Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::Embedding;

/// Semantic Embedding Interface
///
/// Defines the business contract for providers that transform text into
/// semantic embeddings. This abstraction lets the wiring layer work with
/// any embedding service, from hosted OpenAI deployments to self-hosted
/// Ollama instances.
///
/// # Default Implementations
///
/// The `embed()` method has a default implementation that delegates to
/// `embed_batch()` with a single item. Providers only need to implement
/// `embed_batch()` unless custom single-item optimization is needed.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Get the dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "openai", "ollama")
    fn provider_name(&self) -> &str;
}
