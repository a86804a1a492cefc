//! Vector Store Port

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Document, ScoredDocument};

/// Similarity Search Storage Interface
///
/// Defines the business contract for stores that persist documents with
/// their embeddings and answer nearest-neighbour queries. A store is
/// bound to a single index (collection) for its lifetime; the index name
/// is fixed at construction.
///
/// Embedding of content happens inside the store using the embedding
/// client it was wired with, so callers never handle raw vectors.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or replace documents in the index
    async fn upsert(&self, documents: &[Document]) -> Result<()>;

    /// Find the `top_k` documents most similar to the query text
    async fn similarity_search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredDocument>>;

    /// Remove documents by identifier
    async fn delete(&self, ids: &[String]) -> Result<()>;

    /// Name of the index this store is bound to
    fn index_name(&self) -> &str;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "elasticsearch", "memory")
    fn provider_name(&self) -> &str;
}
