//! Elasticsearch vector store provider implementation
//!
//! Stores documents with dense-vector embeddings in an Elasticsearch
//! index and answers kNN similarity queries. The embedding client and
//! the HTTP transport are injected by the composition root; this store
//! never builds either itself.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::{EmbeddingClient, VectorStore};
use aiwire_domain::value_objects::{Document, ScoredDocument};
use aiwire_registry::{
    VECTOR_STORE_PROVIDERS, VectorStoreDeps, VectorStoreProviderEntry, VectorStoreSettings,
};

use crate::constants::{DEFAULT_INDEX_NAME, ELASTICSEARCH_DEFAULT_URL};
use crate::util::{check_and_parse, effective_url};

/// Elasticsearch vector store
///
/// Bound to a single index chosen at construction: the configured
/// `index_name` when non-empty, otherwise the documented default
/// (`ai-document-index`).
pub struct ElasticsearchVectorStore {
    base_url: String,
    api_key: Option<String>,
    index: String,
    timeout: Duration,
    embedding: Arc<dyn EmbeddingClient>,
    http_client: Client,
}

impl ElasticsearchVectorStore {
    /// Build a store from validated settings and injected collaborators
    ///
    /// Performs no credential validation of its own and no network I/O;
    /// index creation is lazy on first write.
    pub fn from_settings(settings: &VectorStoreSettings, deps: &VectorStoreDeps) -> Self {
        let index = settings
            .index_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_INDEX_NAME)
            .to_string();

        Self {
            base_url: effective_url(settings.url.as_deref(), ELASTICSEARCH_DEFAULT_URL),
            api_key: settings
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from),
            index,
            timeout: settings.timeout,
            embedding: deps.embedding.clone(),
            http_client: deps.http.clone(),
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http_client
            .request(method, format!("{}/{path}", self.base_url))
            .timeout(self.timeout);
        if let Some(api_key) = &self.api_key {
            builder = builder.header("Authorization", format!("ApiKey {api_key}"));
        }
        builder
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<serde_json::Value> {
        let response = builder
            .send()
            .await
            .map_err(|e| Error::vector_store(format!("HTTP request failed: {e}")))?;
        check_and_parse(response, "Elasticsearch", |m| Error::vector_store(m)).await
    }

    /// Create the index with a dense_vector mapping if it does not exist
    async fn ensure_index(&self) -> Result<()> {
        let head = self
            .request(reqwest::Method::HEAD, &self.index)
            .send()
            .await
            .map_err(|e| Error::vector_store(format!("HTTP request failed: {e}")))?;

        if head.status().is_success() {
            return Ok(());
        }

        tracing::debug!(index = %self.index, "Creating index with dense_vector mapping");

        let mapping = serde_json::json!({
            "mappings": {
                "properties": {
                    "content": { "type": "text" },
                    "metadata": { "type": "object", "enabled": false },
                    "embedding": {
                        "type": "dense_vector",
                        "dims": self.embedding.dimensions(),
                        "index": true,
                        "similarity": "cosine"
                    }
                }
            }
        });

        self.send(self.request(reqwest::Method::PUT, &self.index).json(&mapping))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl VectorStore for ElasticsearchVectorStore {
    async fn upsert(&self, documents: &[Document]) -> Result<()> {
        if documents.is_empty() {
            return Ok(());
        }

        self.ensure_index().await?;

        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let embeddings = self.embedding.embed_batch(&texts).await?;

        for (document, embedding) in documents.iter().zip(embeddings) {
            let body = serde_json::json!({
                "content": document.content,
                "metadata": document.metadata,
                "embedding": embedding.vector,
            });

            self.send(
                self.request(
                    reqwest::Method::PUT,
                    &format!("{}/_doc/{}", self.index, document.id),
                )
                .json(&body),
            )
            .await?;
        }

        Ok(())
    }

    async fn similarity_search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredDocument>> {
        let query_embedding = self.embedding.embed(query).await?;

        let body = serde_json::json!({
            "knn": {
                "field": "embedding",
                "query_vector": query_embedding.vector,
                "k": top_k,
                "num_candidates": (top_k * 10).max(100),
            },
            "size": top_k,
        });

        let data = self
            .send(
                self.request(reqwest::Method::POST, &format!("{}/_search", self.index))
                    .json(&body),
            )
            .await?;

        let hits = data["hits"]["hits"]
            .as_array()
            .ok_or_else(|| Error::vector_store("Invalid response format: missing hits"))?;

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let id = hit["_id"].as_str().unwrap_or_default().to_string();
            let content = hit["_source"]["content"].as_str().unwrap_or_default();
            let metadata = hit["_source"]["metadata"]
                .as_object()
                .map(|m| m.clone().into_iter().collect())
                .unwrap_or_default();
            let score = hit["_score"].as_f64().unwrap_or(0.0) as f32;

            results.push(ScoredDocument {
                document: Document {
                    id,
                    content: content.to_string(),
                    metadata,
                },
                score,
            });
        }

        Ok(results)
    }

    async fn delete(&self, ids: &[String]) -> Result<()> {
        for id in ids {
            self.send(self.request(
                reqwest::Method::DELETE,
                &format!("{}/_doc/{id}", self.index),
            ))
            .await?;
        }
        Ok(())
    }

    fn index_name(&self) -> &str {
        &self.index
    }

    fn provider_name(&self) -> &str {
        "elasticsearch"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(VECTOR_STORE_PROVIDERS)]
static ELASTICSEARCH_STORE: VectorStoreProviderEntry = VectorStoreProviderEntry {
    name: "elasticsearch",
    description: "Elasticsearch dense-vector store with kNN search",
    requires: &["elasticsearch-client", "http-transport"],
    factory: |settings, deps| Ok(Arc::new(ElasticsearchVectorStore::from_settings(settings, deps))),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::NullEmbeddingClient;

    fn deps() -> VectorStoreDeps {
        VectorStoreDeps {
            embedding: Arc::new(NullEmbeddingClient::new()),
            http: Client::new(),
        }
    }

    #[test]
    fn configured_index_name_is_used() {
        let settings = VectorStoreSettings::new("elasticsearch").with_index_name("my-docs");
        let store = ElasticsearchVectorStore::from_settings(&settings, &deps());
        assert_eq!(store.index_name(), "my-docs");
    }

    #[test]
    fn empty_index_name_falls_back_to_default() {
        let settings = VectorStoreSettings::new("elasticsearch").with_index_name("   ");
        let store = ElasticsearchVectorStore::from_settings(&settings, &deps());
        assert_eq!(store.index_name(), DEFAULT_INDEX_NAME);
    }

    #[test]
    fn unset_index_name_falls_back_to_default() {
        let settings = VectorStoreSettings::new("elasticsearch");
        let store = ElasticsearchVectorStore::from_settings(&settings, &deps());
        assert_eq!(store.index_name(), DEFAULT_INDEX_NAME);
        assert_eq!(store.base_url, ELASTICSEARCH_DEFAULT_URL);
    }
}
