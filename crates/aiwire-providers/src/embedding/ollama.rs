//! Ollama Embedding Provider
//!
//! Implements the EmbeddingClient port using Ollama's local embedding
//! API. Supports local models like nomic-embed-text, all-minilm, and
//! mxbai-embed-large. Ollama is always self-hosted, so no credential is
//! ever required.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::EmbeddingClient;
use aiwire_domain::value_objects::Embedding;
use aiwire_registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry, EmbeddingSettings};

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_DEFAULT, EMBEDDING_DIMENSION_OLLAMA_MINILM,
    EMBEDDING_DIMENSION_OLLAMA_MXBAI, EMBEDDING_DIMENSION_OLLAMA_NOMIC, ERROR_MSG_REQUEST_TIMEOUT,
    OLLAMA_DEFAULT_BASE_URL, OLLAMA_DEFAULT_EMBEDDING_MODEL,
};
use crate::util::{check_and_parse, effective_url};

/// Ollama embedding client
///
/// Implements the `EmbeddingClient` domain port using Ollama's local
/// embedding API.
pub struct OllamaEmbeddingClient {
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OllamaEmbeddingClient {
    /// Build a client from validated settings
    ///
    /// Never requires a credential; the endpoint defaults to the local
    /// Ollama server. No network I/O happens here.
    pub fn from_settings(settings: &EmbeddingSettings) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            base_url: effective_url(settings.base_url.as_deref(), OLLAMA_DEFAULT_BASE_URL),
            model: settings
                .model
                .clone()
                .unwrap_or_else(|| OLLAMA_DEFAULT_EMBEDDING_MODEL.to_string()),
            timeout: settings.timeout,
            http_client,
        })
    }

    /// Get the model name for this client
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fetch embedding for a single text
    async fn fetch_single_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!("{}/api/embeddings", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
                } else {
                    Error::embedding(format!("HTTP request failed: {e}"))
                }
            })?;

        check_and_parse(response, "Ollama", |m| Error::embedding(m)).await
    }
}

#[async_trait]
impl EmbeddingClient for OllamaEmbeddingClient {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        // Ollama's embedding endpoint is single-text; batch sequentially
        let mut embeddings = Vec::with_capacity(texts.len());

        for (index, text) in texts.iter().enumerate() {
            let data = self.fetch_single_embedding(text).await?;

            let vector = data["embedding"]
                .as_array()
                .ok_or_else(|| {
                    Error::embedding(format!("Invalid embedding format for text {index}"))
                })?
                .iter()
                .map(|v| v.as_f64().unwrap_or(0.0) as f32)
                .collect::<Vec<f32>>();

            embeddings.push(Embedding {
                vector,
                model: self.model.clone(),
                dimensions: self.dimensions(),
            });
        }

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "nomic-embed-text" => EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            "all-minilm" => EMBEDDING_DIMENSION_OLLAMA_MINILM,
            "mxbai-embed-large" => EMBEDDING_DIMENSION_OLLAMA_MXBAI,
            _ => EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
        }
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_EMBEDDING: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Ollama local embedding provider (nomic-embed-text, all-minilm, ...)",
    requires: &["ollama-client", "http-transport"],
    factory: |settings| Ok(Arc::new(OllamaEmbeddingClient::from_settings(settings)?)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_never_requires_a_key() {
        let settings = EmbeddingSettings::new("ollama");
        let client = OllamaEmbeddingClient::from_settings(&settings).unwrap();
        assert_eq!(client.base_url, OLLAMA_DEFAULT_BASE_URL);
        assert_eq!(client.model(), OLLAMA_DEFAULT_EMBEDDING_MODEL);
    }

    #[test]
    fn dimensions_follow_model() {
        let settings = EmbeddingSettings::new("ollama").with_model("all-minilm");
        let client = OllamaEmbeddingClient::from_settings(&settings).unwrap();
        assert_eq!(client.dimensions(), EMBEDDING_DIMENSION_OLLAMA_MINILM);
    }
}
