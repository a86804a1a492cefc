//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingClient port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::EmbeddingClient;
use aiwire_domain::value_objects::Embedding;
use aiwire_registry::{EMBEDDING_PROVIDERS, EmbeddingProviderEntry, EmbeddingSettings};

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, ERROR_MSG_REQUEST_TIMEOUT, OPENAI_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_EMBEDDING_MODEL, OPENAI_HOSTED_HOST,
};
use crate::util::{check_and_parse, effective_url, is_blank, is_hosted_host};

/// OpenAI embedding client
///
/// Implements the `EmbeddingClient` domain port using OpenAI's embedding
/// API. Works against the hosted API or any OpenAI-compatible endpoint.
pub struct OpenAiEmbeddingClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiEmbeddingClient {
    /// Build a client from validated settings
    ///
    /// Fails fast with a configuration error when the effective endpoint
    /// is the vendor's hosted host and no API key is configured.
    pub fn from_settings(settings: &EmbeddingSettings) -> Result<Self> {
        let base_url = effective_url(settings.base_url.as_deref(), OPENAI_DEFAULT_BASE_URL);

        if is_hosted_host(&base_url, OPENAI_HOSTED_HOST) && is_blank(settings.api_key.as_deref()) {
            return Err(Error::configuration(
                "OpenAI embedding requires 'api_key' when targeting the hosted endpoint",
            ));
        }

        let http_client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            api_key: settings.api_key.as_deref().unwrap_or("").trim().to_string(),
            base_url,
            model: settings
                .model
                .clone()
                .unwrap_or_else(|| OPENAI_DEFAULT_EMBEDDING_MODEL.to_string()),
            timeout: settings.timeout,
            http_client,
        })
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        check_and_parse(response, "OpenAI", |m| Error::embedding(m)).await
    }

    /// Parse an embedding vector from response data
    fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        let vector = item["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding(format!("Invalid embedding format for text {index}")))?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect::<Vec<f32>>();

        Ok(Embedding {
            vector,
            model: self.model.clone(),
            dimensions: self.dimensions(),
        })
    }
}

#[async_trait]
impl EmbeddingClient for OpenAiEmbeddingClient {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;

        let data = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?;

        if data.len() != texts.len() {
            return Err(Error::embedding(format!(
                "Response data count mismatch: expected {}, got {}",
                texts.len(),
                data.len()
            )));
        }

        data.iter()
            .enumerate()
            .map(|(i, item)| self.parse_embedding(i, item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-small" => EMBEDDING_DIMENSION_OPENAI_SMALL,
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        }
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI_EMBEDDING: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI embedding provider (text-embedding-3-small/large, ada-002)",
    requires: &["openai-client", "http-transport"],
    factory: |settings| Ok(Arc::new(OpenAiEmbeddingClient::from_settings(settings)?)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosted_endpoint_without_key_is_rejected() {
        let settings = EmbeddingSettings::new("openai");
        let err = match OpenAiEmbeddingClient::from_settings(&settings) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.is_configuration());
    }

    #[test]
    fn self_hosted_endpoint_allows_blank_key() {
        let settings = EmbeddingSettings::new("openai").with_base_url("http://localhost:8080/v1");
        let client = OpenAiEmbeddingClient::from_settings(&settings).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn dimensions_follow_model() {
        let settings = EmbeddingSettings::new("openai")
            .with_api_key("sk-test")
            .with_model("text-embedding-3-large");
        let client = OpenAiEmbeddingClient::from_settings(&settings).unwrap();
        assert_eq!(client.dimensions(), EMBEDDING_DIMENSION_OPENAI_LARGE);
    }
}
