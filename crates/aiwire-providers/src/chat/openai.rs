//! OpenAI Chat Provider
//!
//! Implements the ChatClient port using OpenAI's chat completions API.
//! Works against the hosted API or any OpenAI-compatible self-hosted
//! endpoint (vLLM, LocalAI, proxies).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::ChatClient;
use aiwire_domain::value_objects::{ChatCompletion, ChatMessage};
use aiwire_registry::{CHAT_PROVIDERS, ChatProviderEntry, ChatSettings};

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, OPENAI_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_CHAT_MODEL, OPENAI_HOSTED_HOST,
};
use crate::util::{check_and_parse, effective_url, is_blank, is_hosted_host};

/// OpenAI chat client
///
/// Implements the `ChatClient` domain port using OpenAI's chat
/// completions API. Optional tuning parameters (model, temperature) are
/// applied from settings at construction.
pub struct OpenAiChatClient {
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiChatClient {
    /// Build a client from validated settings
    ///
    /// Fails fast with a configuration error when the effective endpoint
    /// is the vendor's hosted host and no API key is configured. Custom
    /// and self-hosted endpoints never require a key. No network I/O
    /// happens here.
    pub fn from_settings(settings: &ChatSettings) -> Result<Self> {
        let base_url = effective_url(settings.base_url.as_deref(), OPENAI_DEFAULT_BASE_URL);

        if is_hosted_host(&base_url, OPENAI_HOSTED_HOST) && is_blank(settings.api_key.as_deref()) {
            return Err(Error::configuration(
                "OpenAI chat requires 'api_key' when targeting the hosted endpoint",
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
                .unwrap_or_else(|| OPENAI_DEFAULT_CHAT_MODEL.to_string()),
            temperature: settings.temperature,
            timeout: settings.timeout,
            http_client,
        })
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a chat completion request and get response data
    async fn fetch_completion(&self, messages: &[ChatMessage]) -> Result<serde_json::Value> {
        let wire_messages: Vec<serde_json::Value> = messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": m.role.as_str(),
                    "content": m.content,
                })
            })
            .collect();

        let mut payload = serde_json::json!({
            "model": self.model,
            "messages": wire_messages,
        });
        if let Some(temperature) = self.temperature {
            payload["temperature"] = serde_json::json!(temperature);
        }

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::chat(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
                } else {
                    Error::chat(format!("HTTP request failed: {e}"))
                }
            })?;

        check_and_parse(response, "OpenAI", |m| Error::chat(m)).await
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion> {
        if messages.is_empty() {
            return Err(Error::chat("Conversation must contain at least one message"));
        }

        let data = self.fetch_completion(messages).await?;

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| Error::chat("Invalid response format: missing message content"))?
            .to_string();

        let model = data["model"].as_str().unwrap_or(&self.model).to_string();

        Ok(ChatCompletion { content, model })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CHAT_PROVIDERS)]
static OPENAI_CHAT: ChatProviderEntry = ChatProviderEntry {
    name: "openai",
    description: "OpenAI chat completions (hosted or OpenAI-compatible endpoints)",
    requires: &["openai-client", "http-transport"],
    factory: |settings| Ok(Arc::new(OpenAiChatClient::from_settings(settings)?)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosted_endpoint_without_key_is_rejected() {
        let settings = ChatSettings::new("openai");
        let err = match OpenAiChatClient::from_settings(&settings) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.is_configuration(), "expected configuration error, got {err}");
    }

    #[test]
    fn hosted_endpoint_with_blank_key_is_rejected() {
        let settings = ChatSettings::new("openai").with_api_key("   ");
        assert!(OpenAiChatClient::from_settings(&settings).is_err());
    }

    #[test]
    fn hosted_host_with_nonstandard_path_still_requires_key() {
        let settings = ChatSettings::new("openai").with_base_url("https://api.openai.com/");
        assert!(OpenAiChatClient::from_settings(&settings).is_err());
    }

    #[test]
    fn self_hosted_endpoint_allows_blank_key() {
        let settings = ChatSettings::new("openai").with_base_url("http://localhost:8080/v1");
        let client = OpenAiChatClient::from_settings(&settings).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.model(), OPENAI_DEFAULT_CHAT_MODEL);
    }

    #[test]
    fn tuning_parameters_are_applied() {
        let settings = ChatSettings::new("openai")
            .with_api_key("sk-test")
            .with_model("gpt-4o")
            .with_temperature(0.7);
        let client = OpenAiChatClient::from_settings(&settings).unwrap();
        assert_eq!(client.model(), "gpt-4o");
        assert_eq!(client.temperature, Some(0.7));
    }
}
