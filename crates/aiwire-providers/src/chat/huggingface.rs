//! Hugging Face Chat Provider
//!
//! Implements the ChatClient port against a Hugging Face inference
//! endpoint. Endpoints are per-model URLs, so the URL is mandatory; a
//! bearer token is only needed for protected endpoints and self-hosted
//! TGI deployments commonly run without one.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use aiwire_domain::error::{Error, Result};
use aiwire_domain::ports::ChatClient;
use aiwire_domain::value_objects::{ChatCompletion, ChatMessage, ChatRole};
use aiwire_registry::{CHAT_PROVIDERS, ChatProviderEntry, ChatSettings};

use crate::constants::{CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT};
use crate::util::check_and_parse;

/// Hugging Face inference chat client
pub struct HuggingFaceChatClient {
    api_key: Option<String>,
    url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl HuggingFaceChatClient {
    /// Build a client from validated settings
    ///
    /// The inference endpoint URL is mandatory; there is no hosted
    /// default to fall back to. No network I/O happens here.
    pub fn from_settings(settings: &ChatSettings) -> Result<Self> {
        let url = settings
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| {
                Error::configuration("Hugging Face chat requires 'base_url' (inference endpoint URL)")
            })?
            .trim_end_matches('/')
            .to_string();

        let http_client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            api_key: settings
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from),
            url,
            model: settings.model.clone().unwrap_or_else(|| "default".to_string()),
            timeout: settings.timeout,
            http_client,
        })
    }

    /// Get the inference endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Flatten a conversation into a single prompt
    ///
    /// Inference endpoints take raw text; roles become line prefixes the
    /// way the hosted conversational pipeline renders them.
    fn render_prompt(messages: &[ChatMessage]) -> String {
        let mut prompt = String::new();
        for message in messages {
            match message.role {
                ChatRole::System => prompt.push_str(&format!("{}\n\n", message.content)),
                ChatRole::User => prompt.push_str(&format!("User: {}\n", message.content)),
                ChatRole::Assistant => prompt.push_str(&format!("Assistant: {}\n", message.content)),
            }
        }
        prompt.push_str("Assistant:");
        prompt
    }

    async fn fetch_generation(&self, prompt: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "inputs": prompt,
            "parameters": { "return_full_text": false }
        });

        let mut request = self
            .http_client
            .post(&self.url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);

        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::chat(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
            } else {
                Error::chat(format!("HTTP request failed: {e}"))
            }
        })?;

        check_and_parse(response, "HuggingFace", |m| Error::chat(m)).await
    }
}

#[async_trait]
impl ChatClient for HuggingFaceChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<ChatCompletion> {
        if messages.is_empty() {
            return Err(Error::chat("Conversation must contain at least one message"));
        }

        let prompt = Self::render_prompt(messages);
        let data = self.fetch_generation(&prompt).await?;

        // TGI returns [{"generated_text": ...}], older pipelines an object
        let content = data[0]["generated_text"]
            .as_str()
            .or_else(|| data["generated_text"].as_str())
            .ok_or_else(|| Error::chat("Invalid response format: missing generated_text"))?
            .trim()
            .to_string();

        Ok(ChatCompletion {
            content,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CHAT_PROVIDERS)]
static HUGGINGFACE_CHAT: ChatProviderEntry = ChatProviderEntry {
    name: "huggingface",
    description: "Hugging Face inference endpoint chat (hosted or self-hosted TGI)",
    requires: &["huggingface-client", "http-transport"],
    factory: |settings| Ok(Arc::new(HuggingFaceChatClient::from_settings(settings)?)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_rejected() {
        let settings = ChatSettings::new("huggingface").with_api_key("hf_token");
        let err = match HuggingFaceChatClient::from_settings(&settings) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.is_configuration());
    }

    #[test]
    fn self_hosted_url_without_key_is_accepted() {
        let settings = ChatSettings::new("huggingface").with_base_url("http://localhost:8081/");
        let client = HuggingFaceChatClient::from_settings(&settings).unwrap();
        assert_eq!(client.url(), "http://localhost:8081");
        assert!(client.api_key.is_none());
    }

    #[test]
    fn prompt_rendering_orders_roles() {
        let prompt = HuggingFaceChatClient::render_prompt(&[
            ChatMessage::system("Be brief."),
            ChatMessage::user("Hello"),
        ]);
        assert!(prompt.starts_with("Be brief."));
        assert!(prompt.contains("User: Hello"));
        assert!(prompt.ends_with("Assistant:"));
    }
}
