//! End-to-end wiring tests
//!
//! Exercises the composition root against real registered providers:
//! activation conditions, caller overrides, fail-fast credential
//! validation, index binding, and idempotent re-wiring.

use std::sync::Arc;

use async_trait::async_trait;

use aiwire_domain::error::Result;
use aiwire_domain::ports::{ChatClient, VectorStore};
use aiwire_domain::value_objects::{ChatCompletion, ChatMessage};
use aiwire_infrastructure::{
    AppContext, ChatIntegrationConfig, ConfigBuilder, EmbeddingIntegrationConfig, init_app,
    VectorStoreIntegrationConfig,
};

/// Chat double standing in for a caller-supplied instance
struct StubChatClient;

#[async_trait]
impl ChatClient for StubChatClient {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<ChatCompletion> {
        Ok(ChatCompletion {
            content: "stub".to_string(),
            model: "stub-model".to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

/// Offline-safe baseline: chat self-hosted, embedding null, store memory
fn offline_config() -> aiwire_infrastructure::AppConfig {
    ConfigBuilder::new()
        .with_chat(ChatIntegrationConfig {
            base_url: Some("http://localhost:8080/v1".to_string()),
            ..Default::default()
        })
        .with_embedding(EmbeddingIntegrationConfig {
            provider: "null".to_string(),
            ..Default::default()
        })
        .with_vector_store(VectorStoreIntegrationConfig {
            provider: "memory".to_string(),
            ..Default::default()
        })
        .build()
}

// ============================================================================
// Activation Conditions
// ============================================================================

#[test]
fn disabled_integration_is_never_registered() {
    let mut config = offline_config();
    config.integrations.embedding.enabled = false;
    // Hosted endpoint and blank key: would fail construction if the
    // enabled flag were not honored first
    config.integrations.embedding.provider = "openai".to_string();
    config.integrations.embedding.base_url = None;

    let context = init_app(config).unwrap();
    assert!(context.embedding().is_none());
    // The vector store depends on the embedding slot, so it skips too
    assert!(context.vector_store().is_none());
}

#[test]
fn all_integrations_disabled_yields_empty_registry() {
    let mut config = offline_config();
    config.integrations.chat.enabled = false;
    config.integrations.embedding.enabled = false;
    config.integrations.vector_store.enabled = false;

    let context = init_app(config).unwrap();
    assert!(context.chat().is_none());
    assert!(context.embedding().is_none());
    assert!(context.vector_store().is_none());
}

// ============================================================================
// Fail-Fast Credential Policy
// ============================================================================

#[test]
fn hosted_default_endpoint_without_key_aborts_startup() {
    let mut config = offline_config();
    config.integrations.chat.base_url = None; // falls back to the hosted default

    let err = init_app(config).unwrap_err();
    assert!(err.is_configuration(), "expected configuration error, got {err}");
}

#[test]
fn self_hosted_endpoint_without_key_activates() {
    let context = init_app(offline_config()).unwrap();
    let chat = context.chat().expect("self-hosted chat should activate");
    assert_eq!(chat.provider_name(), "openai");
}

#[test]
fn hosted_endpoint_with_key_activates() {
    let mut config = offline_config();
    config.integrations.chat.base_url = None;
    config.integrations.chat.api_key = Some("sk-test".to_string());

    let context = init_app(config).unwrap();
    assert!(context.chat().is_some());
}

// ============================================================================
// Caller Overrides
// ============================================================================

#[test]
fn supplied_instance_wins_and_factory_never_runs() {
    let mut config = offline_config();
    // This chat configuration would fail fast in the factory
    config.integrations.chat.base_url = None;
    config.integrations.chat.api_key = None;

    let supplied: Arc<dyn ChatClient> = Arc::new(StubChatClient);
    let context = AppContext::builder(config)
        .with_chat_client(supplied.clone())
        .build()
        .expect("supplied instance must suppress factory validation");

    let resolved = context.chat().unwrap();
    assert!(Arc::ptr_eq(&resolved, &supplied), "must be the exact supplied instance");
    assert_eq!(resolved.provider_name(), "stub");
}

// ============================================================================
// Index Binding
// ============================================================================

#[test]
fn configured_index_name_is_bound() {
    let mut config = offline_config();
    config.integrations.vector_store.index_name = Some("knowledge-base".to_string());

    let context = init_app(config).unwrap();
    assert_eq!(context.vector_store().unwrap().index_name(), "knowledge-base");
}

#[test]
fn empty_index_name_uses_documented_default() {
    let mut config = offline_config();
    config.integrations.vector_store.index_name = Some(String::new());

    let context = init_app(config).unwrap();
    assert_eq!(
        context.vector_store().unwrap().index_name(),
        aiwire_providers::constants::DEFAULT_INDEX_NAME
    );
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn rewiring_with_identical_settings_keeps_single_instances() {
    let context = init_app(offline_config()).unwrap();

    let chat_before = context.chat().unwrap();
    let embedding_before = context.embedding().unwrap();
    let store_before = context.vector_store().unwrap();

    context.rewire().expect("re-wiring must not fail");

    assert!(Arc::ptr_eq(&context.chat().unwrap(), &chat_before));
    assert!(Arc::ptr_eq(&context.embedding().unwrap(), &embedding_before));
    assert!(Arc::ptr_eq(&context.vector_store().unwrap(), &store_before));
}

// ============================================================================
// Unknown Provider Names
// ============================================================================

#[test]
fn unknown_provider_name_is_skipped_by_the_guard() {
    let mut config = offline_config();
    config.integrations.embedding.provider = "does-not-exist".to_string();

    // An unregistered name is an absent capability: silent skip, not an error
    let context = init_app(config).unwrap();
    assert!(context.embedding().is_none());
}

// ============================================================================
// Wired Pipeline Smoke Test
// ============================================================================

#[tokio::test]
async fn wired_store_round_trips_documents() {
    let context = init_app(offline_config()).unwrap();
    let store = context.vector_store().unwrap();

    store
        .upsert(&[
            aiwire_domain::value_objects::Document::with_id("a", "rust wiring layer"),
            aiwire_domain::value_objects::Document::with_id("b", "unrelated content"),
        ])
        .await
        .unwrap();

    let results = store.similarity_search("rust wiring layer", 1).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, "a");
}
