//! Tests for provider registries
//!
//! Validates the linkme distributed-slice registration system by
//! resolving and using real registered providers, not just settings
//! builders. Uses `extern crate aiwire_providers` to force linkme
//! registration of the real provider entries.

// Force linkme registration of all providers from aiwire-providers
extern crate aiwire_providers;

use std::sync::Arc;

use aiwire_domain::ports::{ChatClient, EmbeddingClient, VectorStore};
use aiwire_providers::embedding::NullEmbeddingClient;
use aiwire_registry::{
    CHAT_PROVIDERS, ChatProviderEntry, ChatSettings, EmbeddingSettings, VectorStoreDeps,
    VectorStoreSettings, chat_provider_available, embedding_provider_available, has_capability,
    list_capabilities, list_chat_providers, list_embedding_providers, list_vector_store_providers,
    resolve_chat_client, resolve_embedding_client, resolve_vector_store,
    vector_store_provider_available,
};

fn store_deps() -> VectorStoreDeps {
    VectorStoreDeps {
        embedding: Arc::new(NullEmbeddingClient::new()),
        http: reqwest::Client::new(),
    }
}

// ============================================================================
// Capability Probe Tests
// ============================================================================

mod capability_tests {
    use super::*;

    #[test]
    fn transport_capability_is_registered() {
        assert!(has_capability("http-transport"));
    }

    #[test]
    fn capability_listing_has_descriptions() {
        let capabilities = list_capabilities();
        assert!(!capabilities.is_empty());
        for (name, description) in &capabilities {
            assert!(!name.is_empty());
            assert!(!description.is_empty(), "capability '{name}' lacks a description");
        }
    }

    #[test]
    fn unknown_capability_is_absent() {
        assert!(!has_capability("quantum-accelerator"));
    }
}

// ============================================================================
// Chat Registry Tests - Real Provider Resolution
// ============================================================================

mod chat_registry_tests {
    use super::*;

    #[test]
    fn registered_providers_are_listed() {
        let providers = list_chat_providers();
        assert!(providers.iter().any(|(name, _)| *name == "openai"));
        assert!(providers.iter().any(|(name, _)| *name == "huggingface"));
    }

    #[test]
    fn openai_chat_is_available() {
        assert!(chat_provider_available("openai"));
    }

    #[test]
    fn unknown_chat_provider_is_unavailable() {
        assert!(!chat_provider_available("nonexistent_provider_xyz"));
    }

    #[test]
    fn resolve_self_hosted_openai_chat() {
        let settings = ChatSettings::new("openai").with_base_url("http://localhost:8080/v1");
        let client = resolve_chat_client(&settings).expect("self-hosted endpoint needs no key");
        assert_eq!(client.provider_name(), "openai");
    }

    #[test]
    fn resolve_hosted_openai_chat_without_key_fails() {
        let settings = ChatSettings::new("openai");
        let err = match resolve_chat_client(&settings) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.is_configuration(), "expected configuration error, got {err}");
    }

    #[test]
    fn resolve_unknown_chat_provider_fails_with_listing() {
        let settings = ChatSettings::new("nonexistent_provider_xyz");
        let err = match resolve_chat_client(&settings) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        let message = err.to_string();
        assert!(message.contains("Unknown chat provider"), "unexpected message: {message}");
        assert!(message.contains("openai"), "should list available providers: {message}");
    }

    // A provider whose capability marker is never registered: the entry
    // exists in the slice but the availability guard must reject it.
    #[linkme::distributed_slice(CHAT_PROVIDERS)]
    static UNSATISFIED_CHAT: ChatProviderEntry = ChatProviderEntry {
        name: "unsatisfied-test-entry",
        description: "Entry requiring a capability that is never registered",
        requires: &["capability-that-does-not-exist"],
        factory: |_settings| panic!("factory must not run when the capability is absent"),
    };

    #[test]
    fn entry_with_missing_capability_is_unavailable() {
        assert!(!chat_provider_available("unsatisfied-test-entry"));
    }
}

// ============================================================================
// Embedding Registry Tests - Real Provider Resolution
// ============================================================================

mod embedding_registry_tests {
    use super::*;

    #[test]
    fn null_provider_is_registered() {
        let providers = list_embedding_providers();
        assert!(
            providers.iter().any(|(name, _)| *name == "null"),
            "null provider should be registered. Available: {providers:?}"
        );
    }

    #[tokio::test]
    async fn resolve_null_embedding_provider() {
        let settings = EmbeddingSettings::new("null");
        let client = resolve_embedding_client(&settings).expect("null provider should resolve");

        assert_eq!(client.provider_name(), "null");
        assert_eq!(client.dimensions(), 384);

        let embedding = client.embed("hello").await.unwrap();
        assert_eq!(embedding.vector.len(), 384);
    }

    #[test]
    fn ollama_never_requires_a_key() {
        assert!(embedding_provider_available("ollama"));
        let settings = EmbeddingSettings::new("ollama");
        let client = resolve_embedding_client(&settings).unwrap();
        assert_eq!(client.provider_name(), "ollama");
    }

    #[test]
    fn resolve_unknown_embedding_provider_fails() {
        let settings = EmbeddingSettings::new("nonexistent_provider_xyz");
        let err = match resolve_embedding_client(&settings) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("Unknown embedding provider"));
    }
}

// ============================================================================
// Vector Store Registry Tests - Real Provider Resolution
// ============================================================================

mod vector_store_registry_tests {
    use super::*;

    #[test]
    fn memory_and_elasticsearch_are_registered() {
        let providers = list_vector_store_providers();
        assert!(providers.iter().any(|(name, _)| *name == "memory"));
        assert!(providers.iter().any(|(name, _)| *name == "elasticsearch"));
    }

    #[test]
    fn memory_store_is_available() {
        assert!(vector_store_provider_available("memory"));
    }

    #[tokio::test]
    async fn resolve_memory_store_with_injected_embedding() {
        let settings = VectorStoreSettings::new("memory").with_index_name("test-index");
        let store = resolve_vector_store(&settings, &store_deps()).unwrap();

        assert_eq!(store.provider_name(), "memory");
        assert_eq!(store.index_name(), "test-index");

        store
            .upsert(&[aiwire_domain::value_objects::Document::with_id("d1", "payload")])
            .await
            .unwrap();
        let results = store.similarity_search("payload", 1).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].document.id, "d1");
    }

    #[test]
    fn elasticsearch_store_binds_default_index() {
        let settings = VectorStoreSettings::new("elasticsearch");
        let store = resolve_vector_store(&settings, &store_deps()).unwrap();
        assert_eq!(store.index_name(), "ai-document-index");
    }

    #[test]
    fn resolve_unknown_store_fails_with_listing() {
        let settings = VectorStoreSettings::new("nonexistent_provider_xyz");
        let err = match resolve_vector_store(&settings, &store_deps()) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("Unknown vector store provider"));
    }
}
