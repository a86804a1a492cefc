//! # aiwire-registry
//!
//! Auto-registration infrastructure for provider integrations. Uses the
//! `linkme` crate for compile-time registration of providers that are
//! discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(CHAT_...)]   │
//! │                        static ENTRY: ChatProviderEntry = ...    │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static CHAT_PROVIDERS: [Entry]       │
//! │                              ↓                                  │
//! │  3. Guard checks:      enabled flag + capability markers        │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = openai" → OpenAiChatClient   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each entry names the capability markers it requires. A capability is
//! registered only when the corresponding provider feature is compiled
//! in, which is how "the SDK is linked into this process" is probed
//! without ever instantiating anything.
//!
//! ## Usage
//!
//! ### Registering a provider (in aiwire-providers)
//!
//! ```ignore
//! use aiwire_registry::{ChatProviderEntry, CHAT_PROVIDERS};
//!
//! #[linkme::distributed_slice(CHAT_PROVIDERS)]
//! static OPENAI_CHAT: ChatProviderEntry = ChatProviderEntry {
//!     name: "openai",
//!     description: "OpenAI chat completions",
//!     requires: &["openai-client"],
//!     factory: |settings| Ok(Arc::new(OpenAiChatClient::from_settings(settings)?)),
//! };
//! ```
//!
//! ### Resolving a provider (in aiwire-infrastructure)
//!
//! ```ignore
//! use aiwire_registry::{resolve_chat_client, ChatSettings};
//!
//! let settings = ChatSettings::new("openai").with_api_key("sk-...");
//! let client = resolve_chat_client(&settings)?;
//! ```

pub mod capability;
pub mod chat;
pub mod embedding;
pub mod vector_store;

pub use capability::{
    Capability, CAPABILITIES, capabilities_present, has_capability, list_capabilities,
};
pub use chat::{
    CHAT_PROVIDERS, ChatProviderEntry, ChatSettings, chat_provider_available, find_chat_entry,
    list_chat_providers, resolve_chat_client,
};
pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderEntry, EmbeddingSettings, embedding_provider_available,
    find_embedding_entry, list_embedding_providers, resolve_embedding_client,
};
pub use vector_store::{
    VECTOR_STORE_PROVIDERS, VectorStoreDeps, VectorStoreProviderEntry, VectorStoreSettings,
    find_vector_store_entry, list_vector_store_providers, resolve_vector_store,
    vector_store_provider_available,
};

/// Default request timeout applied when configuration leaves it unset
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
