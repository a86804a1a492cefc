//! Capability Markers
//!
//! Presence markers this crate advertises to the capability probe. Each
//! marker states that a client facility is compiled into the process;
//! disabling the matching cargo feature removes the marker and with it
//! every integration that requires it.

use aiwire_registry::{CAPABILITIES, Capability};

#[linkme::distributed_slice(CAPABILITIES)]
static HTTP_TRANSPORT: Capability = Capability {
    name: "http-transport",
    description: "Generic HTTP transport client",
};

#[cfg(any(feature = "chat-openai", feature = "embedding-openai"))]
#[linkme::distributed_slice(CAPABILITIES)]
static OPENAI_CLIENT: Capability = Capability {
    name: "openai-client",
    description: "OpenAI-compatible API client",
};

#[cfg(feature = "chat-huggingface")]
#[linkme::distributed_slice(CAPABILITIES)]
static HUGGINGFACE_CLIENT: Capability = Capability {
    name: "huggingface-client",
    description: "Hugging Face inference API client",
};

#[cfg(feature = "embedding-ollama")]
#[linkme::distributed_slice(CAPABILITIES)]
static OLLAMA_CLIENT: Capability = Capability {
    name: "ollama-client",
    description: "Ollama local inference client",
};

#[cfg(feature = "vectorstore-elasticsearch")]
#[linkme::distributed_slice(CAPABILITIES)]
static ELASTICSEARCH_CLIENT: Capability = Capability {
    name: "elasticsearch-client",
    description: "Elasticsearch REST API client",
};
