//! Provider Constants
//!
//! Constants specific to provider implementations. Hosted default
//! endpoints live here because the mandatory-credential policy is keyed
//! off them: a request aimed at the vendor's cloud host demands an API
//! key, a self-hosted deployment does not.

// ============================================================================
// OPENAI CONSTANTS
// ============================================================================

/// OpenAI hosted API host (key is mandatory when targeting it)
pub const OPENAI_HOSTED_HOST: &str = "api.openai.com";

/// OpenAI default base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI default chat model
pub const OPENAI_DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// OpenAI default embedding model
pub const OPENAI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimension
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimension
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

// ============================================================================
// OLLAMA CONSTANTS
// ============================================================================

/// Ollama default server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama default embedding model
pub const OLLAMA_DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text";

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama all-minilm dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MINILM: usize = 384;

/// Ollama mxbai-embed-large dimension
pub const EMBEDDING_DIMENSION_OLLAMA_MXBAI: usize = 1024;

/// Ollama default dimension
pub const EMBEDDING_DIMENSION_OLLAMA_DEFAULT: usize = 768;

// ============================================================================
// NULL PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (for testing)
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

// ============================================================================
// VECTOR STORE CONSTANTS
// ============================================================================

/// Default index name used when configuration leaves it unset
pub const DEFAULT_INDEX_NAME: &str = "ai-document-index";

/// Elasticsearch default server URL
pub const ELASTICSEARCH_DEFAULT_URL: &str = "http://localhost:9200";

// ============================================================================
// SHARED CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
