//! Chat Provider Implementations
//!
//! Turns conversations into model completions. Each provider offers
//! different tradeoffs between quality, cost, and deployment model.
//!
//! ## Available Providers
//!
//! | Provider | Type | Credential Policy |
//! |----------|------|-------------------|
//! | OpenAiChatClient | Cloud / self-hosted | Key mandatory on the hosted host |
//! | HuggingFaceChatClient | Cloud / self-hosted | URL mandatory, key optional |

#[cfg(feature = "chat-huggingface")]
pub mod huggingface;
#[cfg(feature = "chat-openai")]
pub mod openai;

#[cfg(feature = "chat-huggingface")]
pub use huggingface::HuggingFaceChatClient;
#[cfg(feature = "chat-openai")]
pub use openai::OpenAiChatClient;
