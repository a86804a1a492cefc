//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ChatMessage`] | A single turn in a chat conversation |
//! | [`ChatCompletion`] | Model output for a chat request |
//! | [`Embedding`] | Vector representation of text |
//! | [`Document`] | A unit of content stored in a vector store |
//! | [`ScoredDocument`] | Ranked result from a similarity search |

/// Chat conversation value objects
pub mod chat;
/// Vector store document value objects
pub mod document;
/// Semantic embedding value objects
pub mod embedding;

pub use chat::{ChatCompletion, ChatMessage, ChatRole};
pub use document::{Document, ScoredDocument};
pub use embedding::Embedding;
