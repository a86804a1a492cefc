//! # aiwire-domain
//!
//! Domain layer for aiwire: the error taxonomy, the value objects that
//! travel between integrations, and the port traits that constructed
//! provider clients implement.
//!
//! This crate is dependency-light on purpose. Provider implementations,
//! registration machinery, and configuration binding live in the outer
//! crates and depend on this one, never the other way around.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ChatClient, EmbeddingClient, VectorStore};
pub use value_objects::{ChatCompletion, ChatMessage, ChatRole, Document, Embedding, ScoredDocument};
