//! Vector Store Document Value Objects

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Value Object: a unit of content stored in a vector store
///
/// A document carries the raw text plus arbitrary JSON metadata. The
/// store is responsible for embedding the content before persisting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier
    pub id: String,
    /// Raw text content
    pub content: String,
    /// Arbitrary metadata attached to the document
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a document with a generated identifier
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Create a document with a caller-chosen identifier
    pub fn with_id(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Value Object: ranked result from a similarity search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// The matched document
    pub document: Document,
    /// Similarity score, higher is closer
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_distinct_ids() {
        let a = Document::new("alpha");
        let b = Document::new("alpha");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn with_metadata_accumulates() {
        let doc = Document::with_id("d1", "text")
            .with_metadata("source", serde_json::json!("unit-test"))
            .with_metadata("page", serde_json::json!(3));
        assert_eq!(doc.metadata.len(), 2);
        assert_eq!(doc.metadata["source"], serde_json::json!("unit-test"));
    }
}
