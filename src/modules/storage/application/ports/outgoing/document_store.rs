// src/modules/storage/application/ports/outgoing/document_store.rs

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Document keys
// ──────────────────────────────────────────────────────────
//

/// Every document the site persists. One JSON document per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKey {
    About,
    Projects,
    Experiences,
    Skills,
    Awards,
}

impl DocumentKey {
    pub const ALL: [DocumentKey; 5] = [
        DocumentKey::About,
        DocumentKey::Projects,
        DocumentKey::Experiences,
        DocumentKey::Skills,
        DocumentKey::Awards,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKey::About => "about",
            DocumentKey::Projects => "projects",
            DocumentKey::Experiences => "experiences",
            DocumentKey::Skills => "skills",
            DocumentKey::Awards => "awards",
        }
    }

    /// Collections are stored as JSON arrays; `about` is a single object.
    pub fn is_collection(&self) -> bool {
        !matches!(self, DocumentKey::About)
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentKey(pub String);

impl FromStr for DocumentKey {
    type Err = UnknownDocumentKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownDocumentKey(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentStoreError {
    /// Storage could not be reached or the I/O failed.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The stored bytes are not valid JSON.
    #[error("Malformed document '{key}': {message}")]
    Malformed { key: DocumentKey, message: String },
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Type-keyed JSON document persistence.
///
/// Writes always replace the whole document. There is no concurrency
/// control: concurrent writers to one key are last-write-wins.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// A key that was never written is `Ok(None)`, not an error.
    async fn read(&self, key: DocumentKey) -> Result<Option<Value>, DocumentStoreError>;

    async fn write(&self, key: DocumentKey, document: Value) -> Result<(), DocumentStoreError>;

    /// Readiness check for the backing storage.
    async fn ping(&self) -> Result<(), DocumentStoreError>;
}
