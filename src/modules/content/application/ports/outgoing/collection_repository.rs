// src/modules/content/application/ports/outgoing/collection_repository.rs

use async_trait::async_trait;

use crate::modules::content::application::domain::CollectionEntity;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionRepositoryError {
    /// No entity with the requested id.
    #[error("Entity not found")]
    NotFound,

    /// The entity breaks a field rule; nothing was written.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The stored document does not decode as this collection; mutations
    /// refuse to overwrite it.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Ordered collection of one entity type, persisted as a single document.
///
/// Every mutating call is one read-modify-write round trip that replaces
/// the whole document. Separate calls are not atomic with each other.
#[async_trait]
pub trait CollectionRepository<T: CollectionEntity>: Send + Sync {
    /// Raw stored array, not sorted. Absent or malformed documents are empty.
    /// Mutations over a malformed document fail with `MalformedDocument`
    /// and write nothing.
    async fn list(&self) -> Result<Vec<T>, CollectionRepositoryError>;

    /// Assigns a fresh id, `created_at = now` and `order = len`, then appends.
    async fn create(&self, draft: T::Draft) -> Result<T, CollectionRepositoryError>;

    /// `NotFound` without writing when `id` is absent.
    async fn update(&self, id: &str, patch: T::Patch) -> Result<T, CollectionRepositoryError>;

    /// `Ok(false)` without writing when `id` is absent. Survivors keep their
    /// order values.
    async fn delete(&self, id: &str) -> Result<bool, CollectionRepositoryError>;

    /// Order becomes the position in `ids`; unlisted entities keep theirs.
    async fn reorder(&self, ids: &[String]) -> Result<(), CollectionRepositoryError>;
}
