use async_trait::async_trait;

use crate::modules::content::application::domain::CollectionEntity;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionUseCaseError {
    #[error("Entity not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CollectionUseCase<T: CollectionEntity>: Send + Sync {
    /// Stored order of the array, unsorted.
    async fn list(&self) -> Result<Vec<T>, CollectionUseCaseError>;

    /// Display order: ascending `order`, ties by array position.
    async fn list_sorted(&self) -> Result<Vec<T>, CollectionUseCaseError>;

    async fn create(&self, draft: T::Draft) -> Result<T, CollectionUseCaseError>;

    async fn update(&self, id: &str, patch: T::Patch) -> Result<T, CollectionUseCaseError>;

    /// `Ok(false)` when nothing matched.
    async fn delete(&self, id: &str) -> Result<bool, CollectionUseCaseError>;

    async fn reorder(&self, ids: Vec<String>) -> Result<(), CollectionUseCaseError>;

    /// Moves one entity to `position` in display order and returns the
    /// resulting id sequence.
    async fn move_to(&self, id: &str, position: usize)
        -> Result<Vec<String>, CollectionUseCaseError>;
}
