// src/modules/content/application/ports/outgoing/singleton_repository.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SingletonRepositoryError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// One-off document with no list semantics.
#[async_trait]
pub trait SingletonRepository<T>: Send + Sync
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// `None` when the document is absent or unreadable as `T`.
    async fn find(&self) -> Result<Option<T>, SingletonRepositoryError>;

    /// Stored value, or the repository's default when absent.
    async fn get(&self) -> Result<T, SingletonRepositoryError>;

    /// Whole-document overwrite.
    async fn set(&self, value: T) -> Result<(), SingletonRepositoryError>;
}
