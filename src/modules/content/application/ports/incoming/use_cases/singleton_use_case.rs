use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SingletonUseCaseError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SingletonUseCase<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Never fails for a missing document; the default is returned instead.
    async fn get(&self) -> Result<T, SingletonUseCaseError>;

    /// Replaces the whole record.
    async fn set(&self, value: T) -> Result<T, SingletonUseCaseError>;

    /// Persists the default when nothing is stored. Returns whether it wrote.
    async fn ensure_initialized(&self) -> Result<bool, SingletonUseCaseError>;
}
