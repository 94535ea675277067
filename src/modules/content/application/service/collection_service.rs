use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;

use crate::modules::content::application::domain::ordering::{move_id, sort_by_order};
use crate::modules::content::application::domain::CollectionEntity;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionUseCase, CollectionUseCaseError,
};
use crate::modules::content::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError,
};

impl From<CollectionRepositoryError> for CollectionUseCaseError {
    fn from(e: CollectionRepositoryError) -> Self {
        match e {
            CollectionRepositoryError::NotFound => CollectionUseCaseError::NotFound,
            CollectionRepositoryError::Validation(msg) => CollectionUseCaseError::Validation(msg),
            CollectionRepositoryError::StoreUnavailable(msg) => {
                CollectionUseCaseError::StoreUnavailable(msg)
            }
            CollectionRepositoryError::MalformedDocument(msg) => {
                CollectionUseCaseError::MalformedDocument(msg)
            }
            CollectionRepositoryError::SerializationError(msg) => {
                CollectionUseCaseError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CollectionService<T, R>
where
    T: CollectionEntity,
    R: CollectionRepository<T>,
{
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> CollectionService<T, R>
where
    T: CollectionEntity,
    R: CollectionRepository<T>,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> CollectionUseCase<T> for CollectionService<T, R>
where
    T: CollectionEntity,
    R: CollectionRepository<T> + Send + Sync,
{
    async fn list(&self) -> Result<Vec<T>, CollectionUseCaseError> {
        Ok(self.repository.list().await?)
    }

    async fn list_sorted(&self) -> Result<Vec<T>, CollectionUseCaseError> {
        let mut items = self.repository.list().await?;
        sort_by_order(&mut items);
        Ok(items)
    }

    async fn create(&self, draft: T::Draft) -> Result<T, CollectionUseCaseError> {
        let created = self.repository.create(draft).await?;
        let key = T::KEY;
        info!(key = %key, id = created.id(), order = created.order(), "entity created");
        Ok(created)
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<T, CollectionUseCaseError> {
        let updated = self.repository.update(id, patch).await?;
        let key = T::KEY;
        info!(key = %key, id, "entity updated");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, CollectionUseCaseError> {
        let removed = self.repository.delete(id).await?;
        let key = T::KEY;
        info!(key = %key, id, removed, "entity delete requested");
        Ok(removed)
    }

    async fn reorder(&self, ids: Vec<String>) -> Result<(), CollectionUseCaseError> {
        self.repository.reorder(&ids).await?;
        let key = T::KEY;
        info!(key = %key, count = ids.len(), "collection reordered");
        Ok(())
    }

    async fn move_to(
        &self,
        id: &str,
        position: usize,
    ) -> Result<Vec<String>, CollectionUseCaseError> {
        let mut items = self.repository.list().await?;
        sort_by_order(&mut items);

        let current: Vec<String> = items.iter().map(|item| item.id().to_string()).collect();
        let ids = move_id(&current, id, position).ok_or(CollectionUseCaseError::NotFound)?;

        self.repository.reorder(&ids).await?;
        let key = T::KEY;
        info!(key = %key, id, position, "entity moved");

        Ok(ids)
    }
}
