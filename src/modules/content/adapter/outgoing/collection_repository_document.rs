use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::content::application::domain::ordering::apply_order;
use crate::modules::content::application::domain::{CollectionEntity, EntityMeta};
use crate::modules::content::application::ports::outgoing::{
    CollectionRepository, CollectionRepositoryError,
};
use crate::modules::storage::application::ports::outgoing::{DocumentStore, DocumentStoreError};

/// Collection repository over the `T::KEY` document of a [`DocumentStore`].
pub struct DocumentCollectionRepository<T> {
    store: Arc<dyn DocumentStore + Send + Sync>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentCollectionRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<T: CollectionEntity> DocumentCollectionRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore + Send + Sync>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Read path: anything that does not decode reads as empty.
    async fn load(&self) -> Result<Vec<T>, CollectionRepositoryError> {
        match self.load_for_write().await {
            Err(CollectionRepositoryError::MalformedDocument(message)) => {
                let key = T::KEY;
                warn!(key = %key, "malformed document treated as empty: {}", message);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Write path: a document that does not decode is never overwritten.
    async fn load_for_write(&self) -> Result<Vec<T>, CollectionRepositoryError> {
        let document = match self.store.read(T::KEY).await {
            Ok(Some(document)) => document,
            Ok(None) => return Ok(Vec::new()),
            Err(DocumentStoreError::Malformed { message, .. }) => {
                return Err(CollectionRepositoryError::MalformedDocument(message))
            }
            Err(DocumentStoreError::Unavailable(msg)) => {
                return Err(CollectionRepositoryError::StoreUnavailable(msg))
            }
        };

        serde_json::from_value::<Vec<T>>(document)
            .map_err(|e| CollectionRepositoryError::MalformedDocument(e.to_string()))
    }

    async fn save(&self, items: &[T]) -> Result<(), CollectionRepositoryError> {
        let document = serde_json::to_value(items)
            .map_err(|e| CollectionRepositoryError::SerializationError(e.to_string()))?;

        self.store
            .write(T::KEY, document)
            .await
            .map_err(|e| CollectionRepositoryError::StoreUnavailable(e.to_string()))?;

        let key = T::KEY;
        debug!(key = %key, count = items.len(), "collection saved");
        Ok(())
    }

    fn fresh_id(items: &[T]) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !items.iter().any(|item| item.id() == id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl<T: CollectionEntity> CollectionRepository<T> for DocumentCollectionRepository<T> {
    async fn list(&self) -> Result<Vec<T>, CollectionRepositoryError> {
        self.load().await
    }

    async fn create(&self, draft: T::Draft) -> Result<T, CollectionRepositoryError> {
        let mut items = self.load_for_write().await?;

        let meta = EntityMeta {
            id: Self::fresh_id(&items),
            order: u32::try_from(items.len()).unwrap_or(u32::MAX),
            created_at: Utc::now(),
        };
        let entity = T::from_draft(meta, draft);
        entity
            .validate()
            .map_err(|e| CollectionRepositoryError::Validation(e.to_string()))?;

        items.push(entity.clone());
        self.save(&items).await?;

        Ok(entity)
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<T, CollectionRepositoryError> {
        let mut items = self.load_for_write().await?;

        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(CollectionRepositoryError::NotFound)?;

        let mut updated = items[index].clone();
        updated.apply_patch(patch);
        updated
            .validate()
            .map_err(|e| CollectionRepositoryError::Validation(e.to_string()))?;

        items[index] = updated.clone();
        self.save(&items).await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, CollectionRepositoryError> {
        let mut items = self.load_for_write().await?;
        let before = items.len();

        items.retain(|item| item.id() != id);

        if items.len() == before {
            return Ok(false);
        }

        self.save(&items).await?;
        Ok(true)
    }

    async fn reorder(&self, ids: &[String]) -> Result<(), CollectionRepositoryError> {
        let mut items = self.load_for_write().await?;

        apply_order(&mut items, ids);

        self.save(&items).await
    }
}
