use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::modules::content::application::ports::outgoing::{
    SingletonRepository, SingletonRepositoryError,
};
use crate::modules::storage::application::ports::outgoing::{
    DocumentKey, DocumentStore, DocumentStoreError,
};

/// Singleton document with a fallback value for when nothing is stored.
pub struct DocumentSingletonRepository<T> {
    store: Arc<dyn DocumentStore + Send + Sync>,
    key: DocumentKey,
    default: T,
}

impl<T: Clone> Clone for DocumentSingletonRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key,
            default: self.default.clone(),
        }
    }
}

impl<T> DocumentSingletonRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore + Send + Sync>, key: DocumentKey, default: T) -> Self {
        Self {
            store,
            key,
            default,
        }
    }
}

#[async_trait]
impl<T> SingletonRepository<T> for DocumentSingletonRepository<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn find(&self) -> Result<Option<T>, SingletonRepositoryError> {
        let document = match self.store.read(self.key).await {
            Ok(Some(document)) => document,
            Ok(None) => return Ok(None),
            Err(DocumentStoreError::Malformed { key, message }) => {
                warn!(key = %key, "malformed document treated as absent: {}", message);
                return Ok(None);
            }
            Err(DocumentStoreError::Unavailable(msg)) => {
                return Err(SingletonRepositoryError::StoreUnavailable(msg))
            }
        };

        match serde_json::from_value::<T>(document) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                let key = self.key;
                warn!(key = %key, "document does not match expected shape, treated as absent: {}", e);
                Ok(None)
            }
        }
    }

    async fn get(&self) -> Result<T, SingletonRepositoryError> {
        Ok(self.find().await?.unwrap_or_else(|| self.default.clone()))
    }

    async fn set(&self, value: T) -> Result<(), SingletonRepositoryError> {
        let document = serde_json::to_value(&value)
            .map_err(|e| SingletonRepositoryError::SerializationError(e.to_string()))?;

        self.store
            .write(self.key, document)
            .await
            .map_err(|e| SingletonRepositoryError::StoreUnavailable(e.to_string()))
    }
}
