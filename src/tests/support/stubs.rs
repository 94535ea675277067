use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::about::application::domain::About;
use crate::modules::content::application::domain::CollectionEntity;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionUseCase, CollectionUseCaseError, SingletonUseCase, SingletonUseCaseError,
};
use crate::modules::storage::application::ports::outgoing::{
    DocumentKey, DocumentStore, DocumentStoreError,
};

/// Collection use case whose every call fails with the same error.
pub struct FailingCollectionUseCase<T> {
    error: CollectionUseCaseError,
    _entity: PhantomData<fn() -> T>,
}

impl<T> FailingCollectionUseCase<T> {
    pub fn new(error: CollectionUseCaseError) -> Self {
        Self {
            error,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: CollectionEntity> CollectionUseCase<T> for FailingCollectionUseCase<T> {
    async fn list(&self) -> Result<Vec<T>, CollectionUseCaseError> {
        Err(self.error.clone())
    }

    async fn list_sorted(&self) -> Result<Vec<T>, CollectionUseCaseError> {
        Err(self.error.clone())
    }

    async fn create(&self, _draft: T::Draft) -> Result<T, CollectionUseCaseError> {
        Err(self.error.clone())
    }

    async fn update(&self, _id: &str, _patch: T::Patch) -> Result<T, CollectionUseCaseError> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: &str) -> Result<bool, CollectionUseCaseError> {
        Err(self.error.clone())
    }

    async fn reorder(&self, _ids: Vec<String>) -> Result<(), CollectionUseCaseError> {
        Err(self.error.clone())
    }

    async fn move_to(
        &self,
        _id: &str,
        _position: usize,
    ) -> Result<Vec<String>, CollectionUseCaseError> {
        Err(self.error.clone())
    }
}

#[derive(Clone)]
pub struct FailingAboutUseCase {
    error: SingletonUseCaseError,
}

impl FailingAboutUseCase {
    pub fn new(error: SingletonUseCaseError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl SingletonUseCase<About> for FailingAboutUseCase {
    async fn get(&self) -> Result<About, SingletonUseCaseError> {
        Err(self.error.clone())
    }

    async fn set(&self, _value: About) -> Result<About, SingletonUseCaseError> {
        Err(self.error.clone())
    }

    async fn ensure_initialized(&self) -> Result<bool, SingletonUseCaseError> {
        Err(self.error.clone())
    }
}

/// Document store that cannot be reached.
#[derive(Default, Clone)]
pub struct UnavailableDocumentStore;

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    async fn read(&self, _key: DocumentKey) -> Result<Option<Value>, DocumentStoreError> {
        Err(DocumentStoreError::Unavailable("store offline".to_string()))
    }

    async fn write(&self, _key: DocumentKey, _document: Value) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable("store offline".to_string()))
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable("store offline".to_string()))
    }
}
