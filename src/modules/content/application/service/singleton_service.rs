use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::modules::content::application::domain::Validate;
use crate::modules::content::application::ports::incoming::use_cases::{
    SingletonUseCase, SingletonUseCaseError,
};
use crate::modules::content::application::ports::outgoing::{
    SingletonRepository, SingletonRepositoryError,
};

impl From<SingletonRepositoryError> for SingletonUseCaseError {
    fn from(e: SingletonRepositoryError) -> Self {
        match e {
            SingletonRepositoryError::StoreUnavailable(msg) => {
                SingletonUseCaseError::StoreUnavailable(msg)
            }
            SingletonRepositoryError::SerializationError(msg) => {
                SingletonUseCaseError::RepositoryError(msg)
            }
        }
    }
}

pub struct SingletonService<T, R>
where
    R: SingletonRepository<T>,
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    repository: R,
    _value: PhantomData<fn() -> T>,
}

impl<T, R> SingletonService<T, R>
where
    R: SingletonRepository<T>,
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _value: PhantomData,
        }
    }
}

#[async_trait]
impl<T, R> SingletonUseCase<T> for SingletonService<T, R>
where
    R: SingletonRepository<T> + Send + Sync,
    T: Serialize + DeserializeOwned + Clone + Validate + Send + Sync + 'static,
{
    async fn get(&self) -> Result<T, SingletonUseCaseError> {
        Ok(self.repository.get().await?)
    }

    async fn set(&self, value: T) -> Result<T, SingletonUseCaseError> {
        value
            .validate()
            .map_err(|e| SingletonUseCaseError::Validation(e.to_string()))?;

        self.repository.set(value.clone()).await?;
        info!("singleton document replaced");
        Ok(value)
    }

    async fn ensure_initialized(&self) -> Result<bool, SingletonUseCaseError> {
        if self.repository.find().await?.is_some() {
            return Ok(false);
        }

        let default = self.repository.get().await?;
        self.repository.set(default).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde::Deserialize;

    use crate::modules::content::adapter::outgoing::DocumentSingletonRepository;
    use crate::modules::content::application::domain::{require_non_blank, ValidationError};
    use crate::modules::storage::adapter::outgoing::InMemoryDocumentStore;
    use crate::modules::storage::application::ports::outgoing::DocumentKey;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Banner {
        headline: String,
    }

    impl Validate for Banner {
        fn validate(&self) -> Result<(), ValidationError> {
            require_non_blank("headline", &self.headline)
        }
    }

    fn banner(headline: &str) -> Banner {
        Banner {
            headline: headline.to_string(),
        }
    }

    fn service(
        store: &InMemoryDocumentStore,
    ) -> SingletonService<Banner, DocumentSingletonRepository<Banner>> {
        SingletonService::new(DocumentSingletonRepository::new(
            Arc::new(store.clone()),
            DocumentKey::About,
            banner("Default"),
        ))
    }

    #[tokio::test]
    async fn set_rejects_invalid_value_without_write() {
        let store = InMemoryDocumentStore::new();

        let err = service(&store).set(banner(" ")).await.unwrap_err();

        assert!(matches!(err, SingletonUseCaseError::Validation(_)));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = InMemoryDocumentStore::new();
        let service = service(&store);

        service.set(banner("Hi")).await.unwrap();

        assert_eq!(service.get().await.unwrap(), banner("Hi"));
    }

    #[tokio::test]
    async fn ensure_initialized_writes_default_once() {
        let store = InMemoryDocumentStore::new();
        let service = service(&store);

        assert!(service.ensure_initialized().await.unwrap());
        assert!(!service.ensure_initialized().await.unwrap());

        assert_eq!(store.write_count(), 1);
        assert_eq!(service.get().await.unwrap(), banner("Default"));
    }
}
