pub mod collection_repository;
pub mod singleton_repository;

pub use collection_repository::{CollectionRepository, CollectionRepositoryError};
pub use singleton_repository::{SingletonRepository, SingletonRepositoryError};
