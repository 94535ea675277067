mod collection_use_case;
mod singleton_use_case;

pub use collection_use_case::{CollectionUseCase, CollectionUseCaseError};
pub use singleton_use_case::{SingletonUseCase, SingletonUseCaseError};
