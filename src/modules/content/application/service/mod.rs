pub mod collection_service;
pub mod singleton_service;

pub use collection_service::CollectionService;
pub use singleton_service::SingletonService;
