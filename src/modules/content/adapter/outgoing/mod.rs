pub mod collection_repository_document;
pub mod singleton_repository_document;

pub use collection_repository_document::DocumentCollectionRepository;
pub use singleton_repository_document::DocumentSingletonRepository;
