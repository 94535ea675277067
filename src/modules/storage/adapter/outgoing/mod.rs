pub mod document_store_fs;
pub mod document_store_memory;

pub use document_store_fs::FsDocumentStore;
pub use document_store_memory::InMemoryDocumentStore;
