pub mod document_store;

pub use document_store::{DocumentKey, DocumentStore, DocumentStoreError, UnknownDocumentKey};
