pub mod get_document;
pub mod save_document;

pub use get_document::{__path_get_document_handler, get_document_handler, DocumentQuery};
pub use save_document::{__path_save_document_handler, save_document_handler, SaveDocumentRequest};
