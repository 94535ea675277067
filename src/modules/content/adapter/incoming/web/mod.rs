pub mod collection_resource;
pub mod routes;

pub use collection_resource::{collection_error_response, CollectionResource};
pub use routes::configure_collection;
