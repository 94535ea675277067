pub mod entities;
pub mod ordering;

pub use entities::{require_non_blank, CollectionEntity, EntityMeta, Validate, ValidationError};
