use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::modules::storage::application::ports::outgoing::DocumentKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Field rules checked before anything is written.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, "must not be blank"))
    } else {
        Ok(())
    }
}

/// Identity assigned by the repository when an entity is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMeta {
    pub id: String,
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

/// An entity stored inside an ordered collection document.
///
/// `Draft` carries the caller-supplied fields of a new entity; `Patch` is a
/// partial update in which every field may be left unset.
pub trait CollectionEntity:
    Clone + Serialize + DeserializeOwned + Validate + Send + Sync + 'static
{
    type Draft: DeserializeOwned + Send + Sync + 'static;
    type Patch: DeserializeOwned + Default + Send + Sync + 'static;

    /// Document holding the whole collection.
    const KEY: DocumentKey;

    fn id(&self) -> &str;
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
    fn created_at(&self) -> DateTime<Utc>;

    fn from_draft(meta: EntityMeta, draft: Self::Draft) -> Self;

    /// Shallow merge. `id` and `created_at` are never touched.
    fn apply_patch(&mut self, patch: Self::Patch);
}
