use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::application::domain::{
    require_non_blank, CollectionEntity, EntityMeta, Validate, ValidationError,
};
use crate::modules::storage::application::ports::outgoing::DocumentKey;
use crate::shared::patch::PatchField;

/// Minimal collection entity for exercising the generic content layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestItemDraft {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TestItemPatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub note: PatchField<String>,
}

impl Validate for TestItem {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("title", &self.title)
    }
}

impl CollectionEntity for TestItem {
    type Draft = TestItemDraft;
    type Patch = TestItemPatch;

    const KEY: DocumentKey = DocumentKey::Projects;

    fn id(&self) -> &str {
        &self.id
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(meta: EntityMeta, draft: TestItemDraft) -> Self {
        Self {
            id: meta.id,
            title: draft.title,
            note: None,
            order: meta.order,
            created_at: meta.created_at,
        }
    }

    fn apply_patch(&mut self, patch: TestItemPatch) {
        patch.title.apply_to(&mut self.title);
        patch.note.apply_to_option(&mut self.note);
    }
}

pub fn draft(title: &str) -> TestItemDraft {
    TestItemDraft {
        title: title.to_string(),
    }
}

pub fn item(id: &str, order: u32) -> TestItem {
    TestItem {
        id: id.to_string(),
        title: id.to_uppercase(),
        note: None,
        order,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn ids_of<T: CollectionEntity>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}
