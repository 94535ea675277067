use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::{
    require_non_blank, CollectionEntity, EntityMeta, Validate, ValidationError,
};
use crate::modules::storage::application::ports::outgoing::DocumentKey;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    /// Free text, e.g. `2022.03 - present`.
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    /// Display order is array order.
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    #[schema(example = "Acme Corp")]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    #[serde(default)]
    pub company: PatchField<String>,
    #[serde(default)]
    pub position: PatchField<String>,
    #[serde(default)]
    pub period: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub achievements: PatchField<Vec<String>>,
    #[serde(default)]
    pub order: PatchField<u32>,
}

impl Validate for Experience {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("company", &self.company)
    }
}

impl CollectionEntity for Experience {
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;

    const KEY: DocumentKey = DocumentKey::Experiences;

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

    fn from_draft(meta: EntityMeta, draft: ExperienceDraft) -> Self {
        Self {
            id: meta.id,
            company: draft.company,
            position: draft.position,
            period: draft.period,
            description: draft.description,
            achievements: draft.achievements,
            order: meta.order,
            created_at: meta.created_at,
        }
    }

    fn apply_patch(&mut self, patch: ExperiencePatch) {
        patch.company.apply_to(&mut self.company);
        patch.position.apply_to(&mut self.position);
        patch.period.apply_to(&mut self.period);
        patch.description.apply_to(&mut self.description);
        patch.achievements.apply_to(&mut self.achievements);
        patch.order.apply_to(&mut self.order);
    }
}
