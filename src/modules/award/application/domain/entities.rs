use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::{
    require_non_blank, CollectionEntity, EntityMeta, Validate, ValidationError,
};
use crate::modules::storage::application::ports::outgoing::DocumentKey;
use crate::shared::patch::PatchField;

/// Stored lowercase. Older documents use Korean labels, which are mapped on
/// read; anything unrecognised becomes `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AwardCategory {
    Award,
    Certificate,
    Education,
    #[default]
    Other,
}

impl From<String> for AwardCategory {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "award" | "수상" => AwardCategory::Award,
            "certificate" | "자격증" => AwardCategory::Certificate,
            "education" | "교육" => AwardCategory::Education,
            _ => AwardCategory::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: AwardCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwardDraft {
    #[schema(example = "Hackathon grand prize")]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: AwardCategory,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardPatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub organization: PatchField<String>,
    #[serde(default)]
    pub date: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<AwardCategory>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub order: PatchField<u32>,
}

impl Validate for Award {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("title", &self.title)
    }
}

impl CollectionEntity for Award {
    type Draft = AwardDraft;
    type Patch = AwardPatch;

    const KEY: DocumentKey = DocumentKey::Awards;

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

    fn from_draft(meta: EntityMeta, draft: AwardDraft) -> Self {
        Self {
            id: meta.id,
            title: draft.title,
            organization: draft.organization,
            date: draft.date,
            description: draft.description,
            category: draft.category,
            image_url: draft.image_url,
            order: meta.order,
            created_at: meta.created_at,
        }
    }

    fn apply_patch(&mut self, patch: AwardPatch) {
        patch.title.apply_to(&mut self.title);
        patch.organization.apply_to(&mut self.organization);
        patch.date.apply_to(&mut self.date);
        patch.description.apply_to(&mut self.description);
        patch.category.apply_to(&mut self.category);
        patch.image_url.apply_to_option(&mut self.image_url);
        patch.order.apply_to(&mut self.order);
    }
}
