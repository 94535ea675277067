use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::{
    require_non_blank, CollectionEntity, EntityMeta, Validate, ValidationError,
};
use crate::modules::storage::application::ports::outgoing::DocumentKey;
use crate::shared::patch::PatchField;

/// Category values offered by the admin form. Any other string is accepted.
pub const PROJECT_CATEGORIES: [&str; 6] =
    ["Web", "Mobile", "AI/ML", "Data Science", "Automation", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContribution {
    #[schema(example = "Backend API")]
    pub area: String,
    /// Share of the work in this area, 0 to 100.
    #[schema(example = 80)]
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLink {
    /// `github`, `demo`, `video` or `other`.
    #[serde(rename = "type")]
    #[schema(example = "github")]
    pub kind: String,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<ProjectContribution>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrospective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    #[schema(example = "Chatbot automation")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detail_description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub contributions: Option<Vec<ProjectContribution>>,
    #[serde(default)]
    pub results: Option<Vec<String>>,
    #[serde(default)]
    pub links: Option<Vec<ProjectLink>>,
    #[serde(default)]
    pub retrospective: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub detail_description: PatchField<String>,
    #[serde(default)]
    pub tech_stack: PatchField<Vec<String>>,
    #[serde(default)]
    pub image_url: PatchField<String>,
    #[serde(default)]
    pub images: PatchField<Vec<String>>,
    #[serde(default)]
    pub start_date: PatchField<String>,
    #[serde(default)]
    pub end_date: PatchField<String>,
    #[serde(default)]
    pub role: PatchField<String>,
    #[serde(default)]
    pub contributions: PatchField<Vec<ProjectContribution>>,
    #[serde(default)]
    pub results: PatchField<Vec<String>>,
    #[serde(default)]
    pub links: PatchField<Vec<ProjectLink>>,
    #[serde(default)]
    pub retrospective: PatchField<String>,
    #[serde(default)]
    pub tags: PatchField<Vec<String>>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub order: PatchField<u32>,
}

impl Validate for Project {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("title", &self.title)?;

        if let Some(contributions) = &self.contributions {
            if let Some(bad) = contributions.iter().find(|c| c.percentage > 100) {
                return Err(ValidationError::new(
                    "contributions",
                    format!("percentage for '{}' must be between 0 and 100", bad.area),
                ));
            }
        }

        Ok(())
    }
}

impl CollectionEntity for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

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

    fn from_draft(meta: EntityMeta, draft: ProjectDraft) -> Self {
        Self {
            id: meta.id,
            title: draft.title,
            description: draft.description,
            detail_description: draft.detail_description,
            tech_stack: draft.tech_stack,
            image_url: draft.image_url,
            images: draft.images,
            start_date: draft.start_date,
            end_date: draft.end_date,
            role: draft.role,
            contributions: draft.contributions,
            results: draft.results,
            links: draft.links,
            retrospective: draft.retrospective,
            tags: draft.tags,
            category: draft.category,
            order: meta.order,
            created_at: meta.created_at,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        patch.title.apply_to(&mut self.title);
        patch.description.apply_to(&mut self.description);
        patch
            .detail_description
            .apply_to_option(&mut self.detail_description);
        patch.tech_stack.apply_to(&mut self.tech_stack);
        patch.image_url.apply_to(&mut self.image_url);
        patch.images.apply_to_option(&mut self.images);
        patch.start_date.apply_to_option(&mut self.start_date);
        patch.end_date.apply_to_option(&mut self.end_date);
        patch.role.apply_to_option(&mut self.role);
        patch.contributions.apply_to_option(&mut self.contributions);
        patch.results.apply_to_option(&mut self.results);
        patch.links.apply_to_option(&mut self.links);
        patch.retrospective.apply_to_option(&mut self.retrospective);
        patch.tags.apply_to_option(&mut self.tags);
        patch.category.apply_to_option(&mut self.category);
        patch.order.apply_to(&mut self.order);
    }
}
