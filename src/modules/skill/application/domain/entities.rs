use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::application::domain::{
    require_non_blank, CollectionEntity, EntityMeta, Validate, ValidationError,
};
use crate::modules::storage::application::ports::outgoing::DocumentKey;
use crate::shared::patch::PatchField;

/// Category values offered by the admin form. Any other string is accepted.
pub const SKILL_CATEGORIES: [&str; 10] = [
    "Programming",
    "Frontend",
    "Backend",
    "Database",
    "DevOps",
    "Cloud",
    "AI/ML",
    "Mobile",
    "Design",
    "Other",
];

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Proficiency scale shown next to a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner = 1,
    Elementary = 2,
    Intermediate = 3,
    UpperIntermediate = 4,
    Advanced = 5,
}

impl SkillLevel {
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Elementary => "Elementary",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::UpperIntermediate => "Upper-intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = ValidationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(SkillLevel::Beginner),
            2 => Ok(SkillLevel::Elementary),
            3 => Ok(SkillLevel::Intermediate),
            4 => Ok(SkillLevel::UpperIntermediate),
            5 => Ok(SkillLevel::Advanced),
            _ => Err(ValidationError::new(
                "level",
                format!("must be between {MIN_LEVEL} and {MAX_LEVEL}"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// 1 (Beginner) to 5 (Advanced).
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl Skill {
    /// `None` for a stored level outside the scale.
    pub fn level_label(&self) -> Option<&'static str> {
        SkillLevel::try_from(self.level).ok().map(SkillLevel::label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    #[schema(example = "Rust")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "Programming")]
    pub category: String,
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub level: u8,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    #[serde(default)]
    pub name: PatchField<String>,
    #[serde(default)]
    pub category: PatchField<String>,
    #[serde(default)]
    pub level: PatchField<u8>,
    #[serde(default)]
    pub order: PatchField<u32>,
}

impl Validate for Skill {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank("name", &self.name)?;
        SkillLevel::try_from(self.level)?;
        Ok(())
    }
}

impl CollectionEntity for Skill {
    type Draft = SkillDraft;
    type Patch = SkillPatch;

    const KEY: DocumentKey = DocumentKey::Skills;

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

    fn from_draft(meta: EntityMeta, draft: SkillDraft) -> Self {
        Self {
            id: meta.id,
            name: draft.name,
            category: draft.category,
            level: draft.level,
            order: meta.order,
            created_at: meta.created_at,
        }
    }

    fn apply_patch(&mut self, patch: SkillPatch) {
        patch.name.apply_to(&mut self.name);
        patch.category.apply_to(&mut self.category);
        patch.level.apply_to(&mut self.level);
        patch.order.apply_to(&mut self.order);
    }
}
