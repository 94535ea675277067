pub mod entities;

pub use entities::{Skill, SkillDraft, SkillLevel, SkillPatch, SKILL_CATEGORIES};
