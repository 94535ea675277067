use std::sync::Arc;

use serde_json::Value;

use crate::modules::content::adapter::incoming::web::CollectionResource;
use crate::modules::content::application::ports::incoming::use_cases::CollectionUseCase;
use crate::modules::skill::application::domain::{Skill, SKILL_CATEGORIES};
use crate::AppState;

impl CollectionResource for Skill {
    const PATH: &'static str = "skills";
    const NOT_FOUND_CODE: &'static str = "SKILL_NOT_FOUND";
    const LABEL: &'static str = "Skill";
    const CATEGORIES: &'static [&'static str] = &SKILL_CATEGORIES;

    fn use_case(state: &AppState) -> Arc<dyn CollectionUseCase<Self> + Send + Sync> {
        Arc::clone(&state.skills)
    }

    /// Adds `levelLabel`, omitted when the stored level is out of range.
    fn public_view(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let (Some(label), Value::Object(fields)) = (self.level_label(), &mut value) {
            fields.insert("levelLabel".to_string(), Value::from(label));
        }
        Ok(value)
    }
}
