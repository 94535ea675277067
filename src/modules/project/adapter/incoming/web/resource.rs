use std::sync::Arc;

use crate::modules::content::adapter::incoming::web::CollectionResource;
use crate::modules::content::application::ports::incoming::use_cases::CollectionUseCase;
use crate::modules::project::application::domain::{Project, PROJECT_CATEGORIES};
use crate::AppState;

impl CollectionResource for Project {
    const PATH: &'static str = "projects";
    const NOT_FOUND_CODE: &'static str = "PROJECT_NOT_FOUND";
    const LABEL: &'static str = "Project";
    const CATEGORIES: &'static [&'static str] = &PROJECT_CATEGORIES;

    fn use_case(state: &AppState) -> Arc<dyn CollectionUseCase<Self> + Send + Sync> {
        Arc::clone(&state.projects)
    }
}
