use std::sync::Arc;

use crate::modules::content::adapter::incoming::web::CollectionResource;
use crate::modules::content::application::ports::incoming::use_cases::CollectionUseCase;
use crate::modules::experience::application::domain::Experience;
use crate::AppState;

impl CollectionResource for Experience {
    const PATH: &'static str = "experiences";
    const NOT_FOUND_CODE: &'static str = "EXPERIENCE_NOT_FOUND";
    const LABEL: &'static str = "Experience";

    fn use_case(state: &AppState) -> Arc<dyn CollectionUseCase<Self> + Send + Sync> {
        Arc::clone(&state.experiences)
    }
}
