use std::sync::Arc;

use crate::modules::award::application::domain::Award;
use crate::modules::content::adapter::incoming::web::CollectionResource;
use crate::modules::content::application::ports::incoming::use_cases::CollectionUseCase;
use crate::AppState;

impl CollectionResource for Award {
    const PATH: &'static str = "awards";
    const NOT_FOUND_CODE: &'static str = "AWARD_NOT_FOUND";
    const LABEL: &'static str = "Award";

    fn use_case(state: &AppState) -> Arc<dyn CollectionUseCase<Self> + Send + Sync> {
        Arc::clone(&state.awards)
    }
}
