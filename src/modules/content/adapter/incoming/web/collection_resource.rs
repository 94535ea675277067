use std::sync::Arc;

use actix_web::HttpResponse;
use serde_json::Value;
use tracing::{error, warn};

use crate::modules::content::application::domain::CollectionEntity;
use crate::modules::content::application::ports::incoming::use_cases::{
    CollectionUseCase, CollectionUseCaseError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Binds a collection entity to its HTTP surface.
pub trait CollectionResource: CollectionEntity {
    /// Path segment under `/api` and `/api/public`.
    const PATH: &'static str;

    /// Error code returned when an id does not match, e.g. `PROJECT_NOT_FOUND`.
    const NOT_FOUND_CODE: &'static str;

    /// Human readable name used in error messages.
    const LABEL: &'static str;

    /// Suggested values for the entity's free-text `category`, served to
    /// admin forms. Empty when the collection has none.
    const CATEGORIES: &'static [&'static str] = &[];

    fn use_case(state: &AppState) -> Arc<dyn CollectionUseCase<Self> + Send + Sync>;

    /// Wire form on the public site. Defaults to the stored record.
    fn public_view(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

pub fn collection_error_response<T: CollectionResource>(err: CollectionUseCaseError) -> HttpResponse {
    match err {
        CollectionUseCaseError::NotFound => {
            ApiResponse::not_found(T::NOT_FOUND_CODE, &format!("{} not found", T::LABEL))
        }

        CollectionUseCaseError::Validation(msg) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        CollectionUseCaseError::StoreUnavailable(msg) => {
            error!("Store unavailable for {}: {}", T::PATH, msg);
            ApiResponse::store_unavailable()
        }

        CollectionUseCaseError::MalformedDocument(msg) => {
            warn!("Refusing to overwrite malformed {} document: {}", T::PATH, msg);
            ApiResponse::conflict(
                "MALFORMED_DOCUMENT",
                &format!("Stored {} document does not decode; fix it before editing", T::PATH),
            )
        }

        CollectionUseCaseError::RepositoryError(msg) => {
            error!("Repository error for {}: {}", T::PATH, msg);
            ApiResponse::internal_error()
        }
    }
}
