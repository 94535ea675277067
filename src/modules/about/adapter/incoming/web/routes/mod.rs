pub mod get_about;
pub mod get_public_about;
pub mod put_about;

pub use get_about::{__path_get_about_handler, get_about_handler};
pub use get_public_about::{__path_get_public_about_handler, get_public_about_handler};
pub use put_about::{__path_put_about_handler, put_about_handler};

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::SingletonUseCaseError;
use crate::shared::api::ApiResponse;

pub(crate) fn about_error_response(err: SingletonUseCaseError) -> HttpResponse {
    match err {
        SingletonUseCaseError::Validation(msg) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        SingletonUseCaseError::StoreUnavailable(msg) => {
            error!("Store unavailable for about: {}", msg);
            ApiResponse::store_unavailable()
        }

        SingletonUseCaseError::RepositoryError(msg) => {
            error!("Repository error for about: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
