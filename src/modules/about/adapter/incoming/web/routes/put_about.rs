use actix_web::{put, web, Responder};

use super::about_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::about::application::domain::About;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the about record
///
/// Whole-record overwrite; fields left out of the body are stored empty.
#[utoipa::path(
    put,
    path = "/api/about",
    tag = "about",
    request_body = About,
    responses(
        (status = 200, description = "Stored record", body = inline(SuccessResponse<About>)),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "email: is not a valid address"
                }
            })
        ),
        (status = 503, description = "Content store unavailable", body = ErrorResponse)
    )
)]
#[put("/api/about")]
pub async fn put_about_handler(
    req: web::Json<About>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.about.set(req.into_inner()).await {
        Ok(stored) => ApiResponse::success(stored),
        Err(e) => about_error_response(e),
    }
}
