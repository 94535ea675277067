use actix_web::{get, web, Responder};

use super::about_error_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::about::application::domain::About;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the about record for the public site
#[utoipa::path(
    get,
    path = "/api/public/about",
    tag = "public",
    responses(
        (status = 200, description = "About record", body = inline(SuccessResponse<About>)),
        (status = 503, description = "Content store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/public/about")]
pub async fn get_public_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.about.get().await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => about_error_response(e),
    }
}
