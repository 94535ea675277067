use actix_web::HttpResponse;

use crate::modules::content::adapter::incoming::web::CollectionResource;
use crate::shared::api::ApiResponse;

/// `GET /api/<collection>/categories`: suggestion list for the admin form.
pub async fn get_categories_handler<T: CollectionResource>() -> HttpResponse {
    ApiResponse::success(T::CATEGORIES)
}
