use actix_web::{web, HttpResponse};
use tracing::error;

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `GET /api/public/<collection>`: display order for the public site.
pub async fn get_public_entities_handler<T: CollectionResource>(
    data: web::Data<AppState>,
) -> HttpResponse {
    let items = match T::use_case(&data).list_sorted().await {
        Ok(items) => items,
        Err(e) => return collection_error_response::<T>(e),
    };

    match items.iter().map(T::public_view).collect::<Result<Vec<_>, _>>() {
        Ok(views) => ApiResponse::success(views),
        Err(e) => {
            error!("Failed to render public {}: {}", T::PATH, e);
            ApiResponse::internal_error()
        }
    }
}
