use actix_web::{web, HttpResponse};

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `POST /api/<collection>`: appends a new entity at the end of the order.
pub async fn create_entity_handler<T: CollectionResource>(
    req: web::Json<T::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data).create(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => collection_error_response::<T>(e),
    }
}
