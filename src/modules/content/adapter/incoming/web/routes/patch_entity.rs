use actix_web::{web, HttpResponse};

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `PATCH /api/<collection>/{id}`: omitted fields keep their stored value.
pub async fn patch_entity_handler<T: CollectionResource>(
    path: web::Path<String>,
    req: web::Json<T::Patch>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::use_case(&data).update(&id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => collection_error_response::<T>(e),
    }
}
