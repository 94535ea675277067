use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteEntityResponse {
    /// `false` when no entity had the id; nothing was written.
    pub removed: bool,
}

/// `DELETE /api/<collection>/{id}`. Idempotent.
pub async fn delete_entity_handler<T: CollectionResource>(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::use_case(&data).delete(&id).await {
        Ok(removed) => ApiResponse::success(DeleteEntityResponse { removed }),
        Err(e) => collection_error_response::<T>(e),
    }
}
