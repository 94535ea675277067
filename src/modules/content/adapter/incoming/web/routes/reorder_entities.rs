use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderEntitiesRequest {
    /// Desired display sequence. Unlisted entities keep their order,
    /// unknown ids are ignored.
    pub ids: Vec<String>,
}

/// `PUT /api/<collection>/order`
pub async fn reorder_entities_handler<T: CollectionResource>(
    req: web::Json<ReorderEntitiesRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match T::use_case(&data).reorder(req.into_inner().ids).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => collection_error_response::<T>(e),
    }
}
