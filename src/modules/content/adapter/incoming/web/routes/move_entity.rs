use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::adapter::incoming::web::{
    collection_error_response, CollectionResource,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveEntityRequest {
    /// Zero-based target index in display order. Clamped to the end.
    pub position: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoveEntityResponse {
    pub ids: Vec<String>,
}

/// `POST /api/<collection>/{id}/move`: drag-and-drop drop target.
pub async fn move_entity_handler<T: CollectionResource>(
    path: web::Path<String>,
    req: web::Json<MoveEntityRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match T::use_case(&data).move_to(&id, req.position).await {
        Ok(ids) => ApiResponse::success(MoveEntityResponse { ids }),
        Err(e) => collection_error_response::<T>(e),
    }
}
