use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::storage::application::ports::outgoing::DocumentKey;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveDocumentRequest {
    #[serde(rename = "type")]
    #[schema(example = "projects")]
    pub kind: String,

    /// The complete document. Replaces whatever is stored.
    #[schema(value_type = Object)]
    pub content: Value,
}

/// Overwrite a raw document
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "documents",
    request_body = SaveDocumentRequest,
    responses(
        (
            status = 200,
            description = "Document written",
            example = json!({ "success": true })
        ),
        (status = 400, description = "Unknown document type", body = ErrorResponse),
        (status = 503, description = "Content store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/data")]
pub async fn save_document_handler(
    req: web::Json<SaveDocumentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let SaveDocumentRequest { kind, content } = req.into_inner();

    let key: DocumentKey = match kind.parse() {
        Ok(key) => key,
        Err(e) => return ApiResponse::bad_request("INVALID_DOCUMENT_TYPE", &e.to_string()),
    };

    match data.documents.write(key, content).await {
        Ok(()) => {
            info!(key = %key, "document overwritten");
            ApiResponse::ok()
        }
        Err(e) => {
            error!(key = %key, "Failed to write document: {}", e);
            ApiResponse::store_unavailable()
        }
    }
}
