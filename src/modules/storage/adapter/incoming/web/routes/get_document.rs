use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, warn};
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::storage::application::ports::outgoing::{DocumentKey, DocumentStoreError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DocumentQuery {
    /// One of `about`, `projects`, `experiences`, `skills`, `awards`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Read a raw document
///
/// Returns the stored JSON as-is, without the response envelope. A document
/// that was never written reads as `[]` for collections and as the default
/// record for `about`.
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "documents",
    params(DocumentQuery),
    responses(
        (status = 200, description = "Stored document, without the response envelope"),
        (
            status = 400,
            description = "Unknown document type",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_DOCUMENT_TYPE",
                    "message": "Unknown document type: posts"
                }
            })
        ),
        (status = 503, description = "Content store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/data")]
pub async fn get_document_handler(
    query: web::Query<DocumentQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key: DocumentKey = match query.kind.parse() {
        Ok(key) => key,
        Err(e) => return ApiResponse::bad_request("INVALID_DOCUMENT_TYPE", &e.to_string()),
    };

    if key == DocumentKey::About {
        return match data.about.get().await {
            Ok(about) => HttpResponse::Ok().json(about),
            Err(e) => {
                error!("Failed to read about document: {}", e);
                ApiResponse::store_unavailable()
            }
        };
    }

    match data.documents.read(key).await {
        Ok(Some(document)) => HttpResponse::Ok().json(document),
        Ok(None) => HttpResponse::Ok().json(empty_collection()),
        Err(DocumentStoreError::Malformed { key, message }) => {
            warn!(key = %key, "malformed document served as empty: {}", message);
            HttpResponse::Ok().json(empty_collection())
        }
        Err(DocumentStoreError::Unavailable(msg)) => {
            error!(key = %key, "Failed to read document: {}", msg);
            ApiResponse::store_unavailable()
        }
    }
}

fn empty_collection() -> Value {
    json!([])
}
