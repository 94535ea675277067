// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Rejects undecodable bodies with the standard error envelope instead of
/// actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(4 * 1024 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
