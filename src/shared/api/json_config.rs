// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Turns body deserialization failures into the `VALIDATION_ERROR` envelope
/// instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "Rejected malformed JSON body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::validation_error(&message),
            )
            .into()
        })
}
