use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::contact::application::use_cases::submit_contact::{
    ContactInput, ContactSent, SubmitContactError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send a contact message
///
/// Relays the message to the site owner's mailbox with `Reply-To` set to the
/// sender.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactInput,
    responses(
        (status = 200, description = "Message sent", body = inline(SuccessResponse<ContactSent>)),
        (
            status = 400,
            description = "Missing fields or malformed email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Missing required fields: name, message" }
            })
        ),
        (status = 500, description = "Mail transport failed", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact_use_case.execute(req.into_inner()).await {
        Ok(sent) => ApiResponse::success(sent),

        Err(e @ SubmitContactError::MissingFields(_)) => {
            ApiResponse::validation_error(&e.to_string())
        }

        Err(SubmitContactError::InvalidEmail) => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email address")
        }

        Err(SubmitContactError::SendFailed(e)) => {
            error!("Failed to relay contact message: {}", e);
            ApiResponse::upstream_error("SEND_FAILED", "Failed to send message")
        }
    }
}
