use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::settings::application::use_cases::update_cv::{UpdateCvError, UpdateCvInput};
use crate::settings::domain::entities::CvSettings;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Set the CV link
///
/// Creates the settings row on first use and replaces the link afterwards.
#[utoipa::path(
    put,
    path = "/api/admin/cv",
    tag = "cv",
    request_body = UpdateCvInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "CV link stored", body = inline(SuccessResponse<CvSettings>)),
        (status = 400, description = "Invalid URL", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admin/cv")]
pub async fn update_cv_handler(
    session: Session,
    req: web::Json<UpdateCvInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv.update.execute(&session, req.into_inner()).await {
        Ok(settings) => ApiResponse::success(settings),

        Err(UpdateCvError::Unauthorized) => ApiResponse::admin_required(),

        Err(UpdateCvError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(UpdateCvError::RepositoryError(e)) => {
            error!("Repository error updating CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
