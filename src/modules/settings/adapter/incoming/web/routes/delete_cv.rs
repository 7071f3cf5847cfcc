use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::Session;
use crate::settings::application::use_cases::delete_cv::DeleteCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove the CV link
///
/// The settings row is kept; only the CV columns are cleared.
#[utoipa::path(
    delete,
    path = "/api/admin/cv",
    tag = "cv",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "CV link cleared"),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/cv")]
pub async fn delete_cv_handler(session: Session, data: web::Data<AppState>) -> impl Responder {
    match data.cv.delete.execute(&session).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteCvError::Unauthorized) => ApiResponse::admin_required(),
        Err(DeleteCvError::RepositoryError(e)) => {
            error!("Repository error clearing CV: {}", e);
            ApiResponse::internal_error()
        }
    }
}
