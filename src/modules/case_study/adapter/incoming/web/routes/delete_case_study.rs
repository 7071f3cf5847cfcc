use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::Session;
use crate::case_study::application::ports::incoming::use_cases::DeleteCaseStudyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a case study
#[utoipa::path(
    delete,
    path = "/api/admin/case-studies/{id}",
    tag = "case-studies",
    params(("id" = Uuid, Path, description = "Case study id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Case study deleted"),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Case study not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/case-studies/{id}")]
pub async fn delete_case_study_handler(
    session: Session,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let case_study_id = path.into_inner();

    match data.case_study.delete.execute(&session, case_study_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCaseStudyError::Unauthorized) => ApiResponse::admin_required(),

        Err(DeleteCaseStudyError::NotFound) => {
            ApiResponse::not_found("CASE_STUDY_NOT_FOUND", "Case study not found")
        }

        Err(DeleteCaseStudyError::RepositoryError(e)) => {
            error!("Repository error deleting case study {}: {}", case_study_id, e);
            ApiResponse::internal_error()
        }
    }
}
