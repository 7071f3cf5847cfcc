use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::case_study::application::ports::incoming::use_cases::{
    PatchCaseStudyError, PatchCaseStudyInput,
};
use crate::case_study::application::ports::outgoing::CaseStudyResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partially update a case study
#[utoipa::path(
    patch,
    path = "/api/admin/case-studies/{id}",
    tag = "case-studies",
    params(("id" = Uuid, Path, description = "Case study id")),
    request_body(content = Object, description = "Any subset of case study fields"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Case study updated", body = inline(SuccessResponse<CaseStudyResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Case study not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/case-studies/{id}")]
pub async fn patch_case_study_handler(
    session: Session,
    path: web::Path<Uuid>,
    req: web::Json<PatchCaseStudyInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let case_study_id = path.into_inner();

    match data
        .case_study
        .patch
        .execute(&session, case_study_id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchCaseStudyError::Unauthorized) => ApiResponse::admin_required(),

        Err(PatchCaseStudyError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(PatchCaseStudyError::NotFound) => {
            ApiResponse::not_found("CASE_STUDY_NOT_FOUND", "Case study not found")
        }

        Err(PatchCaseStudyError::RepositoryError(e)) => {
            error!("Repository error patching case study {}: {}", case_study_id, e);
            ApiResponse::internal_error()
        }
    }
}
