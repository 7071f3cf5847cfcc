use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::case_study::application::ports::incoming::use_cases::{
    CreateCaseStudyError, CreateCaseStudyInput,
};
use crate::case_study::application::ports::outgoing::CaseStudyResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Attach a case study to a project
#[utoipa::path(
    post,
    path = "/api/admin/projects/{id}/case-study",
    tag = "case-studies",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = CreateCaseStudyInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Case study created", body = inline(SuccessResponse<CaseStudyResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 409, description = "Project already has a case study", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects/{id}/case-study")]
pub async fn create_case_study_handler(
    session: Session,
    path: web::Path<Uuid>,
    req: web::Json<CreateCaseStudyInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .case_study
        .create
        .execute(&session, project_id, req.into_inner())
        .await
    {
        Ok(created) => ApiResponse::created(created),

        Err(CreateCaseStudyError::Unauthorized) => ApiResponse::admin_required(),

        Err(CreateCaseStudyError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(CreateCaseStudyError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(CreateCaseStudyError::CaseStudyAlreadyExists) => ApiResponse::conflict(
            "CASE_STUDY_ALREADY_EXISTS",
            "Project already has a case study",
        ),

        Err(CreateCaseStudyError::RepositoryError(e)) => {
            error!("Repository error creating case study for {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
