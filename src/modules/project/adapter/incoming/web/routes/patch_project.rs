use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectError, PatchProjectInput,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Partially update a project
///
/// Absent fields are kept, `null` clears a nullable field.
#[utoipa::path(
    patch,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body(content = Object, description = "Any subset of project fields"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<ProjectResult>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/projects/{id}")]
pub async fn patch_project_handler(
    session: Session,
    path: web::Path<Uuid>,
    req: web::Json<PatchProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .patch
        .execute(&session, project_id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),

        Err(PatchProjectError::Unauthorized) => ApiResponse::admin_required(),

        Err(PatchProjectError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(PatchProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(PatchProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }

        Err(PatchProjectError::RepositoryError(e)) => {
            error!("Repository error patching project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
