use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::incoming::use_cases::HardDeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a project
///
/// An attached case study is removed with it, or the delete is refused,
/// depending on the configured delete policy.
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (
            status = 409,
            description = "Restrict policy: project still has a case study",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_HAS_CASE_STUDY",
                    "message": "Delete the case study before deleting the project"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/projects/{id}")]
pub async fn hard_delete_project_handler(
    session: Session,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.hard_delete.execute(&session, project_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(HardDeleteProjectError::Unauthorized) => ApiResponse::admin_required(),

        Err(HardDeleteProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(HardDeleteProjectError::HasCaseStudy) => ApiResponse::conflict(
            "PROJECT_HAS_CASE_STUDY",
            "Delete the case study before deleting the project",
        ),

        Err(HardDeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}
