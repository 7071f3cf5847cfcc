use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectInput,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project
///
/// Slug defaults to the slugified title. An optional nested case study is
/// stored in the same transaction.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    request_body = CreateProjectInput,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectWithCaseStudy>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (
            status = 409,
            description = "Slug already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "SLUG_ALREADY_EXISTS", "message": "Project slug already exists" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    session: Session,
    req: web::Json<CreateProjectInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(&session, req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::Unauthorized) => ApiResponse::admin_required(),

        Err(CreateProjectError::Validation(msg)) => ApiResponse::validation_error(&msg),

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::conflict("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}
