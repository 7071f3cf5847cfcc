use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List published projects
///
/// Newest first, each with its case study when one exists.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Published projects", body = inline(SuccessResponse<Vec<ProjectWithCaseStudy>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    list(&data, true).await
}

/// List every project, drafts included
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All projects", body = inline(SuccessResponse<Vec<ProjectWithCaseStudy>>)),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/projects")]
pub async fn get_admin_projects_handler(
    session: Session,
    data: web::Data<AppState>,
) -> impl Responder {
    if session.require_admin().is_err() {
        return ApiResponse::admin_required();
    }

    list(&data, false).await
}

async fn list(data: &AppState, published_only: bool) -> actix_web::HttpResponse {
    match data.project.get_list.execute(published_only).await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}
