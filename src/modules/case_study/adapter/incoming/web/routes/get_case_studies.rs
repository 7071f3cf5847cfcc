use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::project::application::ports::outgoing::ProjectWithCaseStudy;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List published case studies
///
/// Each entry is the owning project with its case study attached.
#[utoipa::path(
    get,
    path = "/api/case-studies",
    tag = "case-studies",
    responses(
        (status = 200, description = "Published case studies", body = inline(SuccessResponse<Vec<ProjectWithCaseStudy>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/case-studies")]
pub async fn get_case_studies_handler(data: web::Data<AppState>) -> impl Responder {
    match data.case_study.get.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => {
            error!("Failed to list case studies: {}", e);
            ApiResponse::internal_error()
        }
    }
}

/// Get a case study by project slug
#[utoipa::path(
    get,
    path = "/api/case-studies/{slug}",
    tag = "case-studies",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Case study found", body = inline(SuccessResponse<ProjectWithCaseStudy>)),
        (status = 404, description = "No published case study for this slug", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/case-studies/{slug}")]
pub async fn get_case_study_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.case_study.get.by_slug(&slug).await {
        Ok(Some(found)) => ApiResponse::success(found),
        Ok(None) => ApiResponse::not_found("CASE_STUDY_NOT_FOUND", "Case study not found"),
        Err(e) => {
            error!("Failed to load case study {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}
