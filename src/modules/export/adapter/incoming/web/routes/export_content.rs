use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::export::application::use_cases::export_content::{ContentExport, ExportContentError};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Export all content
///
/// Every project (drafts included) with its case study, plus the settings row.
#[utoipa::path(
    get,
    path = "/api/admin/export",
    tag = "export",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Content snapshot", body = inline(SuccessResponse<ContentExport>)),
        (status = 401, description = "Admin session required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/export")]
pub async fn export_content_handler(
    session: Session,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.export.execute(&session).await {
        Ok(export) => ApiResponse::success(export),
        Err(ExportContentError::Unauthorized) => ApiResponse::admin_required(),
        Err(ExportContentError::RepositoryError(e)) => {
            error!("Repository error exporting content: {}", e);
            ApiResponse::internal_error()
        }
    }
}
