use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::settings::domain::entities::CvSettings;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current CV link
///
/// `data` is `null` until a CV has been configured.
#[utoipa::path(
    get,
    path = "/api/cv",
    tag = "cv",
    responses(
        (status = 200, description = "CV settings or null", body = inline(SuccessResponse<Option<CvSettings>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/cv")]
pub async fn get_cv_handler(data: web::Data<AppState>) -> impl Responder {
    match data.cv.get.execute().await {
        Ok(settings) => ApiResponse::success(settings),
        Err(e) => {
            error!("Failed to read CV settings: {}", e);
            ApiResponse::internal_error()
        }
    }
}
