use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::settings::application::use_cases::download_cv::DownloadCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Download the CV
///
/// Streams the stored file from remote storage as an attachment.
#[utoipa::path(
    get,
    path = "/api/download-cv",
    tag = "cv",
    responses(
        (status = 200, description = "PDF stream", content_type = "application/pdf", body = Vec<u8>),
        (status = 404, description = "No CV configured", body = ErrorResponse),
        (status = 500, description = "Storage fetch failed", body = ErrorResponse),
    )
)]
#[get("/api/download-cv")]
pub async fn download_cv_handler(data: web::Data<AppState>) -> impl Responder {
    let download = match data.cv.download.execute().await {
        Ok(download) => download,
        Err(DownloadCvError::NotFound) => {
            return ApiResponse::not_found("CV_NOT_FOUND", "No CV has been uploaded");
        }
        Err(DownloadCvError::Upstream(e)) => {
            error!("Failed to fetch CV from storage: {}", e);
            return ApiResponse::upstream_error("CV_FETCH_FAILED", "Failed to fetch CV");
        }
        Err(DownloadCvError::RepositoryError(e)) => {
            error!("Repository error reading CV settings: {}", e);
            return ApiResponse::internal_error();
        }
    };

    let disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(download.file_name)],
    };

    let mut response = HttpResponse::Ok();
    response
        .content_type("application/pdf")
        .insert_header(disposition);
    if let Some(len) = download.content_length {
        response.no_chunking(len);
    }

    response.streaming(download.body)
}
