use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// XML sitemap
///
/// Static public routes plus one entry per published case study.
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = "sitemap",
    responses(
        (status = 200, description = "sitemaps.org urlset", content_type = "application/xml", body = String),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/sitemap.xml")]
pub async fn get_sitemap_handler(data: web::Data<AppState>) -> impl Responder {
    match data.sitemap.execute().await {
        Ok(xml) => HttpResponse::Ok()
            .content_type("application/xml; charset=utf-8")
            .body(xml),
        Err(e) => {
            error!("Failed to build sitemap: {}", e);
            ApiResponse::internal_error()
        }
    }
}
