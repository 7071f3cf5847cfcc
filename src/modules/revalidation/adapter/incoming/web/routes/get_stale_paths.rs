use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::revalidation::adapter::outgoing::StalePath;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct StalePathsQuery {
    /// RFC 3339 instant; only paths marked at or after it are returned
    #[param(example = "2026-03-01T00:00:00Z")]
    pub since: Option<String>,
}

/// Stale public routes
///
/// Lists the public paths invalidated by content writes so a rendering front
/// end can rebuild them.
#[utoipa::path(
    get,
    path = "/api/revalidation",
    tag = "revalidation",
    params(StalePathsQuery),
    responses(
        (status = 200, description = "Stale paths, newest first", body = inline(SuccessResponse<Vec<StalePath>>)),
        (status = 400, description = "Invalid `since` value", body = ErrorResponse),
    )
)]
#[get("/api/revalidation")]
pub async fn get_stale_paths_handler(
    query: web::Query<StalePathsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let since = match query.since.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(_) => {
                return ApiResponse::validation_error("since must be an RFC 3339 timestamp");
            }
        },
    };

    ApiResponse::success(data.revalidation_registry.stale_since(since).await)
}
