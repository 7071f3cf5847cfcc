use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::info;

/// Logout
///
/// Session tokens are stateless; logging out expires the session cookie.
/// Bearer clients simply discard their token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Session cookie cleared"))
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(data: web::Data<AppState>) -> impl Responder {
    info!("Logout requested");

    let mut resp = ApiResponse::no_content();
    if let Err(e) = resp.add_cookie(&data.session_cookie.removal()) {
        tracing::error!(error = %e, "Failed to attach cookie removal");
    }
    resp
}
