use crate::api::schemas::SuccessResponse;
use crate::auth::application::domain::entities::{Identity, Session};
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};

/// Current session
///
/// Returns the identity carried by the caller's token, or `null` when the
/// caller is anonymous.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Current session user or null", body = inline(SuccessResponse<Option<Identity>>))
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(session: Session) -> impl Responder {
    ApiResponse::success(session.user().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{admin_token, test_token_provider};
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn test_session_returns_user_for_valid_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "admin@example.com");
        assert_eq!(body["data"]["role"], "ADMIN");
    }

    #[actix_web::test]
    async fn test_session_is_null_when_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_token_provider()))
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body.get("data").is_none() || body["data"].is_null());
    }
}
