use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{
    LoginAdminResponse, LoginError, LoginRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, warn};

/// Admin login
///
/// Checks the submitted credentials against the configured admin account and
/// returns a signed session token. The token is also set as an HttpOnly cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginAdminResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expires_in": 2592000,
                    "user": {
                        "id": "1",
                        "email": "admin@example.com",
                        "name": "Admin",
                        "role": "ADMIN"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Malformed body",
            body = ErrorResponse
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_admin_use_case;

    match use_case.execute(req.into_inner()).await {
        Ok(response) => {
            let cookie = data
                .session_cookie
                .build(&response.token, response.expires_in);

            let mut http = ApiResponse::success(response);
            if let Err(e) = http.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
            }
            http
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
