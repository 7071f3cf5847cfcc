// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct ApiError {
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    /// 400 with the shared `VALIDATION_ERROR` code.
    pub fn validation_error(message: &str) -> HttpResponse {
        Self::bad_request("VALIDATION_ERROR", message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    /// Response for a mutating action attempted without an admin session.
    pub fn admin_required() -> HttpResponse {
        Self::unauthorized("UNAUTHORIZED", "Admin session required")
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }

    pub fn upstream_error(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_success_envelope_omits_error() {
        let resp = ApiResponse::success(json!({"id": 1}));
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body, json!({"success": true, "data": {"id": 1}}));
    }

    #[actix_web::test]
    async fn test_error_envelope_omits_data() {
        let resp = ApiResponse::conflict("SLUG_ALREADY_EXISTS", "taken");
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body = body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": false, "error": {"code": "SLUG_ALREADY_EXISTS", "message": "taken"}})
        );
    }

    #[actix_web::test]
    async fn test_admin_required_is_401_unauthorized() {
        let resp = ApiResponse::admin_required();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[test]
    fn test_no_content_is_204() {
        assert_eq!(ApiResponse::no_content().status(), StatusCode::NO_CONTENT);
    }
}
