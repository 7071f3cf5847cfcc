use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::Session, ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;

use super::super::session_cookie::SESSION_COOKIE_NAME;

fn create_api_error(response: actix_web::HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

/// Resolves the caller's session. Never rejects a request for a bad or
/// missing token; it yields an anonymous session and leaves the decision to
/// the use case.
impl FromRequest for Session {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("Token provider is not registered as app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let Some(token) = extract_token_from_header(req).or_else(|| extract_token_from_cookie(req))
        else {
            return ready(Ok(Session::anonymous()));
        };

        match token_provider.verify_token(&token) {
            Ok(claims) => ready(Ok(Session::authenticated(claims.into_identity()))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unverifiable session token");
                ready(Ok(Session::anonymous()))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_token_from_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
        .filter(|s| !s.is_empty())
}
