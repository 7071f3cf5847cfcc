use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};

pub const SESSION_COOKIE_NAME: &str = "portfolio_session";

/// Builds the HttpOnly cookie that carries the session token for browser
/// clients.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// `COOKIE_SECURE` wins; otherwise the flag is on only in production.
    pub fn from_env() -> Self {
        let secure = match std::env::var("COOKIE_SECURE") {
            Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
            Err(_) => std::env::var("RUST_ENV").as_deref() == Ok("production"),
        };
        Self::new(secure)
    }

    pub fn build(&self, token: &str, max_age_seconds: i64) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, token.to_string())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(CookieDuration::seconds(max_age_seconds))
            .finish()
    }

    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .finish();
        cookie.make_removal();
        cookie
    }
}
