use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_ttl: i64, // Expiration in seconds
}

/// 30 days, same as a browser "remember me" session.
const DEFAULT_SESSION_TTL: &str = "2592000";

/// One year.
const MAX_SESSION_TTL: i64 = 31_536_000;

impl JwtConfig {
    /// Helper function to parse expiry values
    fn parse_expiry(key: &str, default: &str) -> i64 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    /// Load session signing configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            panic!("SESSION_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let session_ttl = Self::parse_expiry("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL);
        if session_ttl <= 0 || session_ttl > MAX_SESSION_TTL {
            panic!("SESSION_TTL_SECONDS must be between 1 and {MAX_SESSION_TTL} seconds");
        }

        let issuer = env::var("SESSION_ISSUER").unwrap_or_else(|_| "portfolio-cms".to_string());

        Self {
            secret_key,
            issuer,
            session_ttl,
        }
    }
}
