use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::{Identity, Role};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims of a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

impl SessionClaims {
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.sub,
            email: self.email,
            name: self.name,
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, identity: &Identity) -> Result<IssuedToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
