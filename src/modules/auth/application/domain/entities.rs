use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role claim carried by a session. Anything the service does not recognise
/// deserializes to `Guest` and is treated as unprivileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[serde(other)]
    Guest,
}

/// Identity produced by the credential verifier and carried inside the
/// session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "Admin")]
    pub name: String,
    pub role: Role,
}

impl Identity {
    /// The single elevated identity of the site.
    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            id: "1".to_string(),
            email: email.into(),
            name: "Admin".to_string(),
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Unauthorized")]
    Unauthorized,
}

/// Per-request view of who is calling. Built by the session extractor from
/// the bearer token or session cookie; anonymous when neither verifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: Identity) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Identity::is_admin)
    }

    /// Gate for every mutating content action. Must run before any
    /// validation or store access.
    pub fn require_admin(&self) -> Result<&Identity, AuthorizationError> {
        match &self.user {
            Some(user) if user.is_admin() => Ok(user),
            _ => Err(AuthorizationError::Unauthorized),
        }
    }
}
