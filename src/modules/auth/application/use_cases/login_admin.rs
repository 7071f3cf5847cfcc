use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::application::{
    domain::entities::Identity, ports::outgoing::token_provider::TokenProvider,
    services::CredentialVerifier,
};

// ========================= Login Request =========================
/// Raw credentials. Blank values are not rejected here so that every failure
/// reaches the caller as the same `InvalidCredentials`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery-staple")]
    pub password: String,
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginAdminResponse {
    pub token: String,
    /// Seconds until the token expires
    #[schema(example = 2592000)]
    pub expires_in: i64,
    pub user: Identity,
}

// ============================ Login Admin Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase<V>
where
    V: CredentialVerifier,
{
    verifier: V,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<V> LoginAdminUseCase<V>
where
    V: CredentialVerifier,
{
    pub fn new(verifier: V, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            verifier,
            token_provider,
        }
    }
}

#[async_trait]
impl<V> ILoginAdminUseCase for LoginAdminUseCase<V>
where
    V: CredentialVerifier,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let identity = self
            .verifier
            .authenticate(&request.email, &request.password)
            .ok_or(LoginError::InvalidCredentials)?;

        let issued = self
            .token_provider
            .issue_session_token(&identity)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(user_id = %identity.id, "Admin signed in");

        Ok(LoginAdminResponse {
            token: issued.token,
            expires_in: issued.expires_in,
            user: identity,
        })
    }
}
