use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{Identity, Role, Session};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_session_secret_for_testing_only_0123".to_string(),
        issuer: "test_issuer".to_string(),
        session_ttl: 3600,
    })
}

/// Shape the session extractor looks up in app data.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn admin_token() -> String {
    test_jwt_service()
        .issue_session_token(&Identity::admin(TEST_ADMIN_EMAIL))
        .expect("admin token")
        .token
}

/// A verifiable token whose role is not admin.
pub fn guest_token() -> String {
    let mut identity = Identity::admin("visitor@example.com");
    identity.id = "2".to_string();
    identity.name = "Visitor".to_string();
    identity.role = Role::Guest;

    test_jwt_service()
        .issue_session_token(&identity)
        .expect("guest token")
        .token
}

pub fn admin_session() -> Session {
    Session::authenticated(Identity::admin(TEST_ADMIN_EMAIL))
}

pub fn anonymous_session() -> Session {
    Session::anonymous()
}
