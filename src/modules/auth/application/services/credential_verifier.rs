use std::fmt;

use crate::auth::application::domain::entities::Identity;

/// Admin credentials read from the environment. Either value may be missing;
/// the verifier then refuses every login.
#[derive(Clone, Default)]
pub struct AdminCredentials {
    email: Option<String>,
    password: Option<String>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(email: Option<String>, password: Option<String>) -> Self {
        Self {
            email: email.filter(|v| !v.is_empty()),
            password: password.filter(|v| !v.is_empty()),
        }
    }

    /// Reads `ADMIN_EMAIL` and `ADMIN_PASSWORD`. Blank values count as unset.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.email.is_some() && self.password.is_some()
    }
}

pub trait CredentialVerifier: Send + Sync {
    /// `None` on any failure; callers never learn which check failed.
    fn authenticate(&self, email: &str, password: &str) -> Option<Identity>;
}

#[derive(Debug, Clone)]
pub struct AdminCredentialVerifier {
    credentials: AdminCredentials,
}

impl AdminCredentialVerifier {
    pub fn new(credentials: AdminCredentials) -> Self {
        Self { credentials }
    }
}

impl CredentialVerifier for AdminCredentialVerifier {
    fn authenticate(&self, email: &str, password: &str) -> Option<Identity> {
        if email.is_empty() || password.is_empty() {
            return None;
        }

        let (Some(admin_email), Some(admin_password)) =
            (&self.credentials.email, &self.credentials.password)
        else {
            tracing::error!("ADMIN_EMAIL or ADMIN_PASSWORD is not configured; login refused");
            return None;
        };

        if email == admin_email && password == admin_password {
            Some(Identity::admin(admin_email.clone()))
        } else {
            None
        }
    }
}
