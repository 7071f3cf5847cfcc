use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};
use crate::settings::application::ports::outgoing::{SettingsRepository, SettingsRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteCvError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for DeleteCvError {
    fn from(_: AuthorizationError) -> Self {
        DeleteCvError::Unauthorized
    }
}

impl From<SettingsRepositoryError> for DeleteCvError {
    fn from(e: SettingsRepositoryError) -> Self {
        match e {
            SettingsRepositoryError::DatabaseError(msg) => DeleteCvError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IDeleteCvUseCase: Send + Sync {
    async fn execute(&self, session: &Session) -> Result<(), DeleteCvError>;
}

pub struct DeleteCvUseCase<R: SettingsRepository> {
    repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R: SettingsRepository> DeleteCvUseCase<R> {
    pub fn new(repository: R, revalidator: Arc<dyn PathRevalidator>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> IDeleteCvUseCase for DeleteCvUseCase<R> {
    async fn execute(&self, session: &Session) -> Result<(), DeleteCvError> {
        session.require_admin()?;

        self.repository.clear_cv().await?;

        tracing::info!("CV link cleared");
        mark_stale(self.revalidator.as_ref(), paths::after_cv_changed()).await;

        Ok(())
    }
}
