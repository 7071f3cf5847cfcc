use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};
use crate::settings::application::ports::outgoing::{SettingsRepository, SettingsRepositoryError};
use crate::settings::domain::entities::CvSettings;
use crate::shared::validation::{http_url, optional_text, ValidationError};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCvInput {
    #[schema(example = "https://storage.example.com/cv/jane-doe.pdf")]
    pub cv_url: String,
    #[schema(example = "Jane-Doe-CV.pdf")]
    #[serde(default)]
    pub cv_file_name: Option<String>,
}

impl UpdateCvInput {
    /// Returns the cleaned `(cv_url, cv_file_name)` pair.
    pub fn validate(self) -> Result<(String, Option<String>), ValidationError> {
        let cv_url = http_url("cv_url", &self.cv_url)?;
        let cv_file_name = optional_text(self.cv_file_name.as_deref());

        Ok((cv_url, cv_file_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCvError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for UpdateCvError {
    fn from(_: AuthorizationError) -> Self {
        UpdateCvError::Unauthorized
    }
}

impl From<ValidationError> for UpdateCvError {
    fn from(e: ValidationError) -> Self {
        UpdateCvError::Validation(e.0)
    }
}

impl From<SettingsRepositoryError> for UpdateCvError {
    fn from(e: SettingsRepositoryError) -> Self {
        match e {
            SettingsRepositoryError::DatabaseError(msg) => UpdateCvError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait IUpdateCvUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        input: UpdateCvInput,
    ) -> Result<CvSettings, UpdateCvError>;
}

pub struct UpdateCvUseCase<R: SettingsRepository> {
    repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R: SettingsRepository> UpdateCvUseCase<R> {
    pub fn new(repository: R, revalidator: Arc<dyn PathRevalidator>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> IUpdateCvUseCase for UpdateCvUseCase<R> {
    async fn execute(
        &self,
        session: &Session,
        input: UpdateCvInput,
    ) -> Result<CvSettings, UpdateCvError> {
        session.require_admin()?;
        let (cv_url, cv_file_name) = input.validate()?;

        let settings = self.repository.upsert_cv(cv_url, cv_file_name).await?;

        tracing::info!("CV link updated");
        mark_stale(self.revalidator.as_ref(), paths::after_cv_changed()).await;

        Ok(settings)
    }
}
