use async_trait::async_trait;

use crate::settings::application::ports::outgoing::{SettingsRepository, SettingsRepositoryError};
use crate::settings::domain::entities::CvSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetCvError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetCvUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<CvSettings>, GetCvError>;
}

#[derive(Debug, Clone)]
pub struct GetCvUseCase<R: SettingsRepository> {
    repository: R,
}

impl<R: SettingsRepository> GetCvUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> IGetCvUseCase for GetCvUseCase<R> {
    async fn execute(&self) -> Result<Option<CvSettings>, GetCvError> {
        self.repository
            .get_settings()
            .await
            .map_err(|err| match err {
                SettingsRepositoryError::DatabaseError(msg) => GetCvError::RepositoryError(msg),
            })
    }
}
