use std::sync::Arc;

use async_trait::async_trait;

use crate::settings::application::ports::outgoing::{
    ByteStream, CvFileFetcher, SettingsRepository,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadCvError {
    #[error("no CV configured")]
    NotFound,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// A CV ready to be relayed to the client.
pub struct CvDownload {
    pub file_name: String,
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

#[async_trait]
pub trait IDownloadCvUseCase: Send + Sync {
    async fn execute(&self) -> Result<CvDownload, DownloadCvError>;
}

pub struct DownloadCvUseCase<R: SettingsRepository> {
    repository: R,
    fetcher: Arc<dyn CvFileFetcher>,
}

impl<R: SettingsRepository> DownloadCvUseCase<R> {
    pub fn new(repository: R, fetcher: Arc<dyn CvFileFetcher>) -> Self {
        Self {
            repository,
            fetcher,
        }
    }
}

#[async_trait]
impl<R: SettingsRepository + Send + Sync> IDownloadCvUseCase for DownloadCvUseCase<R> {
    async fn execute(&self) -> Result<CvDownload, DownloadCvError> {
        let settings = self
            .repository
            .get_settings()
            .await
            .map_err(|e| DownloadCvError::RepositoryError(e.to_string()))?
            .ok_or(DownloadCvError::NotFound)?;

        let url = settings.download_url().ok_or(DownloadCvError::NotFound)?;

        let fetched = self.fetcher.fetch(url).await.map_err(|e| {
            tracing::error!(error = %e, "CV download failed");
            DownloadCvError::Upstream(e.to_string())
        })?;

        Ok(CvDownload {
            file_name: settings.download_file_name(),
            content_length: fetched.content_length,
            body: fetched.body,
        })
    }
}
