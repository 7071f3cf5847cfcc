use async_trait::async_trait;

use crate::settings::domain::entities::CvSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage for the settings singleton. The row is addressed by a constant
/// key, so writes are upserts and there is never more than one row.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_settings(&self) -> Result<Option<CvSettings>, SettingsRepositoryError>;

    async fn upsert_cv(
        &self,
        cv_url: String,
        cv_file_name: Option<String>,
    ) -> Result<CvSettings, SettingsRepositoryError>;

    /// Nulls the CV columns when the row exists; no-op otherwise.
    async fn clear_cv(&self) -> Result<(), SettingsRepositoryError>;
}
