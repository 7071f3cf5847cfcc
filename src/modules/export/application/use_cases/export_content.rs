use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectWithCaseStudy};
use crate::settings::application::ports::outgoing::SettingsRepository;
use crate::settings::domain::entities::CvSettings;

/// Point-in-time snapshot of every stored record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ContentExport {
    pub exported_at: DateTime<Utc>,
    pub projects: Vec<ProjectWithCaseStudy>,
    pub settings: Option<CvSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportContentError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for ExportContentError {
    fn from(_: AuthorizationError) -> Self {
        ExportContentError::Unauthorized
    }
}

#[async_trait]
pub trait IExportContentUseCase: Send + Sync {
    async fn execute(&self, session: &Session) -> Result<ContentExport, ExportContentError>;
}

pub struct ExportContentUseCase<Q: ProjectQuery, R: SettingsRepository> {
    projects: Q,
    settings: R,
}

impl<Q: ProjectQuery, R: SettingsRepository> ExportContentUseCase<Q, R> {
    pub fn new(projects: Q, settings: R) -> Self {
        Self { projects, settings }
    }
}

#[async_trait]
impl<Q, R> IExportContentUseCase for ExportContentUseCase<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: SettingsRepository + Send + Sync,
{
    async fn execute(&self, session: &Session) -> Result<ContentExport, ExportContentError> {
        session.require_admin()?;

        let projects = self
            .projects
            .list_projects(false)
            .await
            .map_err(|e| ExportContentError::RepositoryError(e.to_string()))?;
        let settings = self
            .settings
            .get_settings()
            .await
            .map_err(|e| ExportContentError::RepositoryError(e.to_string()))?;

        tracing::info!(projects = projects.len(), "Content exported");

        Ok(ContentExport {
            exported_at: Utc::now(),
            projects,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{admin_session, anonymous_session};
    use crate::tests::support::in_memory_store::{InMemoryContentStore, InMemorySettingsRepository};
    use crate::tests::support::project_test_fixtures::{project_result, with_case_study};

    #[tokio::test]
    async fn test_exports_drafts_and_settings() {
        let store = InMemoryContentStore::default();
        store
            .seed(with_case_study(project_result("live", true), true))
            .await;
        store
            .seed(with_case_study(project_result("draft", false), false))
            .await;
        let settings = InMemorySettingsRepository::default();
        settings
            .upsert_cv("https://a.test/cv.pdf".to_string(), None)
            .await
            .unwrap();

        let export = ExportContentUseCase::new(store, settings)
            .execute(&admin_session())
            .await
            .unwrap();

        let mut slugs: Vec<_> = export.projects.iter().map(|p| p.project.slug.as_str()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["draft", "live"]);
        assert!(export.settings.is_some());
    }

    #[tokio::test]
    async fn test_requires_admin() {
        let result = ExportContentUseCase::new(
            InMemoryContentStore::default(),
            InMemorySettingsRepository::default(),
        )
        .execute(&anonymous_session())
        .await;

        assert_eq!(result.unwrap_err(), ExportContentError::Unauthorized);
    }
}
