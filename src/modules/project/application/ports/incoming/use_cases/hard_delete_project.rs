use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HardDeleteProjectError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Project still has a case study")]
    HasCaseStudy,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for HardDeleteProjectError {
    fn from(_: AuthorizationError) -> Self {
        HardDeleteProjectError::Unauthorized
    }
}

impl From<ProjectRepositoryError> for HardDeleteProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => HardDeleteProjectError::ProjectNotFound,
            ProjectRepositoryError::HasCaseStudy => HardDeleteProjectError::HasCaseStudy,
            ProjectRepositoryError::DatabaseError(msg) => {
                HardDeleteProjectError::RepositoryError(msg)
            }
            other => HardDeleteProjectError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait HardDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, session: &Session, project_id: Uuid)
        -> Result<(), HardDeleteProjectError>;
}
