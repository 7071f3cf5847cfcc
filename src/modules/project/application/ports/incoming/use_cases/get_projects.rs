use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => GetProjectsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// Newest first. `published_only` hides drafts.
    async fn execute(
        &self,
        published_only: bool,
    ) -> Result<Vec<ProjectWithCaseStudy>, GetProjectsError>;
}
