use async_trait::async_trait;

use crate::project::application::ports::outgoing::{ProjectQueryError, ProjectWithCaseStudy};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetCaseStudiesError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectQueryError> for GetCaseStudiesError {
    fn from(e: ProjectQueryError) -> Self {
        GetCaseStudiesError::RepositoryError(e.to_string())
    }
}

/// Public read side: only published projects that carry a case study.
#[async_trait]
pub trait GetCaseStudiesUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<ProjectWithCaseStudy>, GetCaseStudiesError>;

    async fn by_slug(&self, slug: &str)
        -> Result<Option<ProjectWithCaseStudy>, GetCaseStudiesError>;
}
