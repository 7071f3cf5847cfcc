use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::case_study::application::ports::outgoing::CaseStudyRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteCaseStudyError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("case study not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for DeleteCaseStudyError {
    fn from(_: AuthorizationError) -> Self {
        DeleteCaseStudyError::Unauthorized
    }
}

impl From<CaseStudyRepositoryError> for DeleteCaseStudyError {
    fn from(e: CaseStudyRepositoryError) -> Self {
        match e {
            CaseStudyRepositoryError::NotFound => DeleteCaseStudyError::NotFound,
            other => DeleteCaseStudyError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteCaseStudyUseCase: Send + Sync {
    async fn execute(&self, session: &Session, case_study_id: Uuid)
        -> Result<(), DeleteCaseStudyError>;
}
