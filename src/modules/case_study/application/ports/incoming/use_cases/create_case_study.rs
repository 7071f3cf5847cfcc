use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::case_study::application::ports::outgoing::{
    CaseStudyRepositoryError, CaseStudyResult, CreateCaseStudyData,
};
use crate::shared::validation::{
    clean_list, http_url, optional_text, required_text, ValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCaseStudyInput {
    pub overview: String,
    pub problem: String,
    pub solution: String,
    pub challenges: String,
    #[serde(default)]
    pub architecture: Option<String>,
    /// Absolute http(s) image URLs, in display order
    #[serde(default)]
    pub screenshots: Vec<String>,
}

impl CreateCaseStudyInput {
    pub fn validate(self) -> Result<CreateCaseStudyData, ValidationError> {
        Ok(CreateCaseStudyData {
            overview: required_text("overview", &self.overview)?,
            problem: required_text("problem", &self.problem)?,
            solution: required_text("solution", &self.solution)?,
            challenges: required_text("challenges", &self.challenges)?,
            architecture: optional_text(self.architecture.as_deref()),
            screenshots: validate_screenshots(&self.screenshots)?,
        })
    }
}

pub(crate) fn validate_screenshots(raw: &[String]) -> Result<Vec<String>, ValidationError> {
    clean_list(raw)
        .iter()
        .map(|url| http_url("screenshots", url))
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCaseStudyError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("project not found")]
    ProjectNotFound,

    #[error("project already has a case study")]
    CaseStudyAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for CreateCaseStudyError {
    fn from(_: AuthorizationError) -> Self {
        CreateCaseStudyError::Unauthorized
    }
}

impl From<ValidationError> for CreateCaseStudyError {
    fn from(e: ValidationError) -> Self {
        CreateCaseStudyError::Validation(e.0)
    }
}

impl From<CaseStudyRepositoryError> for CreateCaseStudyError {
    fn from(e: CaseStudyRepositoryError) -> Self {
        match e {
            CaseStudyRepositoryError::ProjectNotFound | CaseStudyRepositoryError::NotFound => {
                CreateCaseStudyError::ProjectNotFound
            }
            CaseStudyRepositoryError::CaseStudyAlreadyExists => {
                CreateCaseStudyError::CaseStudyAlreadyExists
            }
            CaseStudyRepositoryError::DatabaseError(msg) => {
                CreateCaseStudyError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCaseStudyUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        project_id: Uuid,
        input: CreateCaseStudyInput,
    ) -> Result<CaseStudyResult, CreateCaseStudyError>;
}
