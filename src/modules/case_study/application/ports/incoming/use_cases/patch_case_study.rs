use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::case_study::application::ports::outgoing::{
    CaseStudyRepositoryError, CaseStudyResult, PatchCaseStudyData,
};
use crate::shared::validation::{required_text, ValidationError};
use crate::shared::PatchField;

use super::create_case_study::validate_screenshots;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchCaseStudyInput {
    #[serde(default)]
    pub overview: PatchField<String>,
    #[serde(default)]
    pub problem: PatchField<String>,
    #[serde(default)]
    pub solution: PatchField<String>,
    #[serde(default)]
    pub challenges: PatchField<String>,
    #[serde(default)]
    pub architecture: PatchField<String>,
    #[serde(default)]
    pub screenshots: PatchField<Vec<String>>,
}

fn required_section(
    field: &str,
    value: PatchField<String>,
) -> Result<PatchField<String>, ValidationError> {
    if value.is_null() {
        return Err(ValidationError::new(format!("{field} cannot be null")));
    }
    value.try_map(|v| required_text(field, &v))
}

impl PatchCaseStudyInput {
    pub fn validate(self) -> Result<PatchCaseStudyData, ValidationError> {
        let architecture = match self.architecture {
            PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
            other => other.try_map(|v| Ok::<_, ValidationError>(v.trim().to_string()))?,
        };

        let screenshots = match self.screenshots {
            PatchField::Null => PatchField::Value(Vec::new()),
            other => other.try_map(|v| validate_screenshots(&v))?,
        };

        Ok(PatchCaseStudyData {
            overview: required_section("overview", self.overview)?,
            problem: required_section("problem", self.problem)?,
            solution: required_section("solution", self.solution)?,
            challenges: required_section("challenges", self.challenges)?,
            architecture,
            screenshots,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchCaseStudyError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("case study not found")]
    NotFound,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for PatchCaseStudyError {
    fn from(_: AuthorizationError) -> Self {
        PatchCaseStudyError::Unauthorized
    }
}

impl From<ValidationError> for PatchCaseStudyError {
    fn from(e: ValidationError) -> Self {
        PatchCaseStudyError::Validation(e.0)
    }
}

impl From<CaseStudyRepositoryError> for PatchCaseStudyError {
    fn from(e: CaseStudyRepositoryError) -> Self {
        match e {
            CaseStudyRepositoryError::NotFound => PatchCaseStudyError::NotFound,
            other => PatchCaseStudyError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait PatchCaseStudyUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        case_study_id: Uuid,
        input: PatchCaseStudyInput,
    ) -> Result<CaseStudyResult, PatchCaseStudyError>;
}
