use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::case_study::application::ports::incoming::use_cases::CreateCaseStudyInput;
use crate::modules::project::application::domain::{normalize_slug, slugify};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRepositoryError, ProjectWithCaseStudy,
};
use crate::shared::validation::{
    clean_list, optional_http_url, optional_text, required_text, ValidationError,
};

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProjectInput {
    #[schema(example = "My Cool App")]
    pub title: String,

    /// Derived from the title when omitted
    #[serde(default)]
    #[schema(example = "my-cool-app")]
    pub slug: Option<String>,

    #[serde(default)]
    pub short_desc: String,

    #[serde(default)]
    pub full_desc: String,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[serde(default)]
    pub github_url: Option<String>,

    #[serde(default)]
    pub demo_url: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_published: bool,

    /// Stored in the same transaction as the project
    #[serde(default)]
    pub case_study: Option<CreateCaseStudyInput>,
}

impl CreateProjectInput {
    pub fn validate(self) -> Result<CreateProjectData, ValidationError> {
        let title = required_text("title", &self.title)?;

        let slug = match optional_text(self.slug.as_deref()) {
            Some(raw) => normalize_slug(&raw)?,
            None => slugify(&title)?,
        };

        Ok(CreateProjectData {
            title,
            slug,
            short_desc: self.short_desc.trim().to_string(),
            full_desc: self.full_desc.trim().to_string(),
            tech_stack: clean_list(&self.tech_stack),
            github_url: optional_http_url("github_url", self.github_url.as_deref())?,
            demo_url: optional_http_url("demo_url", self.demo_url.as_deref())?,
            cover_image: optional_http_url("cover_image", self.cover_image.as_deref())?,
            is_featured: self.is_featured,
            is_published: self.is_published,
            case_study: self
                .case_study
                .map(CreateCaseStudyInput::validate)
                .transpose()?,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for CreateProjectError {
    fn from(_: AuthorizationError) -> Self {
        CreateProjectError::Unauthorized
    }
}

impl From<ValidationError> for CreateProjectError {
    fn from(e: ValidationError) -> Self {
        CreateProjectError::Validation(e.0)
    }
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        match e {
            ProjectRepositoryError::SlugAlreadyExists => CreateProjectError::SlugAlreadyExists,
            ProjectRepositoryError::DatabaseError(msg) => CreateProjectError::RepositoryError(msg),
            other => CreateProjectError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        input: CreateProjectInput,
    ) -> Result<ProjectWithCaseStudy, CreateProjectError>;
}
