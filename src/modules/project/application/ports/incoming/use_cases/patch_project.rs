use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthorizationError, Session};
use crate::modules::project::application::domain::normalize_slug;
use crate::modules::project::application::ports::outgoing::project_repository::{
    PatchProjectData, ProjectRepositoryError, ProjectResult,
};
use crate::shared::validation::{clean_list, http_url, required_text, ValidationError};
use crate::shared::PatchField;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchProjectInput {
    #[serde(default)]
    pub title: PatchField<String>,
    #[serde(default)]
    pub slug: PatchField<String>,
    #[serde(default)]
    pub short_desc: PatchField<String>,
    #[serde(default)]
    pub full_desc: PatchField<String>,
    #[serde(default)]
    pub tech_stack: PatchField<Vec<String>>,
    #[serde(default)]
    pub github_url: PatchField<String>,
    #[serde(default)]
    pub demo_url: PatchField<String>,
    #[serde(default)]
    pub cover_image: PatchField<String>,
    #[serde(default)]
    pub is_featured: PatchField<bool>,
    #[serde(default)]
    pub is_published: PatchField<bool>,
}

fn not_null<T>(field: &str, value: PatchField<T>) -> Result<PatchField<T>, ValidationError> {
    if value.is_null() {
        return Err(ValidationError::new(format!("{field} cannot be null")));
    }
    Ok(value)
}

/// Nullable URL column: blank clears it like an explicit null.
fn url_patch(field: &str, value: PatchField<String>) -> Result<PatchField<String>, ValidationError> {
    match value {
        PatchField::Value(v) if v.trim().is_empty() => Ok(PatchField::Null),
        other => other.try_map(|v| http_url(field, &v)),
    }
}

impl PatchProjectInput {
    pub fn validate(self) -> Result<PatchProjectData, ValidationError> {
        Ok(PatchProjectData {
            title: not_null("title", self.title)?.try_map(|v| required_text("title", &v))?,
            slug: not_null("slug", self.slug)?.try_map(|v| normalize_slug(&v))?,
            short_desc: not_null("short_desc", self.short_desc)?
                .try_map(|v| Ok::<_, ValidationError>(v.trim().to_string()))?,
            full_desc: not_null("full_desc", self.full_desc)?
                .try_map(|v| Ok::<_, ValidationError>(v.trim().to_string()))?,
            tech_stack: match self.tech_stack {
                PatchField::Null => PatchField::Value(Vec::new()),
                other => other.try_map(|v| Ok::<_, ValidationError>(clean_list(&v)))?,
            },
            github_url: url_patch("github_url", self.github_url)?,
            demo_url: url_patch("demo_url", self.demo_url)?,
            cover_image: url_patch("cover_image", self.cover_image)?,
            is_featured: not_null("is_featured", self.is_featured)?,
            is_published: not_null("is_published", self.is_published)?,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchProjectError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("project not found")]
    NotFound,

    #[error("slug already exists")]
    SlugAlreadyExists,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

impl From<AuthorizationError> for PatchProjectError {
    fn from(_: AuthorizationError) -> Self {
        PatchProjectError::Unauthorized
    }
}

impl From<ValidationError> for PatchProjectError {
    fn from(e: ValidationError) -> Self {
        PatchProjectError::Validation(e.0)
    }
}

impl From<ProjectRepositoryError> for PatchProjectError {
    fn from(e: ProjectRepositoryError) -> Self {
        match e {
            ProjectRepositoryError::NotFound => PatchProjectError::NotFound,
            ProjectRepositoryError::SlugAlreadyExists => PatchProjectError::SlugAlreadyExists,
            ProjectRepositoryError::DatabaseError(msg) => PatchProjectError::RepositoryError(msg),
            other => PatchProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait PatchProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        project_id: Uuid,
        input: PatchProjectInput,
    ) -> Result<ProjectResult, PatchProjectError>;
}
