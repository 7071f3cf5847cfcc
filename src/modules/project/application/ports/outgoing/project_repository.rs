// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::case_study::application::ports::outgoing::{CaseStudyResult, CreateCaseStudyData};
use crate::shared::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectData {
    pub title: String,
    pub slug: String,
    pub short_desc: String,
    pub full_desc: String,
    /// Stored as JSONB in DB (array of strings)
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub cover_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    /// Written in the same transaction as the project row
    pub case_study: Option<CreateCaseStudyData>,
}

/// Patch semantics:
/// - title/slug/short_desc/full_desc/flags: Unset => keep, Value => replace
/// - tech_stack: Value(vec) => replace whole array (no merge)
/// - github_url/demo_url/cover_image: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub slug: PatchField<String>,
    pub short_desc: PatchField<String>,
    pub full_desc: PatchField<String>,
    pub tech_stack: PatchField<Vec<String>>,
    pub github_url: PatchField<String>,
    pub demo_url: PatchField<String>,
    pub cover_image: PatchField<String>,
    pub is_featured: PatchField<bool>,
    pub is_published: PatchField<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectResult {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_desc: String,
    pub full_desc: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub cover_image: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A project together with its optional case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectWithCaseStudy {
    #[serde(flatten)]
    pub project: ProjectResult,
    pub case_study: Option<CaseStudyResult>,
}

/// What happens to an attached case study when its project is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Remove the case study in the same transaction
    #[default]
    Cascade,
    /// Refuse while a case study is attached
    Restrict,
}

impl std::str::FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascade" => Ok(DeletePolicy::Cascade),
            "restrict" => Ok(DeletePolicy::Restrict),
            other => Err(format!("unknown project delete policy: {other}")),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    /// Global unique slug violated on insert or slug update.
    #[error("Slug already exists")]
    SlugAlreadyExists,

    /// Restrict policy refused the delete.
    #[error("Project still has a case study")]
    HasCaseStudy,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectWithCaseStudy, ProjectRepositoryError>;

    /// Patch without pre-read by the use case.
    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    async fn delete_project(
        &self,
        project_id: Uuid,
        policy: DeletePolicy,
    ) -> Result<(), ProjectRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_policy_parses_case_insensitively() {
        assert_eq!("cascade".parse::<DeletePolicy>(), Ok(DeletePolicy::Cascade));
        assert_eq!(" RESTRICT ".parse::<DeletePolicy>(), Ok(DeletePolicy::Restrict));
        assert!("orphan".parse::<DeletePolicy>().is_err());
        assert_eq!(DeletePolicy::default(), DeletePolicy::Cascade);
    }
}
