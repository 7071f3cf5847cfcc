// src/modules/case_study/application/ports/outgoing/case_study_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Validated case-study content, ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCaseStudyData {
    pub overview: String,
    pub problem: String,
    pub solution: String,
    pub challenges: String,
    pub architecture: Option<String>,
    /// Stored as JSONB (array of URLs)
    pub screenshots: Vec<String>,
}

/// Patch semantics:
/// - overview/problem/solution/challenges: Unset => keep, Value => replace
/// - architecture: Unset => keep, Null => clear, Value => set
/// - screenshots: Value(vec) => replace the whole array
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchCaseStudyData {
    pub overview: PatchField<String>,
    pub problem: PatchField<String>,
    pub solution: PatchField<String>,
    pub challenges: PatchField<String>,
    pub architecture: PatchField<String>,
    pub screenshots: PatchField<Vec<String>>,
}

impl PatchCaseStudyData {
    pub fn is_empty(&self) -> bool {
        self.overview.is_unset()
            && self.problem.is_unset()
            && self.solution.is_unset()
            && self.challenges.is_unset()
            && self.architecture.is_unset()
            && self.screenshots.is_unset()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CaseStudyResult {
    pub id: Uuid,
    pub project_id: Uuid,
    pub overview: String,
    pub problem: String,
    pub solution: String,
    pub challenges: String,
    pub architecture: Option<String>,
    pub screenshots: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseStudyRepositoryError {
    #[error("Case study not found")]
    NotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Project already has a case study")]
    CaseStudyAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (case_studies table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CaseStudyRepository: Send + Sync {
    async fn create_case_study(
        &self,
        project_id: Uuid,
        data: CreateCaseStudyData,
    ) -> Result<CaseStudyResult, CaseStudyRepositoryError>;

    async fn patch_case_study(
        &self,
        case_study_id: Uuid,
        data: PatchCaseStudyData,
    ) -> Result<CaseStudyResult, CaseStudyRepositoryError>;

    async fn delete_case_study(&self, case_study_id: Uuid)
        -> Result<(), CaseStudyRepositoryError>;
}
