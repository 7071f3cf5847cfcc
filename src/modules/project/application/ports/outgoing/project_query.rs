// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use super::project_repository::ProjectWithCaseStudy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, joins case_studies)
// ──────────────────────────────────────────────────────────
// Lists are ordered by created_at, newest first.
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list_projects(
        &self,
        published_only: bool,
    ) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError>;

    async fn find_by_slug(&self, slug: &str)
        -> Result<Option<ProjectWithCaseStudy>, ProjectQueryError>;

    /// Published projects that have a case study.
    async fn list_case_studies(&self) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError>;
}
