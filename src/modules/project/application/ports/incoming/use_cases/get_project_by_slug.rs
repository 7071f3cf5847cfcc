use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;

use super::GetProjectsError;

/// Exact-slug lookup regardless of publication state; callers decide what
/// an anonymous visitor may see.
#[async_trait]
pub trait GetProjectBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Option<ProjectWithCaseStudy>, GetProjectsError>;
}
