use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::incoming::use_cases::{
    PatchProjectError, PatchProjectInput, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectResult,
};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};

pub struct PatchProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R> PatchProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R, revalidator: Arc<dyn PathRevalidator>) -> Self {
        Self {
            project_repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> PatchProjectUseCase for PatchProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        project_id: Uuid,
        input: PatchProjectInput,
    ) -> Result<ProjectResult, PatchProjectError> {
        session.require_admin()?;
        let data = input.validate()?;

        let updated = self
            .project_repository
            .patch_project(project_id, data)
            .await?;

        tracing::info!(project_id = %updated.id, slug = %updated.slug, "Project updated");
        mark_stale(
            self.revalidator.as_ref(),
            paths::after_project_updated(&updated.slug),
        )
        .await;

        Ok(updated)
    }
}
