use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::incoming::use_cases::{
    HardDeleteProjectError, HardDeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    DeletePolicy, ProjectRepository,
};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};

pub struct HardDeleteProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    revalidator: Arc<dyn PathRevalidator>,
    policy: DeletePolicy,
}

impl<R> HardDeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(
        project_repository: R,
        revalidator: Arc<dyn PathRevalidator>,
        policy: DeletePolicy,
    ) -> Self {
        Self {
            project_repository,
            revalidator,
            policy,
        }
    }
}

#[async_trait]
impl<R> HardDeleteProjectUseCase for HardDeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        project_id: Uuid,
    ) -> Result<(), HardDeleteProjectError> {
        session.require_admin()?;

        self.project_repository
            .delete_project(project_id, self.policy)
            .await?;

        tracing::info!(%project_id, policy = ?self.policy, "Project deleted");
        mark_stale(self.revalidator.as_ref(), paths::after_project_deleted()).await;

        Ok(())
    }
}
