use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectInput, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectWithCaseStudy,
};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R> CreateProjectService<R>
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
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        input: CreateProjectInput,
    ) -> Result<ProjectWithCaseStudy, CreateProjectError> {
        session.require_admin()?;
        let data = input.validate()?;

        let created = self.project_repository.create_project(data).await?;

        tracing::info!(
            project_id = %created.project.id,
            slug = %created.project.slug,
            with_case_study = created.case_study.is_some(),
            "Project created"
        );
        mark_stale(self.revalidator.as_ref(), paths::after_project_created()).await;

        Ok(created)
    }
}
