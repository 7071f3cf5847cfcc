use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::case_study::application::ports::incoming::use_cases::{
    CreateCaseStudyError, CreateCaseStudyInput, CreateCaseStudyUseCase,
};
use crate::case_study::application::ports::outgoing::{CaseStudyRepository, CaseStudyResult};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};

pub struct CreateCaseStudyService<R>
where
    R: CaseStudyRepository,
{
    repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R> CreateCaseStudyService<R>
where
    R: CaseStudyRepository,
{
    pub fn new(repository: R, revalidator: Arc<dyn PathRevalidator>) -> Self {
        Self {
            repository,
            revalidator,
        }
    }
}

#[async_trait]
impl<R> CreateCaseStudyUseCase for CreateCaseStudyService<R>
where
    R: CaseStudyRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        project_id: Uuid,
        input: CreateCaseStudyInput,
    ) -> Result<CaseStudyResult, CreateCaseStudyError> {
        session.require_admin()?;
        let data = input.validate()?;

        let created = self.repository.create_case_study(project_id, data).await?;

        tracing::info!(case_study_id = %created.id, %project_id, "Case study created");
        mark_stale(self.revalidator.as_ref(), paths::after_case_study_changed()).await;

        Ok(created)
    }
}
