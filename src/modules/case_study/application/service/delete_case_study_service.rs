use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::case_study::application::ports::incoming::use_cases::{
    DeleteCaseStudyError, DeleteCaseStudyUseCase,
};
use crate::case_study::application::ports::outgoing::CaseStudyRepository;
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};

pub struct DeleteCaseStudyService<R>
where
    R: CaseStudyRepository,
{
    repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R> DeleteCaseStudyService<R>
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
impl<R> DeleteCaseStudyUseCase for DeleteCaseStudyService<R>
where
    R: CaseStudyRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        case_study_id: Uuid,
    ) -> Result<(), DeleteCaseStudyError> {
        session.require_admin()?;

        self.repository.delete_case_study(case_study_id).await?;

        tracing::info!(%case_study_id, "Case study deleted");
        mark_stale(self.revalidator.as_ref(), paths::after_case_study_changed()).await;

        Ok(())
    }
}
