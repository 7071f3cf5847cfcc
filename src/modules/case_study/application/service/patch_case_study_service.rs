use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::case_study::application::ports::incoming::use_cases::{
    PatchCaseStudyError, PatchCaseStudyInput, PatchCaseStudyUseCase,
};
use crate::case_study::application::ports::outgoing::{CaseStudyRepository, CaseStudyResult};
use crate::revalidation::application::paths;
use crate::revalidation::application::ports::outgoing::{mark_stale, PathRevalidator};

pub struct PatchCaseStudyService<R>
where
    R: CaseStudyRepository,
{
    repository: R,
    revalidator: Arc<dyn PathRevalidator>,
}

impl<R> PatchCaseStudyService<R>
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
impl<R> PatchCaseStudyUseCase for PatchCaseStudyService<R>
where
    R: CaseStudyRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        case_study_id: Uuid,
        input: PatchCaseStudyInput,
    ) -> Result<CaseStudyResult, PatchCaseStudyError> {
        session.require_admin()?;
        let data = input.validate()?;

        let updated = self
            .repository
            .patch_case_study(case_study_id, data)
            .await?;

        tracing::info!(%case_study_id, "Case study updated");
        mark_stale(self.revalidator.as_ref(), paths::after_case_study_changed()).await;

        Ok(updated)
    }
}
