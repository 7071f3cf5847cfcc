use std::sync::Arc;

use crate::case_study::application::ports::incoming::use_cases::{
    CreateCaseStudyUseCase, DeleteCaseStudyUseCase, GetCaseStudiesUseCase, PatchCaseStudyUseCase,
};

#[derive(Clone)]
pub struct CaseStudyUseCases {
    pub create: Arc<dyn CreateCaseStudyUseCase + Send + Sync>,
    pub get: Arc<dyn GetCaseStudiesUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchCaseStudyUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCaseStudyUseCase + Send + Sync>,
}
