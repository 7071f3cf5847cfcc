use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectBySlugUseCase, GetProjectsUseCase, HardDeleteProjectUseCase,
    PatchProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProjectUseCase + Send + Sync>,
    pub hard_delete: Arc<dyn HardDeleteProjectUseCase + Send + Sync>,
}
