mod create_project;
mod get_project_by_slug;
mod get_projects;
mod hard_delete_project;
mod patch_project;

pub use create_project::{CreateProjectError, CreateProjectInput, CreateProjectUseCase};
pub use get_project_by_slug::GetProjectBySlugUseCase;
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use hard_delete_project::{HardDeleteProjectError, HardDeleteProjectUseCase};
pub use patch_project::{PatchProjectError, PatchProjectInput, PatchProjectUseCase};
