mod create_project_service;
mod get_projects_service;
mod hard_delete_project_service;
mod patch_project_service;

pub use create_project_service::CreateProjectService;
pub use get_projects_service::GetProjectsService;
pub use hard_delete_project_service::HardDeleteProjectService;
pub use patch_project_service::PatchProjectService;
