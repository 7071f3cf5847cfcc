mod create_project;
mod get_project_by_slug;
mod get_projects;
mod hard_delete_project;
mod patch_project;

pub use create_project::{__path_create_project_handler, create_project_handler};
pub use get_project_by_slug::{__path_get_project_by_slug_handler, get_project_by_slug_handler};
pub use get_projects::{
    __path_get_admin_projects_handler, __path_get_projects_handler, get_admin_projects_handler,
    get_projects_handler,
};
pub use hard_delete_project::{__path_hard_delete_project_handler, hard_delete_project_handler};
pub use patch_project::{__path_patch_project_handler, patch_project_handler};
