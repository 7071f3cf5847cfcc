mod create_case_study;
mod delete_case_study;
mod get_case_studies;
mod patch_case_study;

pub use create_case_study::{__path_create_case_study_handler, create_case_study_handler};
pub use delete_case_study::{__path_delete_case_study_handler, delete_case_study_handler};
pub use get_case_studies::{
    __path_get_case_studies_handler, __path_get_case_study_by_slug_handler,
    get_case_studies_handler, get_case_study_by_slug_handler,
};
pub use patch_case_study::{__path_patch_case_study_handler, patch_case_study_handler};
