mod create_case_study_service;
mod delete_case_study_service;
mod get_case_studies_service;
mod patch_case_study_service;

pub use create_case_study_service::CreateCaseStudyService;
pub use delete_case_study_service::DeleteCaseStudyService;
pub use get_case_studies_service::GetCaseStudiesService;
pub use patch_case_study_service::PatchCaseStudyService;
