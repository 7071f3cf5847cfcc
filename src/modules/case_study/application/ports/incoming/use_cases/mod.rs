mod create_case_study;
mod delete_case_study;
mod get_case_studies;
mod patch_case_study;

pub use create_case_study::{CreateCaseStudyError, CreateCaseStudyInput, CreateCaseStudyUseCase};
pub use delete_case_study::{DeleteCaseStudyError, DeleteCaseStudyUseCase};
pub use get_case_studies::{GetCaseStudiesError, GetCaseStudiesUseCase};
pub use patch_case_study::{PatchCaseStudyError, PatchCaseStudyInput, PatchCaseStudyUseCase};
