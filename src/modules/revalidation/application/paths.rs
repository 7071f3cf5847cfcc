//! Public routes whose rendered output depends on stored content.

pub const HOME: &str = "/";
pub const CONTACT: &str = "/contact";
pub const PROJECTS: &str = "/projects";
pub const CASE_STUDIES: &str = "/case-studies";
pub const ADMIN_PROJECTS: &str = "/admin/projects";

pub fn project_detail(slug: &str) -> String {
    format!("{PROJECTS}/{slug}")
}

pub fn case_study_detail(slug: &str) -> String {
    format!("{CASE_STUDIES}/{slug}")
}

pub fn after_project_created() -> Vec<String> {
    vec![
        PROJECTS.to_string(),
        CASE_STUDIES.to_string(),
        ADMIN_PROJECTS.to_string(),
    ]
}

pub fn after_project_updated(slug: &str) -> Vec<String> {
    vec![
        PROJECTS.to_string(),
        project_detail(slug),
        case_study_detail(slug),
        ADMIN_PROJECTS.to_string(),
    ]
}

pub fn after_project_deleted() -> Vec<String> {
    after_project_created()
}

pub fn after_case_study_changed() -> Vec<String> {
    vec![CASE_STUDIES.to_string(), ADMIN_PROJECTS.to_string()]
}

pub fn after_cv_changed() -> Vec<String> {
    vec![HOME.to_string(), CONTACT.to_string()]
}
