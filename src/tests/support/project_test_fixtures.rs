use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies;
use crate::case_study::application::ports::outgoing::CaseStudyResult;
use crate::project::adapter::outgoing::sea_orm_entity::projects;
use crate::project::application::ports::outgoing::{ProjectResult, ProjectWithCaseStudy};

pub fn project_result(slug: &str, is_published: bool) -> ProjectResult {
    let now = Utc::now();
    ProjectResult {
        id: Uuid::new_v4(),
        title: "Test Project".to_string(),
        slug: slug.to_string(),
        short_desc: "Short".to_string(),
        full_desc: "Full".to_string(),
        tech_stack: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        github_url: Some("https://github.com/user/repo".to_string()),
        demo_url: Some("https://demo.example.com".to_string()),
        cover_image: None,
        is_featured: false,
        is_published,
        created_at: now,
        updated_at: now,
    }
}

pub fn case_study_result(project_id: Uuid) -> CaseStudyResult {
    let now = Utc::now();
    CaseStudyResult {
        id: Uuid::new_v4(),
        project_id,
        overview: "Overview".to_string(),
        problem: "Problem".to_string(),
        solution: "Solution".to_string(),
        challenges: "Challenges".to_string(),
        architecture: Some("Hexagonal".to_string()),
        screenshots: vec!["https://img.example.com/a.png".to_string()],
        created_at: now,
        updated_at: now,
    }
}

/// Wraps a project, attaching a case study owned by it when `has` is set.
pub fn with_case_study(project: ProjectResult, has: bool) -> ProjectWithCaseStudy {
    let case_study = has.then(|| case_study_result(project.id));
    ProjectWithCaseStudy {
        project,
        case_study,
    }
}

pub fn project_model(id: Uuid, slug: &str, is_published: bool) -> projects::Model {
    let now = Utc::now().fixed_offset();
    projects::Model {
        id,
        title: "Test Project".to_string(),
        slug: slug.to_string(),
        short_desc: "Short".to_string(),
        full_desc: "Full".to_string(),
        tech_stack: json!(["Rust", "PostgreSQL"]),
        github_url: Some("https://github.com/user/repo".to_string()),
        demo_url: Some("https://demo.example.com".to_string()),
        cover_image: None,
        is_featured: false,
        is_published,
        created_at: now,
        updated_at: now,
    }
}

pub fn case_study_model(id: Uuid, project_id: Uuid) -> case_studies::Model {
    let now = Utc::now().fixed_offset();
    case_studies::Model {
        id,
        project_id,
        overview: "Overview".to_string(),
        problem: "Problem".to_string(),
        solution: "Solution".to_string(),
        challenges: "Challenges".to_string(),
        architecture: Some("Hexagonal".to_string()),
        screenshots: json!(["https://img.example.com/a.png"]),
        created_at: now,
        updated_at: now,
    }
}
