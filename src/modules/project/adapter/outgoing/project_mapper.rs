use crate::case_study::adapter::outgoing::case_study_mapper::to_case_study_result;
use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies;
use crate::project::adapter::outgoing::sea_orm_entity::projects;
use crate::project::application::ports::outgoing::project_repository::{
    ProjectResult, ProjectWithCaseStudy,
};

pub(crate) fn to_project_result(model: projects::Model) -> Result<ProjectResult, serde_json::Error> {
    Ok(ProjectResult {
        id: model.id,
        title: model.title,
        slug: model.slug,
        short_desc: model.short_desc,
        full_desc: model.full_desc,
        tech_stack: serde_json::from_value(model.tech_stack)?,
        github_url: model.github_url,
        demo_url: model.demo_url,
        cover_image: model.cover_image,
        is_featured: model.is_featured,
        is_published: model.is_published,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

pub(crate) fn to_project_with_case_study(
    project: projects::Model,
    case_study: Option<case_studies::Model>,
) -> Result<ProjectWithCaseStudy, serde_json::Error> {
    Ok(ProjectWithCaseStudy {
        project: to_project_result(project)?,
        case_study: case_study.map(to_case_study_result).transpose()?,
    })
}
