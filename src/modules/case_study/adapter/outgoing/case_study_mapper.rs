use chrono::{DateTime, FixedOffset};
use sea_orm::Set;
use uuid::Uuid;

use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies::{self, ActiveModel};
use crate::case_study::application::ports::outgoing::{CaseStudyResult, CreateCaseStudyData};

/// Insert model for a new case study. Shared with the project repository,
/// which writes a nested case study inside its own transaction.
pub(crate) fn new_case_study_model(
    project_id: Uuid,
    data: CreateCaseStudyData,
    now: DateTime<FixedOffset>,
) -> Result<ActiveModel, serde_json::Error> {
    Ok(ActiveModel {
        id: Set(Uuid::new_v4()),
        project_id: Set(project_id),
        overview: Set(data.overview),
        problem: Set(data.problem),
        solution: Set(data.solution),
        challenges: Set(data.challenges),
        architecture: Set(data.architecture),
        screenshots: Set(serde_json::to_value(&data.screenshots)?),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

pub(crate) fn to_case_study_result(
    model: case_studies::Model,
) -> Result<CaseStudyResult, serde_json::Error> {
    Ok(CaseStudyResult {
        id: model.id,
        project_id: model.project_id,
        overview: model.overview,
        problem: model.problem,
        solution: model.solution,
        challenges: model.challenges,
        architecture: model.architecture,
        screenshots: serde_json::from_value(model.screenshots)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
