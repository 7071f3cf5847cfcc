use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::case_study::adapter::outgoing::case_study_mapper::{
    new_case_study_model, to_case_study_result,
};
use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies::{
    ActiveModel, Column, Entity,
};
use crate::case_study::application::ports::outgoing::{
    CaseStudyRepository, CaseStudyRepositoryError, CaseStudyResult, CreateCaseStudyData,
    PatchCaseStudyData,
};
use crate::project::adapter::outgoing::sea_orm_entity::projects;
use crate::shared::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct CaseStudyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CaseStudyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CaseStudyRepository for CaseStudyRepositoryPostgres {
    async fn create_case_study(
        &self,
        project_id: Uuid,
        data: CreateCaseStudyData,
    ) -> Result<CaseStudyResult, CaseStudyRepositoryError> {
        let project = projects::Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        if project.is_none() {
            return Err(CaseStudyRepositoryError::ProjectNotFound);
        }

        let existing = Entity::find()
            .filter(Column::ProjectId.eq(project_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        if existing.is_some() {
            return Err(CaseStudyRepositoryError::CaseStudyAlreadyExists);
        }

        let model = new_case_study_model(project_id, data, Utc::now().fixed_offset())
            .map_err(map_json_err)?;

        // The unique index on project_id still guards a concurrent insert.
        let inserted = model.insert(&*self.db).await.map_err(map_insert_error)?;

        to_case_study_result(inserted).map_err(map_json_err)
    }

    async fn patch_case_study(
        &self,
        case_study_id: Uuid,
        data: PatchCaseStudyData,
    ) -> Result<CaseStudyResult, CaseStudyRepositoryError> {
        if data.is_empty() {
            let current = Entity::find_by_id(case_study_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(CaseStudyRepositoryError::NotFound)?;

            return to_case_study_result(current).map_err(map_json_err);
        }

        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(overview) = data.overview {
            model.overview = Set(overview);
        }
        if let PatchField::Value(problem) = data.problem {
            model.problem = Set(problem);
        }
        if let PatchField::Value(solution) = data.solution {
            model.solution = Set(solution);
        }
        if let PatchField::Value(challenges) = data.challenges {
            model.challenges = Set(challenges);
        }

        match data.architecture {
            PatchField::Unset => {}
            PatchField::Null => model.architecture = Set(None),
            PatchField::Value(text) => model.architecture = Set(Some(text)),
        }

        if let PatchField::Value(screens) = data.screenshots {
            model.screenshots = Set(serde_json::to_value(&screens).map_err(map_json_err)?);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(case_study_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let updated = results
            .into_iter()
            .next()
            .ok_or(CaseStudyRepositoryError::NotFound)?;

        to_case_study_result(updated).map_err(map_json_err)
    }

    async fn delete_case_study(&self, case_study_id: Uuid) -> Result<(), CaseStudyRepositoryError> {
        let result = Entity::delete_by_id(case_study_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CaseStudyRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_insert_error(e: DbErr) -> CaseStudyRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("project_id")
    {
        CaseStudyRepositoryError::CaseStudyAlreadyExists
    } else if msg.contains("foreign key") || msg.contains("23503") {
        CaseStudyRepositoryError::ProjectNotFound
    } else {
        CaseStudyRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> CaseStudyRepositoryError {
    CaseStudyRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> CaseStudyRepositoryError {
    CaseStudyRepositoryError::DatabaseError(format!("Invalid screenshots column: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
