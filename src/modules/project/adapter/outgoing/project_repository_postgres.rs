use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::case_study::adapter::outgoing::case_study_mapper::new_case_study_model;
use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies;
use crate::project::adapter::outgoing::project_mapper::{
    to_project_result, to_project_with_case_study,
};
use crate::project::adapter::outgoing::sea_orm_entity::projects::{ActiveModel, Column, Entity};
use crate::project::application::ports::outgoing::project_repository::{
    CreateProjectData, DeletePolicy, PatchProjectData, ProjectRepository, ProjectRepositoryError,
    ProjectResult, ProjectWithCaseStudy,
};
use crate::shared::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectWithCaseStudy, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();
        let project_id = Uuid::new_v4();

        let model = ActiveModel {
            id: Set(project_id),
            title: Set(data.title),
            slug: Set(data.slug),
            short_desc: Set(data.short_desc),
            full_desc: Set(data.full_desc),
            tech_stack: Set(serde_json::to_value(&data.tech_stack).map_err(map_json_err)?),
            github_url: Set(data.github_url),
            demo_url: Set(data.demo_url),
            cover_image: Set(data.cover_image),
            is_featured: Set(data.is_featured),
            is_published: Set(data.is_published),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // Project and nested case study land together or not at all.
        // Dropping the transaction on an early return rolls it back.
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let project = model.insert(&txn).await.map_err(map_slug_error)?;

        let case_study = match data.case_study {
            Some(cs) => {
                let cs_model =
                    new_case_study_model(project_id, cs, now).map_err(map_json_err)?;
                Some(cs_model.insert(&txn).await.map_err(map_db_err)?)
            }
            None => None,
        };

        txn.commit().await.map_err(map_db_err)?;

        to_project_with_case_study(project, case_study).map_err(map_json_err)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(slug) = data.slug {
            model.slug = Set(slug);
        }
        if let PatchField::Value(desc) = data.short_desc {
            model.short_desc = Set(desc);
        }
        if let PatchField::Value(desc) = data.full_desc {
            model.full_desc = Set(desc);
        }
        if let PatchField::Value(tech) = data.tech_stack {
            model.tech_stack = Set(serde_json::to_value(&tech).map_err(map_json_err)?);
        }

        match data.github_url {
            PatchField::Unset => {}
            PatchField::Null => model.github_url = Set(None),
            PatchField::Value(url) => model.github_url = Set(Some(url)),
        }

        match data.demo_url {
            PatchField::Unset => {}
            PatchField::Null => model.demo_url = Set(None),
            PatchField::Value(url) => model.demo_url = Set(Some(url)),
        }

        match data.cover_image {
            PatchField::Unset => {}
            PatchField::Null => model.cover_image = Set(None),
            PatchField::Value(url) => model.cover_image = Set(Some(url)),
        }

        if let PatchField::Value(flag) = data.is_featured {
            model.is_featured = Set(flag);
        }
        if let PatchField::Value(flag) = data.is_published {
            model.is_published = Set(flag);
        }

        let has_changes = model.title.is_set()
            || model.slug.is_set()
            || model.short_desc.is_set()
            || model.full_desc.is_set()
            || model.tech_stack.is_set()
            || model.github_url.is_set()
            || model.demo_url.is_set()
            || model.cover_image.is_set()
            || model.is_featured.is_set()
            || model.is_published.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return to_project_result(result).map_err(map_json_err);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        to_project_result(result).map_err(map_json_err)
    }

    async fn delete_project(
        &self,
        project_id: Uuid,
        policy: DeletePolicy,
    ) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if Entity::find_by_id(project_id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .is_none()
        {
            return Err(ProjectRepositoryError::NotFound);
        }

        let case_study = case_studies::Entity::find()
            .filter(case_studies::Column::ProjectId.eq(project_id))
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if case_study.is_some() {
            match policy {
                DeletePolicy::Restrict => return Err(ProjectRepositoryError::HasCaseStudy),
                DeletePolicy::Cascade => {
                    case_studies::Entity::delete_many()
                        .filter(case_studies::Column::ProjectId.eq(project_id))
                        .exec(&txn)
                        .await
                        .map_err(map_db_err)?;
                }
            }
        }

        Entity::delete_by_id(project_id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(format!("Invalid JSON column: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
