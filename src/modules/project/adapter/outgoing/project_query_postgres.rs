// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies;
use crate::project::adapter::outgoing::project_mapper::to_project_with_case_study;
use crate::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(
        &self,
        published_only: bool,
    ) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
        let mut query = Entity::find().find_also_related(case_studies::Entity);

        if published_only {
            query = query.filter(Column::IsPublished.eq(true));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        map_rows(rows)
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProjectWithCaseStudy>, ProjectQueryError> {
        let normalized_slug = slug.trim().to_lowercase();

        let row = Entity::find()
            .filter(Column::Slug.eq(normalized_slug))
            .find_also_related(case_studies::Entity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|(project, case_study)| to_project_with_case_study(project, case_study))
            .transpose()
            .map_err(map_json_err)
    }

    async fn list_case_studies(&self) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
        let rows = Entity::find()
            .find_also_related(case_studies::Entity)
            .filter(Column::IsPublished.eq(true))
            .filter(case_studies::Column::Id.is_not_null())
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        map_rows(rows)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_rows(
    rows: Vec<(projects::Model, Option<case_studies::Model>)>,
) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
    rows.into_iter()
        .map(|(project, case_study)| to_project_with_case_study(project, case_study))
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_json_err)
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(format!("Invalid JSON column: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
