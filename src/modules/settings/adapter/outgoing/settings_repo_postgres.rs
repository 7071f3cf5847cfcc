use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use super::sea_orm_entity::{ActiveModel, Column, Entity, SETTINGS_ROW_ID};
use crate::settings::application::ports::outgoing::{SettingsRepository, SettingsRepositoryError};
use crate::settings::domain::entities::CvSettings;

#[derive(Clone)]
pub struct SettingsRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl SettingsRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SettingsRepoPostgres {
    async fn get_settings(&self) -> Result<Option<CvSettings>, SettingsRepositoryError> {
        let row = Entity::find_by_id(SETTINGS_ROW_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn upsert_cv(
        &self,
        cv_url: String,
        cv_file_name: Option<String>,
    ) -> Result<CvSettings, SettingsRepositoryError> {
        let active = ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            cv_url: Set(Some(cv_url)),
            cv_file_name: Set(cv_file_name),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let saved = Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::CvUrl, Column::CvFileName, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(saved.to_domain())
    }

    async fn clear_cv(&self) -> Result<(), SettingsRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::CvUrl, Expr::value(Option::<String>::None))
            .col_expr(Column::CvFileName, Expr::value(Option::<String>::None))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(SETTINGS_ROW_ID))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(rows = result.rows_affected, "Cleared CV columns");
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SettingsRepositoryError {
    SettingsRepositoryError::DatabaseError(e.to_string())
}
