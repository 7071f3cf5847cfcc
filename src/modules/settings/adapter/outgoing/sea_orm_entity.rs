use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::settings::domain::entities::CvSettings;

/// Constant key of the single settings row.
pub const SETTINGS_ROW_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub cv_url: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub cv_file_name: Option<String>,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> CvSettings {
        CvSettings {
            cv_url: self.cv_url.clone(),
            cv_file_name: self.cv_file_name.clone(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}
