use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::project::adapter::outgoing::sea_orm_entity::projects;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_studies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    // One case study per project
    #[sea_orm(column_type = "Uuid", unique)]
    pub project_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub overview: String,

    #[sea_orm(column_type = "Text")]
    pub problem: String,

    #[sea_orm(column_type = "Text")]
    pub solution: String,

    #[sea_orm(column_type = "Text")]
    pub challenges: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub architecture: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub screenshots: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::project::adapter::outgoing::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::project::adapter::outgoing::sea_orm_entity::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Projects,
}

impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
