use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::case_study::adapter::outgoing::sea_orm_entity::case_studies;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub title: String,

    #[sea_orm(column_type = "String(StringLen::N(150))", unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub short_desc: String,

    #[sea_orm(column_type = "Text")]
    pub full_desc: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub cover_image: Option<String>,

    pub is_featured: bool,

    pub is_published: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "crate::case_study::adapter::outgoing::sea_orm_entity::case_studies::Entity")]
    CaseStudies,
}

impl Related<case_studies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaseStudies.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
