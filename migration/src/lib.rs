pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_projects;
mod m20260301_000002_create_table_case_studies;
mod m20260301_000003_create_table_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_projects::Migration),
            Box::new(m20260301_000002_create_table_case_studies::Migration),
            Box::new(m20260301_000003_create_table_settings::Migration),
        ]
    }
}
