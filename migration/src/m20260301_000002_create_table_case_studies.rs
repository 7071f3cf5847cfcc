use sea_orm_migration::prelude::*;

use crate::m20260301_000001_create_table_projects::Projects;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create case_studies table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CaseStudies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaseStudies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CaseStudies::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(CaseStudies::Overview).text().not_null())
                    .col(ColumnDef::new(CaseStudies::Problem).text().not_null())
                    .col(ColumnDef::new(CaseStudies::Solution).text().not_null())
                    .col(ColumnDef::new(CaseStudies::Challenges).text().not_null())
                    .col(ColumnDef::new(CaseStudies::Architecture).text())
                    .col(
                        ColumnDef::new(CaseStudies::Screenshots)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CaseStudies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CaseStudies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_case_studies_project_id")
                            .from(CaseStudies::Table, CaseStudies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One case study per project.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_case_studies_project_id_unique
                ON case_studies (project_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_case_studies_updated_at
                BEFORE UPDATE ON case_studies
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_case_studies_updated_at ON case_studies",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CaseStudies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CaseStudies {
    Table,
    Id,
    ProjectId,
    Overview,
    Problem,
    Solution,
    Challenges,
    Architecture,
    Screenshots,
    CreatedAt,
    UpdatedAt,
}
