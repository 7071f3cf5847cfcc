pub(crate) mod case_study_mapper;
mod case_study_repository_postgres;
pub mod sea_orm_entity;

pub use case_study_repository_postgres::CaseStudyRepositoryPostgres;
