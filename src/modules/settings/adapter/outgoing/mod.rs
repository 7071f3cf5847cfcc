mod http_cv_fetcher;
pub mod sea_orm_entity;
mod settings_repo_postgres;

pub use http_cv_fetcher::HttpCvFetcher;
pub use settings_repo_postgres::SettingsRepoPostgres;
