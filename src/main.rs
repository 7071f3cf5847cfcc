pub mod modules;
pub use modules::{
    auth, case_study, contact, email, export, project, revalidation, settings, sitemap,
};
pub mod api;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::incoming::web::SessionCookie;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::{AdminCredentialVerifier, AdminCredentials};
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::case_study::adapter::outgoing::CaseStudyRepositoryPostgres;
use crate::case_study::application::case_study_use_cases::CaseStudyUseCases;
use crate::case_study::application::service::{
    CreateCaseStudyService, DeleteCaseStudyService, GetCaseStudiesService, PatchCaseStudyService,
};
use crate::contact::application::use_cases::submit_contact::{
    ContactConfig, ISubmitContactUseCase, SubmitContactUseCase,
};
use crate::email::adapter::outgoing::{SmtpConfig, SmtpEmailSender};
use crate::export::application::use_cases::export_content::{
    ExportContentUseCase, IExportContentUseCase,
};
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::domain::ContentPolicy;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{
    CreateProjectService, GetProjectsService, HardDeleteProjectService, PatchProjectService,
};
use crate::revalidation::adapter::outgoing::{
    FanoutRevalidator, InMemoryRevalidator, RevalidationConfig, WebhookRevalidator,
};
use crate::revalidation::application::ports::outgoing::PathRevalidator;
use crate::settings::adapter::outgoing::{HttpCvFetcher, SettingsRepoPostgres};
use crate::settings::application::cv_use_cases::CvUseCases;
use crate::settings::application::use_cases::{
    delete_cv::DeleteCvUseCase, download_cv::DownloadCvUseCase, get_cv::GetCvUseCase,
    update_cv::UpdateCvUseCase,
};
use crate::shared::api::custom_json_config;
use crate::sitemap::application::site_config::SiteConfig;
use crate::sitemap::application::use_cases::build_sitemap::{
    BuildSitemapUseCase, IBuildSitemapUseCase,
};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub session_cookie: SessionCookie,
    pub project: ProjectUseCases,
    pub case_study: CaseStudyUseCases,
    pub cv: CvUseCases,
    pub contact_use_case: Arc<dyn ISubmitContactUseCase + Send + Sync>,
    pub sitemap: Arc<dyn IBuildSitemapUseCase + Send + Sync>,
    pub export: Arc<dyn IExportContentUseCase + Send + Sync>,
    /// Paths marked stale by content writes, served on `/api/revalidation`.
    pub revalidation_registry: Arc<InMemoryRevalidator>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let run_migrations = env::var("RUN_MIGRATIONS")
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    // SMTP SETUPS
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = SmtpEmailSender::from_config(&SmtpConfig::from_env(&rust_env), &from_email)
        .expect("Failed to configure SMTP transport");

    let server_url = format!("{host}:{port}");
    info!(%server_url, env = %rust_env, "Binding server");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if run_migrations {
        Migrator::up(&conn, None)
            .await
            .expect("Failed to apply migrations");
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Cache invalidation: the registry always records, the webhook is optional
    let revalidation_registry = Arc::new(InMemoryRevalidator::new());
    let revalidation_config = RevalidationConfig::from_env();
    let revalidator: Arc<dyn PathRevalidator> = match revalidation_config.webhook_url {
        Some(url) => {
            let webhook = WebhookRevalidator::new(url, revalidation_config.secret)
                .expect("Failed to build revalidation webhook client");
            info!("Revalidation webhook enabled");
            let targets: Vec<Arc<dyn PathRevalidator>> =
                vec![revalidation_registry.clone(), Arc::new(webhook)];
            Arc::new(FanoutRevalidator::new(targets))
        }
        None => revalidation_registry.clone(),
    };

    // Repositories
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let case_study_repo = CaseStudyRepositoryPostgres::new(Arc::clone(&db_arc));
    let settings_repo = SettingsRepoPostgres::new(Arc::clone(&db_arc));
    let cv_fetcher = HttpCvFetcher::new().expect("Failed to build CV relay client");

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let admin_credentials = AdminCredentials::from_env();
    if !admin_credentials.is_configured() {
        tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; admin sign-in is disabled");
    }
    let login_admin_use_case = LoginAdminUseCase::new(
        AdminCredentialVerifier::new(admin_credentials),
        Arc::clone(&token_provider_arc),
    );

    // Projects and case studies
    let content_policy = ContentPolicy::from_env();
    let projects_reader = Arc::new(GetProjectsService::new(project_query.clone()));
    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(
            project_repo.clone(),
            revalidator.clone(),
        )),
        get_list: projects_reader.clone(),
        get_by_slug: projects_reader,
        patch: Arc::new(PatchProjectService::new(
            project_repo.clone(),
            revalidator.clone(),
        )),
        hard_delete: Arc::new(HardDeleteProjectService::new(
            project_repo,
            revalidator.clone(),
            content_policy.delete_policy,
        )),
    };
    let case_study = CaseStudyUseCases {
        create: Arc::new(CreateCaseStudyService::new(
            case_study_repo.clone(),
            revalidator.clone(),
        )),
        get: Arc::new(GetCaseStudiesService::new(project_query.clone())),
        patch: Arc::new(PatchCaseStudyService::new(
            case_study_repo.clone(),
            revalidator.clone(),
        )),
        delete: Arc::new(DeleteCaseStudyService::new(
            case_study_repo,
            revalidator.clone(),
        )),
    };

    // Settings
    let cv = CvUseCases {
        get: Arc::new(GetCvUseCase::new(settings_repo.clone())),
        update: Arc::new(UpdateCvUseCase::new(
            settings_repo.clone(),
            revalidator.clone(),
        )),
        delete: Arc::new(DeleteCvUseCase::new(
            settings_repo.clone(),
            revalidator.clone(),
        )),
        download: Arc::new(DownloadCvUseCase::new(
            settings_repo.clone(),
            Arc::new(cv_fetcher),
        )),
    };

    let state = AppState {
        login_admin_use_case: Arc::new(login_admin_use_case),
        session_cookie: SessionCookie::from_env(),
        project,
        case_study,
        cv,
        contact_use_case: Arc::new(SubmitContactUseCase::new(
            Arc::new(smtp_sender),
            ContactConfig::from_env(),
        )),
        sitemap: Arc::new(BuildSitemapUseCase::new(
            project_query.clone(),
            SiteConfig::from_env(),
        )),
        export: Arc::new(ExportContentUseCase::new(project_query, settings_repo)),
        revalidation_registry,
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::case_study::adapter::incoming::web::routes as case_study_routes;
    use crate::contact::adapter::incoming::web::routes as contact_routes;
    use crate::export::adapter::incoming::web::routes as export_routes;
    use crate::project::adapter::incoming::web::routes as project_routes;
    use crate::revalidation::adapter::incoming::web::routes as revalidation_routes;
    use crate::settings::adapter::incoming::web::routes as settings_routes;
    use crate::sitemap::adapter::incoming::web::routes as sitemap_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::login_admin_handler);
    cfg.service(auth_routes::logout_admin_handler);
    cfg.service(auth_routes::get_session_handler);
    // Projects
    cfg.service(project_routes::get_projects_handler);
    cfg.service(project_routes::get_project_by_slug_handler);
    cfg.service(project_routes::get_admin_projects_handler);
    cfg.service(project_routes::create_project_handler);
    cfg.service(project_routes::patch_project_handler);
    cfg.service(project_routes::hard_delete_project_handler);
    // Case studies
    cfg.service(case_study_routes::get_case_studies_handler);
    cfg.service(case_study_routes::get_case_study_by_slug_handler);
    cfg.service(case_study_routes::create_case_study_handler);
    cfg.service(case_study_routes::patch_case_study_handler);
    cfg.service(case_study_routes::delete_case_study_handler);
    // CV
    cfg.service(settings_routes::get_cv_handler);
    cfg.service(settings_routes::download_cv_handler);
    cfg.service(settings_routes::update_cv_handler);
    cfg.service(settings_routes::delete_cv_handler);
    // Contact, sitemap, export, revalidation
    cfg.service(contact_routes::submit_contact_handler);
    cfg.service(sitemap_routes::get_sitemap_handler);
    cfg.service(export_routes::export_content_handler);
    cfg.service(revalidation_routes::get_stale_paths_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
