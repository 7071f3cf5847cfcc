use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::application::domain::entities::{Identity, Role};
use crate::auth::application::use_cases::login_admin::{LoginAdminResponse, LoginRequest};
use crate::case_study::application::ports::incoming::use_cases::CreateCaseStudyInput;
use crate::case_study::application::ports::outgoing::CaseStudyResult;
use crate::contact::application::use_cases::submit_contact::{ContactInput, ContactSent};
use crate::export::application::use_cases::export_content::ContentExport;
use crate::project::application::ports::incoming::use_cases::CreateProjectInput;
use crate::project::application::ports::outgoing::{ProjectResult, ProjectWithCaseStudy};
use crate::revalidation::adapter::outgoing::StalePath;
use crate::settings::application::use_cases::update_cv::UpdateCvInput;
use crate::settings::domain::entities::CvSettings;

use crate::auth::adapter::incoming::web::routes::{
    __path_get_session_handler, __path_login_admin_handler, __path_logout_admin_handler,
};
use crate::case_study::adapter::incoming::web::routes::{
    __path_create_case_study_handler, __path_delete_case_study_handler,
    __path_get_case_studies_handler, __path_get_case_study_by_slug_handler,
    __path_patch_case_study_handler,
};
use crate::contact::adapter::incoming::web::routes::__path_submit_contact_handler;
use crate::export::adapter::incoming::web::routes::__path_export_content_handler;
use crate::health::{__path_health, __path_readiness};
use crate::project::adapter::incoming::web::routes::{
    __path_create_project_handler, __path_get_admin_projects_handler,
    __path_get_project_by_slug_handler, __path_get_projects_handler,
    __path_hard_delete_project_handler, __path_patch_project_handler,
};
use crate::revalidation::adapter::incoming::web::routes::__path_get_stale_paths_handler;
use crate::settings::adapter::incoming::web::routes::{
    __path_delete_cv_handler, __path_download_cv_handler, __path_get_cv_handler,
    __path_update_cv_handler,
};
use crate::sitemap::adapter::incoming::web::routes::__path_get_sitemap_handler;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "API documentation for Portfolio Content Management System",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        health,
        readiness,

        // Auth endpoints
        login_admin_handler,
        logout_admin_handler,
        get_session_handler,

        // Project endpoints
        get_projects_handler,
        get_project_by_slug_handler,
        get_admin_projects_handler,
        create_project_handler,
        patch_project_handler,
        hard_delete_project_handler,

        // Case study endpoints
        get_case_studies_handler,
        get_case_study_by_slug_handler,
        create_case_study_handler,
        patch_case_study_handler,
        delete_case_study_handler,

        // CV endpoints
        get_cv_handler,
        update_cv_handler,
        delete_cv_handler,
        download_cv_handler,

        // Public extras
        submit_contact_handler,
        get_sitemap_handler,
        get_stale_paths_handler,

        // Admin tools
        export_content_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequest,
            LoginAdminResponse,
            Identity,
            Role,

            // Content DTOs
            CreateProjectInput,
            ProjectResult,
            ProjectWithCaseStudy,
            CreateCaseStudyInput,
            CaseStudyResult,
            UpdateCvInput,
            CvSettings,
            ContactInput,
            ContactSent,
            ContentExport,
            StalePath,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Admin session endpoints"),
        (name = "projects", description = "Project management endpoints"),
        (name = "case-studies", description = "Case study endpoints"),
        (name = "cv", description = "CV link and download"),
        (name = "contact", description = "Contact form relay"),
        (name = "sitemap", description = "XML sitemap"),
        (name = "revalidation", description = "Stale public routes"),
        (name = "export", description = "Content export"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
