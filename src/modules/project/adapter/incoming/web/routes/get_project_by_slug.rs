use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Session;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by slug
///
/// Drafts are only visible to an admin session.
#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    tag = "projects",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectWithCaseStudy>)),
        (
            status = 404,
            description = "No published project with this slug",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    session: Session,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.project.get_by_slug.execute(&slug).await {
        Ok(Some(found)) if found.project.is_published || session.is_admin() => {
            ApiResponse::success(found)
        }

        Ok(_) => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),

        Err(e) => {
            error!("Failed to load project {}: {}", slug, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::project::application::ports::incoming::use_cases::{
        GetProjectBySlugUseCase, GetProjectsError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, test_token_provider};
    use crate::tests::support::project_test_fixtures::{project_result, with_case_study};

    struct MockGetProjectBySlug;

    #[async_trait]
    impl GetProjectBySlugUseCase for MockGetProjectBySlug {
        async fn execute(
            &self,
            slug: &str,
        ) -> Result<Option<ProjectWithCaseStudy>, GetProjectsError> {
            match slug {
                "live" => Ok(Some(with_case_study(project_result("live", true), true))),
                "draft" => Ok(Some(with_case_study(project_result("draft", false), false))),
                "broken" => Err(GetProjectsError::QueryFailed("boom".to_string())),
                _ => Ok(None),
            }
        }
    }

    async fn call(uri: &str, token: Option<String>) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_get_project_by_slug(MockGetProjectBySlug)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_project_by_slug_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri(uri);
        if let Some(token) = token {
            req = req.insert_header(("Authorization", format!("Bearer {}", token)));
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_published_project_is_public() {
        let resp = call("/api/projects/live", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["slug"], "live");
        assert_eq!(body["data"]["case_study"]["overview"], "Overview");
    }

    #[actix_web::test]
    async fn test_draft_is_hidden_from_public() {
        let resp = call("/api/projects/draft", None).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_admin_sees_draft() {
        let resp = call("/api/projects/draft", Some(admin_token())).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_slug_is_not_found() {
        let resp = call("/api/projects/ghost", Some(admin_token())).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_query_failure_is_internal_error() {
        let resp = call("/api/projects/broken", None).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
