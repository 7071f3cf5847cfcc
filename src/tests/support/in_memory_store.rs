use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::case_study::application::ports::outgoing::{
    CaseStudyRepository, CaseStudyRepositoryError, CaseStudyResult, CreateCaseStudyData,
    PatchCaseStudyData,
};
use crate::project::application::ports::outgoing::{
    CreateProjectData, DeletePolicy, PatchProjectData, ProjectQuery, ProjectQueryError,
    ProjectRepository, ProjectRepositoryError, ProjectResult, ProjectWithCaseStudy,
};
use crate::settings::application::ports::outgoing::{SettingsRepository, SettingsRepositoryError};
use crate::settings::domain::entities::CvSettings;
use crate::shared::PatchField;

// ============================================================================
// Settings
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemorySettingsRepository {
    row: Arc<Mutex<Option<CvSettings>>>,
}

impl InMemorySettingsRepository {
    pub async fn row_count(&self) -> usize {
        usize::from(self.row.lock().await.is_some())
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn get_settings(&self) -> Result<Option<CvSettings>, SettingsRepositoryError> {
        Ok(self.row.lock().await.clone())
    }

    async fn upsert_cv(
        &self,
        cv_url: String,
        cv_file_name: Option<String>,
    ) -> Result<CvSettings, SettingsRepositoryError> {
        let settings = CvSettings {
            cv_url: Some(cv_url),
            cv_file_name,
            updated_at: Utc::now(),
        };
        *self.row.lock().await = Some(settings.clone());
        Ok(settings)
    }

    async fn clear_cv(&self) -> Result<(), SettingsRepositoryError> {
        if let Some(row) = self.row.lock().await.as_mut() {
            row.cv_url = None;
            row.cv_file_name = None;
            row.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ============================================================================
// Projects and case studies
// ============================================================================

/// Projects with their case studies, held the way the joined query returns
/// them. Mirrors the unique slug and one-case-study-per-project rules of the
/// database schema.
#[derive(Clone, Default)]
pub struct InMemoryContentStore {
    rows: Arc<RwLock<Vec<ProjectWithCaseStudy>>>,
}

impl InMemoryContentStore {
    pub async fn seed(&self, row: ProjectWithCaseStudy) {
        self.rows.write().await.push(row);
    }
}

fn newest_first(mut rows: Vec<ProjectWithCaseStudy>) -> Vec<ProjectWithCaseStudy> {
    rows.sort_by(|a, b| b.project.created_at.cmp(&a.project.created_at));
    rows
}

fn apply<T>(target: &mut T, field: PatchField<T>) {
    if let PatchField::Value(value) = field {
        *target = value;
    }
}

fn apply_nullable<T>(target: &mut Option<T>, field: PatchField<T>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = None,
        PatchField::Value(value) => *target = Some(value),
    }
}

fn new_case_study(project_id: Uuid, data: CreateCaseStudyData) -> CaseStudyResult {
    let now = Utc::now();
    CaseStudyResult {
        id: Uuid::new_v4(),
        project_id,
        overview: data.overview,
        problem: data.problem,
        solution: data.solution,
        challenges: data.challenges,
        architecture: data.architecture,
        screenshots: data.screenshots,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl ProjectQuery for InMemoryContentStore {
    async fn list_projects(
        &self,
        published_only: bool,
    ) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
        let rows = self.rows.read().await;
        Ok(newest_first(
            rows.iter()
                .filter(|row| !published_only || row.project.is_published)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProjectWithCaseStudy>, ProjectQueryError> {
        let slug = slug.trim().to_lowercase();
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|row| row.project.slug == slug).cloned())
    }

    async fn list_case_studies(&self) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
        let rows = self.rows.read().await;
        Ok(newest_first(
            rows.iter()
                .filter(|row| row.project.is_published && row.case_study.is_some())
                .cloned()
                .collect(),
        ))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryContentStore {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectWithCaseStudy, ProjectRepositoryError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.project.slug == data.slug) {
            return Err(ProjectRepositoryError::SlugAlreadyExists);
        }

        let now = Utc::now();
        let project = ProjectResult {
            id: Uuid::new_v4(),
            title: data.title,
            slug: data.slug,
            short_desc: data.short_desc,
            full_desc: data.full_desc,
            tech_stack: data.tech_stack,
            github_url: data.github_url,
            demo_url: data.demo_url,
            cover_image: data.cover_image,
            is_featured: data.is_featured,
            is_published: data.is_published,
            created_at: now,
            updated_at: now,
        };
        let case_study = data.case_study.map(|cs| new_case_study(project.id, cs));

        let created = ProjectWithCaseStudy {
            project,
            case_study,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn patch_project(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut rows = self.rows.write().await;

        if let Some(slug) = data.slug.as_value() {
            if rows
                .iter()
                .any(|row| row.project.id != project_id && &row.project.slug == slug)
            {
                return Err(ProjectRepositoryError::SlugAlreadyExists);
            }
        }

        let row = rows
            .iter_mut()
            .find(|row| row.project.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;
        let project = &mut row.project;

        apply(&mut project.title, data.title);
        apply(&mut project.slug, data.slug);
        apply(&mut project.short_desc, data.short_desc);
        apply(&mut project.full_desc, data.full_desc);
        apply(&mut project.tech_stack, data.tech_stack);
        apply_nullable(&mut project.github_url, data.github_url);
        apply_nullable(&mut project.demo_url, data.demo_url);
        apply_nullable(&mut project.cover_image, data.cover_image);
        apply(&mut project.is_featured, data.is_featured);
        apply(&mut project.is_published, data.is_published);
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete_project(
        &self,
        project_id: Uuid,
        policy: DeletePolicy,
    ) -> Result<(), ProjectRepositoryError> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|row| row.project.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if policy == DeletePolicy::Restrict && rows[index].case_study.is_some() {
            return Err(ProjectRepositoryError::HasCaseStudy);
        }

        rows.remove(index);
        Ok(())
    }
}

#[async_trait]
impl CaseStudyRepository for InMemoryContentStore {
    async fn create_case_study(
        &self,
        project_id: Uuid,
        data: CreateCaseStudyData,
    ) -> Result<CaseStudyResult, CaseStudyRepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.project.id == project_id)
            .ok_or(CaseStudyRepositoryError::ProjectNotFound)?;

        if row.case_study.is_some() {
            return Err(CaseStudyRepositoryError::CaseStudyAlreadyExists);
        }

        let created = new_case_study(project_id, data);
        row.case_study = Some(created.clone());
        Ok(created)
    }

    async fn patch_case_study(
        &self,
        case_study_id: Uuid,
        data: PatchCaseStudyData,
    ) -> Result<CaseStudyResult, CaseStudyRepositoryError> {
        let mut rows = self.rows.write().await;
        let case_study = rows
            .iter_mut()
            .filter_map(|row| row.case_study.as_mut())
            .find(|cs| cs.id == case_study_id)
            .ok_or(CaseStudyRepositoryError::NotFound)?;

        if data.is_empty() {
            return Ok(case_study.clone());
        }

        apply(&mut case_study.overview, data.overview);
        apply(&mut case_study.problem, data.problem);
        apply(&mut case_study.solution, data.solution);
        apply(&mut case_study.challenges, data.challenges);
        apply_nullable(&mut case_study.architecture, data.architecture);
        apply(&mut case_study.screenshots, data.screenshots);
        case_study.updated_at = Utc::now();

        Ok(case_study.clone())
    }

    async fn delete_case_study(&self, case_study_id: Uuid) -> Result<(), CaseStudyRepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.case_study.as_ref().is_some_and(|cs| cs.id == case_study_id))
            .ok_or(CaseStudyRepositoryError::NotFound)?;

        row.case_study = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case_study::application::ports::incoming::use_cases::{
        CreateCaseStudyInput, CreateCaseStudyUseCase, DeleteCaseStudyUseCase,
    };
    use crate::case_study::application::service::{CreateCaseStudyService, DeleteCaseStudyService};
    use crate::project::application::ports::incoming::use_cases::{
        CreateProjectError, CreateProjectInput, CreateProjectUseCase, GetProjectBySlugUseCase,
        GetProjectsUseCase, HardDeleteProjectUseCase,
    };
    use crate::project::application::service::{
        CreateProjectService, GetProjectsService, HardDeleteProjectService,
    };
    use crate::tests::support::auth_helper::admin_session;
    use crate::tests::support::stubs::RecordingRevalidator;
    use serde_json::json;

    fn create_input(value: serde_json::Value) -> CreateProjectInput {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_created_project_is_found_by_derived_slug() {
        let store = InMemoryContentStore::default();
        let create = CreateProjectService::new(store.clone(), RecordingRevalidator::new());
        let read = GetProjectsService::new(store.clone());

        create
            .execute(&admin_session(), create_input(json!({ "title": "Demo" })))
            .await
            .unwrap();

        let found = GetProjectBySlugUseCase::execute(&read, "demo")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.project.title, "Demo");
        assert!(!found.project.is_published);
        assert!(found.case_study.is_none());

        let public = GetProjectsUseCase::execute(&read, true).await.unwrap();
        assert!(public.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let store = InMemoryContentStore::default();
        let create = CreateProjectService::new(store.clone(), RecordingRevalidator::new());

        create
            .execute(&admin_session(), create_input(json!({ "title": "Demo" })))
            .await
            .unwrap();
        let err = create
            .execute(&admin_session(), create_input(json!({ "title": "demo" })))
            .await
            .unwrap_err();

        assert_eq!(err, CreateProjectError::SlugAlreadyExists);
    }

    #[tokio::test]
    async fn test_case_study_lifecycle() {
        let store = InMemoryContentStore::default();
        let revalidator = RecordingRevalidator::new();
        let created = CreateProjectService::new(store.clone(), revalidator.clone())
            .execute(
                &admin_session(),
                create_input(json!({ "title": "Demo", "is_published": true })),
            )
            .await
            .unwrap();

        let case_study = CreateCaseStudyService::new(store.clone(), revalidator.clone())
            .execute(
                &admin_session(),
                created.project.id,
                CreateCaseStudyInput {
                    overview: "Overview".to_string(),
                    problem: "Problem".to_string(),
                    solution: "Solution".to_string(),
                    challenges: "Challenges".to_string(),
                    architecture: None,
                    screenshots: vec![],
                },
            )
            .await
            .unwrap();

        assert_eq!(store.list_case_studies().await.unwrap().len(), 1);

        DeleteCaseStudyService::new(store.clone(), revalidator.clone())
            .execute(&admin_session(), case_study.id)
            .await
            .unwrap();

        let row = store.find_by_slug("demo").await.unwrap().unwrap();
        assert!(row.case_study.is_none());
    }

    #[tokio::test]
    async fn test_restrict_policy_keeps_documented_project() {
        let store = InMemoryContentStore::default();
        let created = CreateProjectService::new(store.clone(), RecordingRevalidator::new())
            .execute(
                &admin_session(),
                create_input(json!({
                    "title": "Demo",
                    "case_study": {
                        "overview": "o", "problem": "p", "solution": "s", "challenges": "c"
                    }
                })),
            )
            .await
            .unwrap();

        let restrict = HardDeleteProjectService::new(
            store.clone(),
            RecordingRevalidator::new(),
            DeletePolicy::Restrict,
        );
        assert!(restrict
            .execute(&admin_session(), created.project.id)
            .await
            .is_err());

        let cascade = HardDeleteProjectService::new(
            store.clone(),
            RecordingRevalidator::new(),
            DeletePolicy::Cascade,
        );
        cascade
            .execute(&admin_session(), created.project.id)
            .await
            .unwrap();
        assert!(store.find_by_slug("demo").await.unwrap().is_none());
    }
}
