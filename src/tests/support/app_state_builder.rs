use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::incoming::web::SessionCookie;
use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::case_study::application::case_study_use_cases::CaseStudyUseCases;
use crate::case_study::application::ports::incoming::use_cases::{
    CreateCaseStudyUseCase, DeleteCaseStudyUseCase, GetCaseStudiesUseCase, PatchCaseStudyUseCase,
};
use crate::contact::application::use_cases::submit_contact::ISubmitContactUseCase;
use crate::export::application::use_cases::export_content::IExportContentUseCase;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectBySlugUseCase, GetProjectsUseCase, HardDeleteProjectUseCase,
    PatchProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::revalidation::adapter::outgoing::InMemoryRevalidator;
use crate::settings::application::cv_use_cases::CvUseCases;
use crate::settings::application::use_cases::{
    delete_cv::IDeleteCvUseCase, download_cv::IDownloadCvUseCase, get_cv::IGetCvUseCase,
    update_cv::IUpdateCvUseCase,
};
use crate::sitemap::application::use_cases::build_sitemap::IBuildSitemapUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Assembles an `AppState` where every use case panics unless the test
/// swaps in its own implementation.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    project: ProjectUseCases,
    case_study: CaseStudyUseCases,
    cv: CvUseCases,
    contact: Arc<dyn ISubmitContactUseCase + Send + Sync>,
    sitemap: Arc<dyn IBuildSitemapUseCase + Send + Sync>,
    export: Arc<dyn IExportContentUseCase + Send + Sync>,
    revalidation_registry: Arc<InMemoryRevalidator>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_by_slug: Arc::new(StubGetProjectBySlugUseCase),
                patch: Arc::new(StubPatchProjectUseCase),
                hard_delete: Arc::new(StubHardDeleteProjectUseCase),
            },
            case_study: CaseStudyUseCases {
                create: Arc::new(StubCreateCaseStudyUseCase),
                get: Arc::new(StubGetCaseStudiesUseCase),
                patch: Arc::new(StubPatchCaseStudyUseCase),
                delete: Arc::new(StubDeleteCaseStudyUseCase),
            },
            cv: CvUseCases {
                get: Arc::new(StubGetCvUseCase),
                update: Arc::new(StubUpdateCvUseCase),
                delete: Arc::new(StubDeleteCvUseCase),
                download: Arc::new(StubDownloadCvUseCase),
            },
            contact: Arc::new(StubSubmitContactUseCase),
            sitemap: Arc::new(StubBuildSitemapUseCase),
            export: Arc::new(StubExportContentUseCase),
            revalidation_registry: Arc::new(InMemoryRevalidator::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login_admin(
        mut self,
        uc: impl ILoginAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_project_by_slug(
        mut self,
        uc: impl GetProjectBySlugUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_patch_project(
        mut self,
        uc: impl PatchProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.patch = Arc::new(uc);
        self
    }

    pub fn with_hard_delete_project(
        mut self,
        uc: impl HardDeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.hard_delete = Arc::new(uc);
        self
    }

    pub fn with_create_case_study(
        mut self,
        uc: impl CreateCaseStudyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.case_study.create = Arc::new(uc);
        self
    }

    pub fn with_get_case_studies(
        mut self,
        uc: impl GetCaseStudiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.case_study.get = Arc::new(uc);
        self
    }

    pub fn with_patch_case_study(
        mut self,
        uc: impl PatchCaseStudyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.case_study.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_case_study(
        mut self,
        uc: impl DeleteCaseStudyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.case_study.delete = Arc::new(uc);
        self
    }

    pub fn with_get_cv(mut self, uc: impl IGetCvUseCase + Send + Sync + 'static) -> Self {
        self.cv.get = Arc::new(uc);
        self
    }

    pub fn with_update_cv(mut self, uc: impl IUpdateCvUseCase + Send + Sync + 'static) -> Self {
        self.cv.update = Arc::new(uc);
        self
    }

    pub fn with_delete_cv(mut self, uc: impl IDeleteCvUseCase + Send + Sync + 'static) -> Self {
        self.cv.delete = Arc::new(uc);
        self
    }

    pub fn with_download_cv(
        mut self,
        uc: impl IDownloadCvUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cv.download = Arc::new(uc);
        self
    }

    pub fn with_contact(mut self, uc: impl ISubmitContactUseCase + Send + Sync + 'static) -> Self {
        self.contact = Arc::new(uc);
        self
    }

    pub fn with_sitemap(mut self, uc: impl IBuildSitemapUseCase + Send + Sync + 'static) -> Self {
        self.sitemap = Arc::new(uc);
        self
    }

    pub fn with_export(mut self, uc: impl IExportContentUseCase + Send + Sync + 'static) -> Self {
        self.export = Arc::new(uc);
        self
    }

    /// The registry the built state will expose on `/api/revalidation`.
    pub fn revalidation_registry(&self) -> &Arc<InMemoryRevalidator> {
        &self.revalidation_registry
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin_use_case: self.login_admin,
            session_cookie: SessionCookie::new(false),
            project: self.project,
            case_study: self.case_study,
            cv: self.cv,
            contact_use_case: self.contact,
            sitemap: self.sitemap,
            export: self.export,
            revalidation_registry: self.revalidation_registry,
        })
    }
}
