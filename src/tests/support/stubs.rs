use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminResponse, LoginError, LoginRequest,
};
use crate::case_study::application::ports::incoming::use_cases::{
    CreateCaseStudyError, CreateCaseStudyInput, CreateCaseStudyUseCase, DeleteCaseStudyError,
    DeleteCaseStudyUseCase, GetCaseStudiesError, GetCaseStudiesUseCase, PatchCaseStudyError,
    PatchCaseStudyInput, PatchCaseStudyUseCase,
};
use crate::case_study::application::ports::outgoing::CaseStudyResult;
use crate::contact::application::use_cases::submit_contact::{
    ContactInput, ContactSent, ISubmitContactUseCase, SubmitContactError,
};
use crate::export::application::use_cases::export_content::{
    ContentExport, ExportContentError, IExportContentUseCase,
};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectInput, CreateProjectUseCase, GetProjectBySlugUseCase,
    GetProjectsError, GetProjectsUseCase, HardDeleteProjectError, HardDeleteProjectUseCase,
    PatchProjectError, PatchProjectInput, PatchProjectUseCase,
};
use crate::project::application::ports::outgoing::{ProjectResult, ProjectWithCaseStudy};
use crate::revalidation::application::ports::outgoing::{PathRevalidator, RevalidationError};
use crate::settings::application::use_cases::delete_cv::{DeleteCvError, IDeleteCvUseCase};
use crate::settings::application::use_cases::download_cv::{
    CvDownload, DownloadCvError, IDownloadCvUseCase,
};
use crate::settings::application::use_cases::get_cv::{GetCvError, IGetCvUseCase};
use crate::settings::application::use_cases::update_cv::{
    IUpdateCvUseCase, UpdateCvError, UpdateCvInput,
};
use crate::settings::domain::entities::CvSettings;
use crate::sitemap::application::use_cases::build_sitemap::{IBuildSitemapUseCase, SitemapError};

// ============================================================================
// Revalidation
// ============================================================================

/// Records every batch of paths it is asked to invalidate.
#[derive(Debug, Default)]
pub struct RecordingRevalidator {
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRevalidator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PathRevalidator for RecordingRevalidator {
    async fn revalidate(&self, paths: &[String]) -> Result<(), RevalidationError> {
        self.calls.lock().unwrap().push(paths.to_vec());
        Ok(())
    }
}

// ============================================================================
// Defaults for TestAppStateBuilder. Each panics if a test reaches it.
// ============================================================================

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _input: CreateProjectInput,
    ) -> Result<ProjectWithCaseStudy, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(
        &self,
        _published_only: bool,
    ) -> Result<Vec<ProjectWithCaseStudy>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectBySlugUseCase;

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<Option<ProjectWithCaseStudy>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProjectUseCase;

#[async_trait]
impl PatchProjectUseCase for StubPatchProjectUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _project_id: Uuid,
        _input: PatchProjectInput,
    ) -> Result<ProjectResult, PatchProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubHardDeleteProjectUseCase;

#[async_trait]
impl HardDeleteProjectUseCase for StubHardDeleteProjectUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _project_id: Uuid,
    ) -> Result<(), HardDeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCaseStudyUseCase;

#[async_trait]
impl CreateCaseStudyUseCase for StubCreateCaseStudyUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _project_id: Uuid,
        _input: CreateCaseStudyInput,
    ) -> Result<CaseStudyResult, CreateCaseStudyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCaseStudiesUseCase;

#[async_trait]
impl GetCaseStudiesUseCase for StubGetCaseStudiesUseCase {
    async fn list(&self) -> Result<Vec<ProjectWithCaseStudy>, GetCaseStudiesError> {
        unimplemented!("Not used in this test")
    }

    async fn by_slug(
        &self,
        _slug: &str,
    ) -> Result<Option<ProjectWithCaseStudy>, GetCaseStudiesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPatchCaseStudyUseCase;

#[async_trait]
impl PatchCaseStudyUseCase for StubPatchCaseStudyUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _case_study_id: Uuid,
        _input: PatchCaseStudyInput,
    ) -> Result<CaseStudyResult, PatchCaseStudyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCaseStudyUseCase;

#[async_trait]
impl DeleteCaseStudyUseCase for StubDeleteCaseStudyUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _case_study_id: Uuid,
    ) -> Result<(), DeleteCaseStudyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCvUseCase;

#[async_trait]
impl IGetCvUseCase for StubGetCvUseCase {
    async fn execute(&self) -> Result<Option<CvSettings>, GetCvError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCvUseCase;

#[async_trait]
impl IUpdateCvUseCase for StubUpdateCvUseCase {
    async fn execute(
        &self,
        _session: &Session,
        _input: UpdateCvInput,
    ) -> Result<CvSettings, UpdateCvError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCvUseCase;

#[async_trait]
impl IDeleteCvUseCase for StubDeleteCvUseCase {
    async fn execute(&self, _session: &Session) -> Result<(), DeleteCvError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDownloadCvUseCase;

#[async_trait]
impl IDownloadCvUseCase for StubDownloadCvUseCase {
    async fn execute(&self) -> Result<CvDownload, DownloadCvError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl ISubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _input: ContactInput) -> Result<ContactSent, SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubBuildSitemapUseCase;

#[async_trait]
impl IBuildSitemapUseCase for StubBuildSitemapUseCase {
    async fn execute(&self) -> Result<String, SitemapError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubExportContentUseCase;

#[async_trait]
impl IExportContentUseCase for StubExportContentUseCase {
    async fn execute(&self, _session: &Session) -> Result<ContentExport, ExportContentError> {
        unimplemented!("Not used in this test")
    }
}
