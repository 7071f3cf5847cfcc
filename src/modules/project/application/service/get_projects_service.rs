use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectBySlugUseCase, GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectWithCaseStudy;

#[derive(Debug, Clone)]
pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        published_only: bool,
    ) -> Result<Vec<ProjectWithCaseStudy>, GetProjectsError> {
        Ok(self.query.list_projects(published_only).await?)
    }
}

#[async_trait]
impl<Q> GetProjectBySlugUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Option<ProjectWithCaseStudy>, GetProjectsError> {
        Ok(self.query.find_by_slug(slug).await?)
    }
}
