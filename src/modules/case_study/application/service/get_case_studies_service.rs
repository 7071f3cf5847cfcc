use async_trait::async_trait;

use crate::case_study::application::ports::incoming::use_cases::{
    GetCaseStudiesError, GetCaseStudiesUseCase,
};
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectWithCaseStudy};

/// Case studies are read through the project query: a case study is only
/// public while its project is published.
#[derive(Debug, Clone)]
pub struct GetCaseStudiesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetCaseStudiesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCaseStudiesUseCase for GetCaseStudiesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn list(&self) -> Result<Vec<ProjectWithCaseStudy>, GetCaseStudiesError> {
        Ok(self.query.list_case_studies().await?)
    }

    async fn by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProjectWithCaseStudy>, GetCaseStudiesError> {
        let found = self.query.find_by_slug(slug).await?;

        Ok(found.filter(|p| p.project.is_published && p.case_study.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::ports::outgoing::ProjectQueryError;
    use crate::tests::support::project_test_fixtures::{project_result, with_case_study};

    struct MockProjectQuery {
        rows: Vec<ProjectWithCaseStudy>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list_projects(
            &self,
            _published_only: bool,
        ) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
            unimplemented!("not used")
        }

        async fn find_by_slug(
            &self,
            slug: &str,
        ) -> Result<Option<ProjectWithCaseStudy>, ProjectQueryError> {
            Ok(self.rows.iter().find(|r| r.project.slug == slug).cloned())
        }

        async fn list_case_studies(
            &self,
        ) -> Result<Vec<ProjectWithCaseStudy>, ProjectQueryError> {
            Ok(self
                .rows
                .iter()
                .filter(|r| r.project.is_published && r.case_study.is_some())
                .cloned()
                .collect())
        }
    }

    fn service() -> GetCaseStudiesService<MockProjectQuery> {
        GetCaseStudiesService::new(MockProjectQuery {
            rows: vec![
                with_case_study(project_result("public-cs", true), true),
                with_case_study(project_result("draft-cs", false), true),
                with_case_study(project_result("no-cs", true), false),
            ],
        })
    }

    #[tokio::test]
    async fn test_list_only_published_with_case_study() {
        let list = service().list().await.unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].project.slug, "public-cs");
    }

    #[tokio::test]
    async fn test_by_slug_hides_drafts_and_bare_projects() {
        let service = service();

        assert!(service.by_slug("public-cs").await.unwrap().is_some());
        assert!(service.by_slug("draft-cs").await.unwrap().is_none());
        assert!(service.by_slug("no-cs").await.unwrap().is_none());
        assert!(service.by_slug("ghost").await.unwrap().is_none());
    }
}
