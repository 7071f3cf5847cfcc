use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::project::application::ports::outgoing::ProjectQuery;
use crate::revalidation::application::paths;
use crate::sitemap::application::site_config::SiteConfig;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SitemapError {
    #[error("Failed to load projects: {0}")]
    QueryFailed(String),

    #[error("Failed to render sitemap: {0}")]
    Render(String),
}

#[async_trait]
pub trait IBuildSitemapUseCase: Send + Sync {
    async fn execute(&self) -> Result<String, SitemapError>;
}

pub struct BuildSitemapUseCase<Q: ProjectQuery> {
    query: Q,
    config: SiteConfig,
}

impl<Q: ProjectQuery> BuildSitemapUseCase<Q> {
    pub fn new(query: Q, config: SiteConfig) -> Self {
        Self { query, config }
    }

    async fn entries(&self, now: DateTime<Utc>) -> Result<Vec<SitemapEntry>, SitemapError> {
        let static_routes = [
            (paths::HOME, ChangeFreq::Monthly, 1.0),
            (paths::PROJECTS, ChangeFreq::Weekly, 0.8),
            (paths::CASE_STUDIES, ChangeFreq::Weekly, 0.8),
            (paths::CONTACT, ChangeFreq::Monthly, 0.5),
        ];

        let mut entries: Vec<SitemapEntry> = static_routes
            .into_iter()
            .map(|(path, changefreq, priority)| SitemapEntry {
                loc: self.config.url_for(path),
                lastmod: now,
                changefreq,
                priority,
            })
            .collect();

        let published = self
            .query
            .list_projects(true)
            .await
            .map_err(|e| SitemapError::QueryFailed(e.to_string()))?;

        entries.extend(
            published
                .into_iter()
                .filter(|p| p.case_study.is_some())
                .map(|p| SitemapEntry {
                    loc: self.config.url_for(&paths::case_study_detail(&p.project.slug)),
                    lastmod: p.project.updated_at,
                    changefreq: ChangeFreq::Monthly,
                    priority: 0.7,
                }),
        );

        Ok(entries)
    }
}

#[async_trait]
impl<Q: ProjectQuery + Send + Sync> IBuildSitemapUseCase for BuildSitemapUseCase<Q> {
    async fn execute(&self) -> Result<String, SitemapError> {
        let entries = self.entries(Utc::now()).await?;
        render_urlset(&entries)
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SitemapError> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Render(e.to_string()))
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

/// Serializes entries as a sitemaps.org `urlset`. Text is XML-escaped.
pub fn render_urlset(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    write(&mut writer, Event::Start(urlset))?;

    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        write_text_element(
            &mut writer,
            "lastmod",
            &entry.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_text_element(&mut writer, "changefreq", entry.changefreq.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| SitemapError::Render(e.to_string()))
}
