pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Public origin of the rendered site, used for absolute sitemap links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
}

impl SiteConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `SITE_URL`, defaulting to the local front end.
    pub fn from_env() -> Self {
        match std::env::var("SITE_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(DEFAULT_SITE_URL),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        if path == "/" {
            self.base_url.clone()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}
